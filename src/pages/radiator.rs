//! Radiator Page
//!
//! Read-only wall display of the team's open action items, refreshed by polling.

use leptos::prelude::*;

use crate::board_view::active_action_items;
use crate::components::{ActionItem, Header};
use crate::context::use_app_context;
use crate::models::Action;
use crate::pages::{use_board_loader, BoardData};
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn RadiatorPage(#[prop(into)] team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let item_team_id = StoredValue::new(team_id.clone());

    use_board_loader(ctx, store, team_id.clone(), BoardData::ActionItems);

    let items = Memo::new(move |_| store.action_items().with(|all| active_action_items(all)));

    view! {
        <div class="radiator-page" data-testid="radiatorPage">
            <Header team_id=team_id />
            <div class="radiator-page-content">
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=|| view! { <p class="empty-state">"No action items yet."</p> }
                >
                    <div class="radiator-grid">
                        <For
                            each=move || items.get()
                            key=|action| action.id
                            children=move |action: Action| {
                                let id = action.id;
                                let latest = Signal::derive(move || {
                                    items.with(|all| all.iter().find(|a| a.id == id).cloned().unwrap_or_else(|| action.clone()))
                                });
                                view! {
                                    <ActionItem action=latest team_id=item_team_id.get_value() readonly=true disable_animations=true />
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
