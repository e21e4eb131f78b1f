//! Action Items Column Component
//!
//! Right-hand column of the retro board listing the team's open action items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateActionItemRequest};
use crate::board_view::{active_action_items, sort_action_items};
use crate::components::{ActionItem, AddItemInput};
use crate::context::use_app_context;
use crate::error::log_error;
use crate::format::parse_action_input;
use crate::models::Action;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ActionItemsColumn(#[prop(into)] team_id: String, #[prop(optional)] readonly: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let team_id = StoredValue::new(team_id);

    let visible = Memo::new(move |_| store.action_items().with(|all| sort_action_items(&active_action_items(all))));
    let count = move || visible.with(|items| items.iter().filter(|a| !a.completed).count());

    // "do thing @alice" -> task "do thing", assignee "alice"
    let add_action = move |input: String| {
        let (task, assignee) = parse_action_input(&input);
        if task.is_empty() {
            return;
        }
        let team_id = team_id.get_value();
        spawn_local(async move {
            let request = CreateActionItemRequest::new(&task, assignee);
            if log_error("create action item", api::create_action_item(&team_id, &request).await).is_some() {
                ctx.reload();
            }
        });
    };

    view! {
        <div class="column action-items-column" data-testid="actionItemsColumn">
            <div class="column-header">
                <span class="column-title">"Action Items"</span>
                <span class="column-count" data-testid="columnCount">{count}</span>
            </div>
            <Show when=move || !readonly>
                <AddItemInput
                    placeholder="Enter an Action Item"
                    test_id="addActionItemInput"
                    on_submit=add_action
                />
            </Show>
            <div class="column-items">
                <For
                    each=move || visible.get()
                    key=|action| action.id
                    children=move |action: Action| {
                        let id = action.id;
                        let latest = Signal::derive(move || {
                            visible.with(|items| items.iter().find(|a| a.id == id).cloned().unwrap_or_else(|| action.clone()))
                        });
                        view! { <ActionItem action=latest team_id=team_id.get_value() readonly=readonly /> }
                    }
                />
            </div>
        </div>
    }
}
