//! Retro Page
//!
//! The live board: thought columns, the action item column and drag-and-drop
//! of thoughts between columns.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DropTarget};

use crate::components::{dispatch_thought, ActionItemsColumn, Header, RetroSubheader, ThoughtsColumn};
use crate::context::use_app_context;
use crate::models::Column;
use crate::pages::{use_board_loader, BoardData};
use crate::store::{use_board_store, BoardStateStoreFields};
use crate::view_state::ThoughtItemState;

#[component]
pub fn RetroPage(#[prop(into)] team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let dnd = create_dnd_signals();

    use_board_loader(ctx, store, team_id.clone(), BoardData::Retro);

    let drop_team_id = team_id.clone();
    let listeners = bind_global_mouseup(dnd, move |thought_id, target| {
        let DropTarget::Column(column_id) = target;
        let thought = store.thoughts().with_untracked(|all| all.iter().find(|t| t.id == thought_id).cloned());
        let Some(thought) = thought else {
            log::warn!(target: "dnd", "dropped unknown thought {}", thought_id);
            return;
        };
        if let Some(mutation) = ThoughtItemState::new(thought, false).move_to(column_id) {
            dispatch_thought(drop_team_id.clone(), mutation, store, ctx);
        }
    });
    on_cleanup(move || listeners.remove());

    let columns = move || store.columns().get();
    let column_team_id = StoredValue::new(team_id.clone());

    view! {
        <div class="retro-page" data-testid="retroPage">
            <Header team_id=team_id.clone() />
            <RetroSubheader team_id=team_id.clone() />
            <div class=move || if dnd.dragging_id_read.get().is_some() { "retro-page-content dragging" } else { "retro-page-content" }>
                <For
                    each=columns
                    key=|column| column.id
                    children=move |column: Column| {
                        let id = column.id;
                        let latest = Signal::derive(move || {
                            store.columns().with(|all| all.iter().find(|c| c.id == id).cloned().unwrap_or_else(|| column.clone()))
                        });
                        view! { <ThoughtsColumn column=latest team_id=column_team_id.get_value() dnd=dnd /> }
                    }
                />
                <ActionItemsColumn team_id=team_id />
            </div>
        </div>
    }
}
