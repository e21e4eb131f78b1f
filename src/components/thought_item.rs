//! Thought Item Component
//!
//! A single thought card with heart, edit, delete and discussed controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteColumnItem, EditColumnItem};
use crate::context::{use_app_context, AppContext};
use crate::error::log_error;
use crate::models::Thought;
use crate::store::{store_remove_thought, use_board_store, BoardStore};
use crate::view_state::{ItemViewState, ThoughtItemState, ThoughtMutation};

/// Send a thought mutation, then reconcile the board
pub fn dispatch_thought(team_id: String, mutation: ThoughtMutation, store: BoardStore, ctx: AppContext) {
    spawn_local(async move {
        let deleted = match &mutation {
            ThoughtMutation::Delete { id } => Some(*id),
            _ => None,
        };
        if log_error("update thought", mutation.send(&team_id).await).is_some() {
            ctx.invalidate_loads();
            if let Some(id) = deleted {
                store_remove_thought(&store, id);
            }
            ctx.reload();
        }
    });
}

/// A thought card
#[component]
pub fn ThoughtItem(
    #[prop(into)] thought: Signal<Thought>,
    #[prop(into)] team_id: String,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let team_id = StoredValue::new(team_id);
    let state = RwSignal::new(ThoughtItemState::new(thought.get_untracked(), readonly));

    // Reloads replace the data but keep an open editor
    Effect::new(move |_| {
        let latest = thought.get();
        state.update(|s| s.sync(latest));
    });

    // Memo so reloads do not rebuild an open editor
    let view_state = Memo::new(move |_| state.with(|s| s.view()));

    let send = move |mutation: Option<ThoughtMutation>| {
        if let Some(mutation) = mutation {
            dispatch_thought(team_id.get_value(), mutation, store, ctx);
        }
    };

    let class = move || {
        state.with(|s| {
            let mut c = String::from("thought-item column-item");
            if s.thought().discussed {
                c.push_str(" discussed");
            }
            if s.view() == ItemViewState::Editing {
                c.push_str(" editing");
            }
            c
        })
    };

    let default_view = move || {
        let message = move || state.with(|s| s.thought().message.clone());
        let hearts = move || state.with(|s| s.thought().hearts);
        let discussed = move || state.with(|s| s.thought().discussed);
        let readonly = move || state.with(|s| s.readonly());
        view! {
            <div class="thought-message" data-testid="thoughtMessage">{message}</div>
            <div class="column-item-buttons">
                <button
                    class="heart-button"
                    data-testid="heartButton"
                    title="Upvote"
                    disabled=move || readonly() || discussed()
                    on:click=move |_| send(state.with_untracked(|s| s.heart()))
                >
                    "❤ " {hearts}
                </button>
                <button
                    class="edit-button"
                    data-testid="editButton"
                    title="Edit"
                    disabled=move || readonly() || discussed()
                    on:click=move |_| { state.update(|s| { s.start_edit(); }); }
                >
                    "✎"
                </button>
                <button
                    class="delete-button"
                    data-testid="deleteButton"
                    title="Delete"
                    disabled=readonly
                    on:click=move |_| { state.update(|s| { s.start_delete(); }); }
                >
                    "×"
                </button>
                <button
                    class=move || if discussed() { "checkbox-button checked" } else { "checkbox-button" }
                    data-testid="checkboxButton"
                    title=move || if discussed() { "Mark as not discussed" } else { "Mark as discussed" }
                    disabled=readonly
                    on:click=move |_| send(state.with_untracked(|s| s.toggle_discussed()))
                >
                    {move || if discussed() { "✓" } else { "○" }}
                </button>
            </div>
        }
    };

    view! {
        <div class=class data-testid="thoughtItem">
            {move || match view_state.get() {
                ItemViewState::Editing => view! {
                    <EditColumnItem
                        initial_value=state.with_untracked(|s| s.draft().to_string())
                        on_confirm=move |text: String| send(state.try_update(|s| s.confirm_edit(&text)).flatten())
                        on_cancel=move |_: ()| state.update(|s| s.cancel())
                    />
                }.into_any(),
                ItemViewState::ConfirmingDelete => view! {
                    <DeleteColumnItem
                        message="Delete this Thought?"
                        on_confirm=move |_: ()| send(state.try_update(|s| s.confirm_delete()).flatten())
                        on_cancel=move |_: ()| state.update(|s| s.cancel())
                    />
                }.into_any(),
                ItemViewState::Default => default_view().into_any(),
            }}
        </div>
    }
}
