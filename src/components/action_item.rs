//! Action Item Component
//!
//! A single action item card: task text, assignee, creation date and the
//! edit/delete/complete controls. Clicking the task opens a detail modal.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteColumnItem;
use crate::context::{use_app_context, AppContext};
use crate::error::log_error;
use crate::format::{format_date_created, MAX_ASSIGNEE_LENGTH, MAX_ITEM_LENGTH};
use crate::models::Action;
use crate::store::{store_remove_action_item, use_board_store, BoardStore};
use crate::view_state::{ActionItemState, ActionMutation, ItemViewState};

/// Send an action item mutation, then reconcile the board
pub fn dispatch_action(team_id: String, mutation: ActionMutation, store: BoardStore, ctx: AppContext) {
    spawn_local(async move {
        let deleted = match &mutation {
            ActionMutation::Delete { id } => Some(*id),
            _ => None,
        };
        if log_error("update action item", mutation.send(&team_id).await).is_some() {
            ctx.invalidate_loads();
            if let Some(id) = deleted {
                store_remove_action_item(&store, id);
            }
            ctx.reload();
        }
    });
}

#[component]
pub fn ActionItem(
    #[prop(into)] action: Signal<Action>,
    #[prop(into)] team_id: String,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] disable_animations: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let team_id = StoredValue::new(team_id);
    let state = RwSignal::new(ActionItemState::new(action.get_untracked(), readonly, disable_animations));
    let (modal_open, set_modal_open) = signal(false);

    Effect::new(move |_| {
        let latest = action.get();
        state.update(|s| s.sync(latest));
    });

    // Only the delete confirmation swaps the card body; editing keeps the
    // textarea mounted so it can take focus
    let confirming_delete = Memo::new(move |_| state.with(|s| s.view()) == ItemViewState::ConfirmingDelete);
    let editing = Memo::new(move |_| state.with(|s| s.is_editing()));
    let task_ref = NodeRef::<html::Textarea>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(textarea) = task_ref.get() {
                let _ = textarea.focus();
                textarea.select();
            }
        }
    });

    // Escape works wherever focus is, e.g. still on the Edit button
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if !editing.get_untracked() {
            return;
        }
        let key = ev.key();
        if state.try_update(|s| s.key_pressed(&key)).unwrap_or(false) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let send = move |mutation: Option<ActionMutation>| {
        if let Some(mutation) = mutation {
            dispatch_action(team_id.get_value(), mutation, store, ctx);
        }
    };

    let on_task_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(state.try_update(|s| s.confirm_edit()).flatten());
        }
    };

    let on_task_click = move |_| {
        if state.with_untracked(|s| s.can_open_modal()) {
            set_modal_open.set(true);
        }
    };

    let on_assignee_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send(state.try_update(|s| s.commit_assignee()).flatten());
        }
    };

    let date = move || state.with(|s| format_date_created(s.action().date_created.as_deref()));
    let completed = move || state.with(|s| s.action().completed);

    let default_view = move || {
        view! {
            <textarea
                class="action-item-task"
                data-testid="editableText"
                node_ref=task_ref
                maxlength=MAX_ITEM_LENGTH.to_string()
                readonly=move || state.with(|s| s.task_readonly())
                prop:value=move || state.with(|s| s.draft_task().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.edit_draft(&text));
                }
                on:keydown=on_task_keydown
                on:click=on_task_click
            />
            <div class="action-item-assignee">
                <label class="assignee-label">"@"</label>
                <input
                    type="text"
                    class="assignee-input"
                    data-testid="actionItemAssignee"
                    maxlength=MAX_ASSIGNEE_LENGTH.to_string()
                    disabled=move || state.with(|s| s.assignee_disabled())
                    prop:value=move || state.with(|s| s.draft_assignee().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.edit_assignee(&text));
                    }
                    on:keydown=on_assignee_keydown
                    on:blur=move |_| send(state.try_update(|s| s.commit_assignee()).flatten())
                />
            </div>
            <div class="column-item-buttons">
                <span class="date-created" data-testid="dateCreated">{date}</span>
                <button
                    class=move || if editing.get() { "edit-button selected" } else { "edit-button" }
                    data-testid="editButton"
                    title="Edit"
                    disabled=move || state.with(|s| s.edit_disabled())
                    on:click=move |_| { state.update(|s| { s.start_edit(); }); }
                >
                    "✎"
                </button>
                <button
                    class="delete-button"
                    data-testid="deleteButton"
                    title="Delete"
                    disabled=move || state.with(|s| s.delete_disabled())
                    on:click=move |_| { state.update(|s| { s.start_delete(); }); }
                >
                    "×"
                </button>
                <button
                    class=move || if completed() { "checkbox-button checked" } else { "checkbox-button" }
                    data-testid="checkboxButton"
                    title=move || if completed() { "Mark as not done" } else { "Mark as done" }
                    disabled=move || state.with(|s| s.checkbox_disabled())
                    on:click=move |_| send(state.try_update(|s| s.toggle_completed()).flatten())
                >
                    {move || if completed() { "✓" } else { "○" }}
                </button>
            </div>
        }
    };

    view! {
        <div class=move || state.with(|s| s.class_name()) data-testid="actionItem">
            {move || if confirming_delete.get() {
                view! {
                    <DeleteColumnItem
                        message="Delete this Action Item?"
                        on_confirm=move |_: ()| send(state.try_update(|s| s.confirm_delete()).flatten())
                        on_cancel=move |_: ()| state.update(|s| s.cancel_delete())
                    />
                }.into_any()
            } else {
                default_view().into_any()
            }}
        </div>
        <Show when=move || modal_open.get()>
            <ActionItemModal
                action=Signal::derive(move || state.with(|s| s.action().clone()))
                on_close=move |_: ()| set_modal_open.set(false)
            />
        </Show>
    }
}

/// Enlarged read-only view of one action item
#[component]
fn ActionItemModal(action: Signal<Action>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let assignee = move || action.with(|a| a.assignee.clone().unwrap_or_default());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal action-item-modal"
                data-testid="actionItemModal"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="action-item-modal-task">{move || action.with(|a| a.task.clone())}</div>
                <Show when=move || !assignee().is_empty()>
                    <div class="action-item-modal-assignee">"@" {assignee}</div>
                </Show>
                <div class="action-item-modal-footer">
                    <span class="date-created">
                        {move || action.with(|a| format_date_created(a.date_created.as_deref()))}
                    </span>
                    <span class="action-item-modal-status">
                        {move || if action.with(|a| a.completed) { "Done" } else { "Open" }}
                    </span>
                    <button class="cancel-button" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
