//! Thoughts Column Component
//!
//! One retro column: editable title, thought count, sort toggle, add input
//! and the column's thought cards. The whole column is a drop target.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_column_mouseenter, make_on_mousedown, make_on_mouseleave, DndSignals, DropTarget};

use crate::api::{self, CreateThoughtRequest};
use crate::board_view::{column_thoughts, open_count};
use crate::components::{AddItemInput, ThoughtItem};
use crate::context::use_app_context;
use crate::error::log_error;
use crate::models::{Column, Thought};
use crate::store::{store_rename_column, use_board_store, BoardStateStoreFields};

const MAX_TITLE_LENGTH: usize = 16;

/// New title to send, if the draft is a real change
fn title_update(draft: &str, current: &str) -> Option<String> {
    let title = draft.trim();
    (!title.is_empty() && title != current).then(|| title.to_string())
}

#[component]
pub fn ThoughtsColumn(
    #[prop(into)] column: Signal<Column>,
    #[prop(into)] team_id: String,
    dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let team_id = StoredValue::new(team_id);
    let column_id = column.get_untracked().id;

    let (sort_by_hearts, set_sort_by_hearts) = signal(false);
    let (editing_title, set_editing_title) = signal(false);
    let (title_draft, set_title_draft) = signal(String::new());
    let title_ref = NodeRef::<html::Input>::new();

    // The input mounts after the double-click; take focus so Enter and blur work
    Effect::new(move |_| {
        if editing_title.get() {
            if let Some(input) = title_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let thoughts = Memo::new(move |_| {
        let column = column.get();
        store.thoughts().with(|all| column_thoughts(all, &column, sort_by_hearts.get()))
    });
    let count = move || thoughts.with(|t| open_count(t).0);

    let add_thought = move |message: String| {
        let team_id = team_id.get_value();
        let column = column.get_untracked();
        spawn_local(async move {
            let request = CreateThoughtRequest::new(&team_id, &column.topic, &message).in_column(column.id);
            if log_error("create thought", api::create_thought(&team_id, &request).await).is_some() {
                ctx.reload();
            }
        });
    };

    let start_title_edit = move |_: web_sys::MouseEvent| {
        set_title_draft.set(column.get_untracked().title);
        set_editing_title.set(true);
    };

    // Enter and the blur that follows it both land here
    let commit_title = move || {
        if !editing_title.get_untracked() {
            return;
        }
        set_editing_title.set(false);
        let Some(title) = title_update(&title_draft.get_untracked(), &column.get_untracked().title) else {
            return;
        };
        let team_id = team_id.get_value();
        spawn_local(async move {
            if log_error("rename column", api::update_column_title(&team_id, column_id, &title).await).is_some() {
                store_rename_column(&store, column_id, &title);
            }
        });
    };

    let on_title_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit_title();
        }
        "Escape" => set_editing_title.set(false),
        _ => {}
    };

    let is_drop_target = move || {
        dnd.dragging_id_read.get().is_some() && dnd.drop_target_read.get() == Some(DropTarget::Column(column_id))
    };

    view! {
        <div
            class=move || {
                let topic = column.with(|c| c.topic.clone());
                if is_drop_target() { format!("column thoughts-column {} drop-target", topic) } else { format!("column thoughts-column {}", topic) }
            }
            data-testid="thoughtsColumn"
            on:mouseenter=make_on_column_mouseenter(dnd, column_id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div class="column-header">
                {move || if editing_title.get() {
                    view! {
                        <input
                            type="text"
                            class="column-title-input"
                            node_ref=title_ref
                            data-testid="columnTitleInput"
                            maxlength=MAX_TITLE_LENGTH.to_string()
                            prop:value=move || title_draft.get()
                            on:input=move |ev| set_title_draft.set(event_target_value(&ev))
                            on:keydown=on_title_keydown
                            on:blur=move |_| commit_title()
                        />
                    }.into_any()
                } else {
                    view! {
                        <span class="column-title" data-testid="columnTitle" on:dblclick=start_title_edit>
                            {move || column.with(|c| c.title.clone())}
                        </span>
                    }.into_any()
                }}
                <span class="column-count" data-testid="columnCount">{count}</span>
                <button
                    class=move || if sort_by_hearts.get() { "sort-button selected" } else { "sort-button" }
                    data-testid="sortButton"
                    title="Sort by hearts"
                    on:click=move |_| set_sort_by_hearts.update(|v| *v = !*v)
                >
                    "⇅"
                </button>
            </div>
            <AddItemInput placeholder="Enter a Thought" test_id="addThoughtInput" on_submit=add_thought />
            <div class="column-items">
                <For
                    each=move || thoughts.get()
                    key=|thought| thought.id
                    children=move |thought: Thought| {
                        let id = thought.id;
                        let latest = Signal::derive(move || {
                            thoughts.with(|items| items.iter().find(|t| t.id == id).cloned().unwrap_or_else(|| thought.clone()))
                        });
                        view! {
                            <div
                                class=move || if dnd.dragging_id_read.get() == Some(id) { "draggable dragging" } else { "draggable" }
                                on:mousedown=make_on_mousedown(dnd, id)
                            >
                                <ThoughtItem thought=latest team_id=team_id.get_value() />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_update_skips_blank_and_unchanged() {
        assert_eq!(title_update("  Kudos ", "Happy"), Some("Kudos".to_string()));
        assert_eq!(title_update("Happy", "Happy"), None);
        assert_eq!(title_update(" Happy\n", "Happy"), None);
        assert_eq!(title_update("   ", "Happy"), None);
    }
}
