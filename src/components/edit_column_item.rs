//! Edit Column Item Component
//!
//! Inline textarea editor for a card's text.

use leptos::html;
use leptos::prelude::*;

use crate::format::{remaining_chars, MAX_ITEM_LENGTH};

/// Inline editor. Enter saves, Shift+Enter is a newline, Escape cancels.
#[component]
pub fn EditColumnItem(
    #[prop(into)] initial_value: String,
    #[prop(into)] on_confirm: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (value, set_value) = signal(initial_value);
    let textarea_ref = NodeRef::<html::Textarea>::new();

    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
            textarea.select();
        }
    });

    let confirm = move || {
        let text = value.get_untracked();
        if !text.trim().is_empty() {
            on_confirm.run(text);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" if !ev.shift_key() => {
            ev.prevent_default();
            confirm();
        }
        "Escape" => {
            ev.prevent_default();
            ev.stop_propagation();
            on_cancel.run(());
        }
        _ => {}
    };

    let remaining = move || remaining_chars(&value.get(), MAX_ITEM_LENGTH);

    view! {
        <div class="edit-column-item" data-testid="editColumnItem">
            <textarea
                class="edit-column-item-textarea"
                node_ref=textarea_ref
                maxlength=MAX_ITEM_LENGTH.to_string()
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="edit-column-item-footer">
                <span class=move || if remaining() < 20 { "character-counter warning" } else { "character-counter" }>
                    {remaining}
                </span>
                <div class="column-item-button-group">
                    <button class="cancel-button" on:click=move |_| on_cancel.run(())>"Discard"</button>
                    <button
                        class="confirm-button"
                        disabled=move || value.get().trim().is_empty()
                        on:click=move |_| confirm()
                    >
                        "Save!"
                    </button>
                </div>
            </div>
        </div>
    }
}
