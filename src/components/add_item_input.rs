//! Add Item Input Component
//!
//! Text input at the top of a column for creating cards.

use leptos::prelude::*;

use crate::format::{remaining_chars, MAX_ITEM_LENGTH};

/// Submit on Enter, then clear
#[component]
pub fn AddItemInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(optional, into)] test_id: String,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_submit.run(text);
        set_new_text.set(String::new());
    };

    let remaining = move || remaining_chars(&new_text.get(), MAX_ITEM_LENGTH);

    view! {
        <form class="add-item-form" on:submit=submit>
            <input
                type="text"
                class="add-item-input"
                data-testid=test_id
                placeholder=placeholder
                maxlength=MAX_ITEM_LENGTH.to_string()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <Show when=move || !new_text.get().is_empty()>
                <span class=move || if remaining() < 20 { "character-counter warning" } else { "character-counter" }>
                    {remaining}
                </span>
            </Show>
        </form>
    }
}
