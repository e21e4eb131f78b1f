//! Delete Column Item Component
//!
//! Confirmation overlay shown in place of a card before deleting it.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// Inline delete confirmation
///
/// Escape anywhere on the page cancels. The Cancel button takes focus on mount.
#[component]
pub fn DeleteColumnItem(
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel_ref = NodeRef::<html::Button>::new();

    Effect::new(move |_| {
        if let Some(button) = cancel_ref.get() {
            let _ = button.focus();
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div class="delete-column-item" data-testid="deleteColumnItem">
            <div class="delete-column-item-message">{message}</div>
            <div class="column-item-button-group">
                <button
                    class="cancel-button"
                    node_ref=cancel_ref
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_cancel.run(());
                    }
                >
                    "Cancel"
                </button>
                <button
                    class="confirm-button"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Yes, Delete"
                </button>
            </div>
        </div>
    }
}
