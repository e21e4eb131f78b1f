//! Retro Subheader Component
//!
//! Bar under the header of the retro page with the end-retro action.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::error::log_error;

#[component]
pub fn RetroSubheader(#[prop(into)] team_id: String) -> impl IntoView {
    let (dialog_open, set_dialog_open) = signal(false);
    let team_id = StoredValue::new(team_id);

    view! {
        <div class="sub-header retro-subheader" data-testid="retroSubheader">
            <div class="sub-header-buttons">
                <button
                    class="archive-retro-button"
                    data-testid="archiveRetroButton"
                    on:click=move |_| set_dialog_open.set(true)
                >
                    "Archive Retro"
                </button>
            </div>
            <Show when=move || dialog_open.get()>
                <ArchiveRetroDialog team_id=team_id.get_value() on_close=move |_: ()| set_dialog_open.set(false) />
            </Show>
        </div>
    }
}

/// Confirmation dialog for ending the retro. Closes once the backend accepted it.
#[component]
pub fn ArchiveRetroDialog(#[prop(into)] team_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let team_id = StoredValue::new(team_id);
    let (submitting, set_submitting) = signal(false);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let confirm = move |_| {
        set_submitting.set(true);
        let team_id = team_id.get_value();
        spawn_local(async move {
            let ended = log_error("end retro", api::end_retro(&team_id).await).is_some();
            set_submitting.set(false);
            if ended {
                on_close.run(());
                ctx.reload();
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal dialog archive-retro-dialog" data-testid="archiveRetroDialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-title">"Do you want to end the retro for everybody?"</div>
                <div class="dialog-subtitle">"This will permanently archive all thoughts!"</div>
                <div class="dialog-buttons">
                    <button class="cancel-button" data-testid="dialogCancelButton" on:click=move |_| on_close.run(())>
                        "Nope"
                    </button>
                    <button
                        class="confirm-button"
                        data-testid="dialogConfirmButton"
                        disabled=move || submitting.get()
                        on:click=confirm
                    >
                        "Yes!"
                    </button>
                </div>
            </div>
        </div>
    }
}
