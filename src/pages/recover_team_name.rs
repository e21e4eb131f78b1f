//! Recover Team Name Page
//!
//! Emails the names of every team registered to an address.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AuthForm, AuthTemplate, InputField};
use crate::context::use_app_context;

#[component]
pub fn RecoverTeamNamePage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let (sent, set_sent) = signal(false);

    let on_submit = move |_: ()| {
        let address = email.get_untracked().trim().to_string();
        loading.set(true);
        errors.set(Vec::new());
        spawn_local(async move {
            match api::send_team_name_recovery_email(&address).await {
                Ok(()) => set_sent.set(true),
                Err(err) => {
                    log::warn!(target: "email", "team name recovery failed: {}", err);
                    errors.set(vec![err.user_message()]);
                }
            }
            loading.set(false);
        });
    };

    let disabled = Signal::derive(move || email.with(|e| e.trim().is_empty()));
    let from_address = move || ctx.environment.with(|env| env.email_from_address.clone());

    view! {
        <Show
            when=move || sent.get()
            fallback=move || view! {
                <AuthTemplate
                    header="Recover Team Name"
                    sub_header="Enter your email below, and we’ll send you the team name (or names!) registered to your email address."
                >
                    <AuthForm
                        submit_text="Send me my team name"
                        on_submit=on_submit
                        errors=errors
                        disabled=disabled
                        loading=loading
                    >
                        <InputField
                            label="Email"
                            value=email
                            error=Signal::derive(|| None)
                            input_type="email"
                            test_id="emailInput"
                        />
                    </AuthForm>
                </AuthTemplate>
            }
        >
            <AuthTemplate header="Check your Mail!">
                <p class="check-your-mail" data-testid="checkYourMailConfirmation">
                    {move || format!(
                        "If any RetroQuest teams are registered to {}, we’ve sent a list of all team names that are connected to the email address.",
                        email.get(),
                    )}
                </p>
                <p class="check-your-mail">
                    {move || format!(
                        "If an email doesn’t show up soon, check your spam folder. We sent it from {}.",
                        from_address(),
                    )}
                </p>
            </AuthTemplate>
        </Show>
    }
}
