//! Password Reset Request Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AuthForm, AuthTemplate, InputField};
use crate::context::use_app_context;
use crate::validation::{email_error, team_name_error};

#[component]
pub fn PasswordResetRequestPage() -> impl IntoView {
    let ctx = use_app_context();
    let team_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let (sent, set_sent) = signal(false);

    let name_error = Signal::derive(move || team_name.with(|n| team_name_error(n)));
    let email_error = Signal::derive(move || email.with(|e| email_error(e)));
    let disabled = Signal::derive(move || name_error.get().is_some() || email_error.get().is_some());

    let on_submit = move |_: ()| {
        let name = team_name.get_untracked().trim().to_string();
        let address = email.get_untracked().trim().to_string();
        loading.set(true);
        errors.set(Vec::new());
        spawn_local(async move {
            match api::send_password_reset_email(&name, &address).await {
                Ok(()) => set_sent.set(true),
                Err(err) => {
                    log::warn!(target: "email", "password reset request failed: {}", err);
                    errors.set(vec![err.user_message()]);
                }
            }
            loading.set(false);
        });
    };

    let from_address = move || ctx.environment.with(|env| env.email_from_address.clone());

    view! {
        <Show
            when=move || sent.get()
            fallback=move || view! {
                <AuthTemplate
                    header="Reset your Password"
                    sub_header="Enter the name of your team and its email address, and we’ll send you a link to reset your password."
                >
                    <AuthForm
                        submit_text="Send reset link"
                        on_submit=on_submit
                        errors=errors
                        disabled=disabled
                        loading=loading
                    >
                        <InputField label="Team Name" value=team_name error=name_error test_id="teamNameInput" />
                        <InputField label="Email" value=email error=email_error input_type="email" test_id="emailInput" />
                    </AuthForm>
                </AuthTemplate>
            }
        >
            <AuthTemplate header="Check your Mail!">
                <p class="check-your-mail" data-testid="checkYourMailConfirmation">
                    {move || format!("We’ve sent an email to {} with password reset instructions.", email.get())}
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
