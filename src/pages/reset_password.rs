//! Reset Password Pages
//!
//! The page behind the emailed reset link and the page shown when that link
//! is no longer valid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AuthForm, AuthTemplate, InputField, Link};
use crate::context::use_app_context;
use crate::routes::Route;
use crate::validation::{password_confirmation_error, password_error};

#[component]
pub fn ResetPasswordPage(token: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let Some(token) = token else {
        log::info!(target: "auth", "reset link without token");
        Effect::new(move |_| ctx.redirect(Route::ExpiredResetLink));
        return ().into_any();
    };
    let token = StoredValue::new(token);

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let (done, set_done) = signal(false);

    spawn_local(async move {
        match api::check_reset_token(&token.get_value()).await {
            Ok(true) => {}
            Ok(false) => ctx.redirect(Route::ExpiredResetLink),
            Err(err) => log::warn!(target: "auth", "could not check reset token: {}", err),
        }
    });

    let password_error = Signal::derive(move || password.with(|p| password_error(p)));
    let confirmation_error =
        Signal::derive(move || password.with(|p| confirmation.with(|c| password_confirmation_error(p, c))));
    let disabled = Signal::derive(move || password_error.get().is_some() || confirmation_error.get().is_some());

    let on_submit = move |_: ()| {
        let pw = password.get_untracked();
        loading.set(true);
        errors.set(Vec::new());
        spawn_local(async move {
            match api::reset_password(&token.get_value(), &pw).await {
                Ok(()) => {
                    log::info!(target: "auth", "password reset");
                    set_done.set(true);
                }
                Err(err) => {
                    log::warn!(target: "auth", "password reset failed: {}", err);
                    errors.set(vec![err.user_message()]);
                }
            }
            loading.set(false);
        });
    };

    view! {
        <Show
            when=move || done.get()
            fallback=move || view! {
                <AuthTemplate header="Reset Your Password" sub_header="Choose a new password for your team.">
                    <AuthForm
                        submit_text="Reset Password"
                        on_submit=on_submit
                        errors=errors
                        disabled=disabled
                        loading=loading
                    >
                        <InputField
                            label="New Password"
                            value=password
                            error=password_error
                            input_type="password"
                            test_id="passwordInput"
                        />
                        <InputField
                            label="Confirm Password"
                            value=confirmation
                            error=confirmation_error
                            input_type="password"
                            test_id="confirmPasswordInput"
                        />
                    </AuthForm>
                </AuthTemplate>
            }
        >
            <AuthTemplate header="All set!" sub_header="Your new password is ready to use.">
                <Link route=Route::Login { team_id: None } class="button" test_id="loginLink">
                    "Return to Login"
                </Link>
            </AuthTemplate>
        </Show>
    }
    .into_any()
}

#[component]
pub fn ExpiredResetLinkPage() -> impl IntoView {
    view! {
        <AuthTemplate
            header="Expired Link"
            sub_header="Your reset link has expired. Reset links are only valid for a limited time."
        >
            <Link route=Route::PasswordResetRequest class="button" test_id="requestNewLink">
                "Send me a new link"
            </Link>
        </AuthTemplate>
    }
}
