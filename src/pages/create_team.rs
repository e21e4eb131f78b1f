//! Create Team Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AuthForm, AuthTemplate, InputField, Link};
use crate::context::use_app_context;
use crate::routes::Route;
use crate::session;
use crate::validation::{email_error, password_error, team_name_error};

#[component]
pub fn CreateTeamPage() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);

    let name_error = Signal::derive(move || name.with(|n| team_name_error(n)));
    let password_error = Signal::derive(move || password.with(|p| password_error(p)));
    let email_error = Signal::derive(move || email.with(|e| email_error(e)));
    let disabled = Signal::derive(move || {
        name_error.get().is_some() || password_error.get().is_some() || email_error.get().is_some()
    });

    let on_submit = move |_: ()| {
        let team_name = name.get_untracked().trim().to_string();
        let pw = password.get_untracked();
        let address = email.get_untracked().trim().to_string();
        loading.set(true);
        errors.set(Vec::new());
        spawn_local(async move {
            match api::create_team(&team_name, &pw, &address).await {
                Ok(created) => {
                    log::info!(target: "auth", "created team {}", created.team_id);
                    session::save_token(&created.token);
                    ctx.navigate(Route::Retro { team_id: created.team_id });
                }
                Err(err) => {
                    log::warn!(target: "auth", "create team failed: {}", err);
                    errors.set(vec![err.user_message()]);
                }
            }
            loading.set(false);
        });
    };

    view! {
        <AuthTemplate header="Create a new Team!" sub_header="Get started with RetroQuest">
            <AuthForm
                submit_text="Create Team"
                on_submit=on_submit
                errors=errors
                disabled=disabled
                loading=loading
            >
                <InputField label="Team Name" value=name error=name_error test_id="teamNameInput" />
                <InputField
                    label="Password"
                    value=password
                    error=password_error
                    input_type="password"
                    test_id="passwordInput"
                />
                <InputField label="Email" value=email error=email_error input_type="email" test_id="emailInput" />
            </AuthForm>
            <div class="auth-links">
                <Link route=Route::Login { team_id: None } class="auth-link" test_id="loginLink">
                    "or sign in to your existing team"
                </Link>
            </div>
        </AuthTemplate>
    }
}
