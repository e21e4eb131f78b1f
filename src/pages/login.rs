//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AuthForm, AuthTemplate, InputField, Link};
use crate::context::use_app_context;
use crate::routes::Route;
use crate::session;
use crate::validation::team_name_error;

/// Team name shown for `/login/{teamId}` before the user types one
fn team_name_hint(team_id: &str) -> String {
    team_id.split('-').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

#[component]
pub fn LoginPage(team_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(team_id.as_deref().map(team_name_hint).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);

    let on_submit = move |_: ()| {
        let team_name = name.get_untracked().trim().to_string();
        let pw = password.get_untracked();
        loading.set(true);
        errors.set(Vec::new());
        spawn_local(async move {
            match api::login(&team_name, &pw).await {
                Ok(login) => {
                    log::info!(target: "auth", "logged in to {}", login.team_id);
                    session::save_token(&login.token);
                    ctx.navigate(Route::Retro { team_id: login.team_id });
                }
                Err(err) => {
                    log::warn!(target: "auth", "login failed: {}", err);
                    errors.set(vec![err.user_message()]);
                }
            }
            loading.set(false);
        });
    };

    let disabled = Signal::derive(move || name.with(|n| n.trim().is_empty()) || password.with(String::is_empty));
    let email_enabled = move || ctx.environment.with(|env| env.email_is_enabled);

    view! {
        <AuthTemplate header="Sign in to your Team!" sub_header="Make the most of your retros.">
            <AuthForm
                submit_text="Sign in"
                on_submit=on_submit
                errors=errors
                disabled=disabled
                loading=loading
            >
                <InputField
                    label="Team Name"
                    value=name
                    error=Signal::derive(move || name.with(|n| team_name_error(n)))
                    test_id="teamNameInput"
                />
                <InputField
                    label="Password"
                    value=password
                    error=Signal::derive(|| None)
                    input_type="password"
                    test_id="passwordInput"
                />
            </AuthForm>
            <div class="auth-links">
                <Show when=email_enabled>
                    <Link route=Route::RecoverTeamName class="auth-link" test_id="recoverTeamNameLink">
                        "Forgot your team name?"
                    </Link>
                    <Link route=Route::PasswordResetRequest class="auth-link" test_id="passwordResetLink">
                        "Forgot your password?"
                    </Link>
                </Show>
                <Link route=Route::CreateTeam class="auth-link" test_id="createTeamLink">
                    "or create new team"
                </Link>
            </div>
        </AuthTemplate>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_turns_dashes_into_spaces() {
        assert_eq!(team_name_hint("the-crew"), "the crew");
        assert_eq!(team_name_hint("crew"), "crew");
        assert_eq!(team_name_hint("a--b-"), "a b");
    }
}
