//! RetroQuest Frontend App
//!
//! Root component: provides the shared context and store, keeps the URL and
//! session in line with the current route, and renders the matching page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::EnvironmentConfig;
use crate::pages::{
    ArchivedActionItemsPage, ArchivedBoardPage, ArchivedBoardsPage, CreateTeamPage, ExpiredResetLinkPage, LoginPage,
    NotFoundPage, PasswordResetRequestPage, RadiatorPage, RecoverTeamNamePage, ResetPasswordPage, RetroPage,
};
use crate::routes::{self, Route};
use crate::session;
use crate::store::{store_clear, BoardState, BoardStore};

/// Where to send a visitor who may not see `route`
fn guard_redirect(route: &Route, has_token: bool) -> Option<Route> {
    match route.team_id() {
        Some(team_id) if !has_token => Some(Route::Login { team_id: Some(team_id.to_string()) }),
        _ => None,
    }
}

/// Email pages do not exist while the backend cannot send email
fn visible_route(route: Route, email_enabled: bool) -> Route {
    if route.needs_email() && !email_enabled {
        Route::NotFound { path: route.path() }
    } else {
        route
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let location = routes::current_location();
    let initial = Route::parse(&location);
    if location != initial.path() {
        log::debug!(target: "router", "rewrite {} to {}", location, initial.path());
        routes::replace(&initial);
    }

    let route = signal(initial);
    let reload_trigger = signal(0u32);
    let theme = signal(session::load_theme());
    let (environment, set_environment) = signal(EnvironmentConfig::default());

    let ctx = AppContext::new(route, reload_trigger, theme, environment, config.poll_interval_ms);
    provide_context(ctx);

    let store: BoardStore = Store::new(BoardState::default());
    provide_context(store);

    spawn_local(async move {
        match api::get_environment_config().await {
            Ok(env) => {
                log::info!(target: "app", "email enabled: {}", env.email_is_enabled);
                set_environment.set(env);
            }
            Err(err) => log::warn!(target: "app", "using default environment config: {}", err),
        }
    });

    routes::bind_popstate(move |route| ctx.sync_route(route));

    Effect::new(move |_| session::apply_theme(ctx.theme.get()));

    // Team pages need a session; other pages drop the last team's data
    Effect::new(move |_| {
        let route = ctx.route.get();
        if let Some(target) = guard_redirect(&route, session::load_token().is_some()) {
            log::info!(target: "router", "no session for {}, redirecting to login", route.path());
            ctx.redirect(target);
        } else if route.team_id().is_none() {
            store_clear(&store);
        }
    });

    let page = Memo::new(move |_| {
        let email_enabled = ctx.environment.with(|env| env.email_is_enabled);
        visible_route(ctx.route.get(), email_enabled)
    });

    view! {
        <div class="app">
            {move || {
                let route = page.get();
                if guard_redirect(&route, session::load_token().is_some()).is_some() {
                    return ().into_any();
                }
                match route {
                    Route::Login { team_id } => view! { <LoginPage team_id=team_id /> }.into_any(),
                    Route::CreateTeam => view! { <CreateTeamPage /> }.into_any(),
                    Route::Retro { team_id } => view! { <RetroPage team_id=team_id /> }.into_any(),
                    Route::ArchivedBoards { team_id } => view! { <ArchivedBoardsPage team_id=team_id /> }.into_any(),
                    Route::ArchivedBoard { team_id, board_id } => {
                        view! { <ArchivedBoardPage team_id=team_id board_id=board_id /> }.into_any()
                    }
                    Route::ArchivedActionItems { team_id } => {
                        view! { <ArchivedActionItemsPage team_id=team_id /> }.into_any()
                    }
                    Route::Radiator { team_id } => view! { <RadiatorPage team_id=team_id /> }.into_any(),
                    Route::RecoverTeamName => view! { <RecoverTeamNamePage /> }.into_any(),
                    Route::PasswordResetRequest => view! { <PasswordResetRequestPage /> }.into_any(),
                    Route::ResetPassword { token } => view! { <ResetPasswordPage token=token /> }.into_any(),
                    Route::ExpiredResetLink => view! { <ExpiredResetLinkPage /> }.into_any(),
                    Route::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_pages_without_session_go_to_login() {
        let route = Route::Radiator { team_id: "crew".to_string() };
        assert_eq!(guard_redirect(&route, false), Some(Route::Login { team_id: Some("crew".to_string()) }));
        assert_eq!(guard_redirect(&route, true), None);
        assert_eq!(guard_redirect(&Route::CreateTeam, false), None);
    }

    #[test]
    fn email_pages_hidden_when_email_disabled() {
        assert_eq!(
            visible_route(Route::RecoverTeamName, false),
            Route::NotFound { path: "/recover-team-name".to_string() }
        );
        assert_eq!(visible_route(Route::RecoverTeamName, true), Route::RecoverTeamName);
        assert_eq!(visible_route(Route::CreateTeam, false), Route::CreateTeam);
        assert!(matches!(visible_route(Route::ExpiredResetLink, false), Route::NotFound { .. }));
    }
}
