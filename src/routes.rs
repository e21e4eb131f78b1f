//! Client-side Routing
//!
//! Maps browser paths to pages and drives the History API.

use percent_encoding::percent_decode_str;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::{encode_query_value, encode_segment};

/// Every page the app can show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login { team_id: Option<String> },
    CreateTeam,
    Retro { team_id: String },
    ArchivedBoards { team_id: String },
    ArchivedBoard { team_id: String, board_id: u64 },
    ArchivedActionItems { team_id: String },
    Radiator { team_id: String },
    RecoverTeamName,
    PasswordResetRequest,
    /// Target of the emailed reset link, `?token=` carried along
    ResetPassword { token: Option<String> },
    ExpiredResetLink,
    NotFound { path: String },
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// First non-empty value of `name` in a `a=1&b=2` query string
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned())
}

impl Route {
    /// Resolve a location path. `/` and `/team/{id}/archives` resolve to
    /// their redirect targets; compare with [`Route::path`] to rewrite the URL.
    pub fn parse(path: &str) -> Route {
        let without_fragment = path.split('#').next().unwrap_or("");
        let (path_part, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
        let segments: Vec<&str> = path_part
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["login"] => Route::Login { team_id: None },
            ["login", team_id] => Route::Login { team_id: Some(decode(team_id)) },
            ["create"] => Route::CreateTeam,
            ["recover-team-name"] => Route::RecoverTeamName,
            ["request-password-reset"] => Route::PasswordResetRequest,
            ["password", "reset"] => Route::ResetPassword { token: query_param(query, "token") },
            ["password", "reset", "expired"] => Route::ExpiredResetLink,
            ["team", team_id] => Route::Retro { team_id: decode(team_id) },
            ["team", team_id, "radiator"] => Route::Radiator { team_id: decode(team_id) },
            ["team", team_id, "archives"] | ["team", team_id, "archives", "thoughts"] => {
                Route::ArchivedBoards { team_id: decode(team_id) }
            }
            ["team", team_id, "archives", "thoughts", board_id] => match board_id.parse() {
                Ok(board_id) => Route::ArchivedBoard { team_id: decode(team_id), board_id },
                Err(_) => Route::NotFound { path: path.to_string() },
            },
            ["team", team_id, "archives", "action-items"] => {
                Route::ArchivedActionItems { team_id: decode(team_id) }
            }
            _ => Route::NotFound { path: path.to_string() },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login { team_id: None } => "/login".to_string(),
            Route::Login { team_id: Some(id) } => format!("/login/{}", encode_segment(id)),
            Route::CreateTeam => "/create".to_string(),
            Route::RecoverTeamName => "/recover-team-name".to_string(),
            Route::PasswordResetRequest => "/request-password-reset".to_string(),
            Route::ResetPassword { token: None } => "/password/reset".to_string(),
            Route::ResetPassword { token: Some(token) } => format!("/password/reset?token={}", encode_query_value(token)),
            Route::ExpiredResetLink => "/password/reset/expired".to_string(),
            Route::Retro { team_id } => format!("/team/{}", encode_segment(team_id)),
            Route::Radiator { team_id } => format!("/team/{}/radiator", encode_segment(team_id)),
            Route::ArchivedBoards { team_id } => {
                format!("/team/{}/archives/thoughts", encode_segment(team_id))
            }
            Route::ArchivedBoard { team_id, board_id } => {
                format!("/team/{}/archives/thoughts/{}", encode_segment(team_id), board_id)
            }
            Route::ArchivedActionItems { team_id } => {
                format!("/team/{}/archives/action-items", encode_segment(team_id))
            }
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Team the page belongs to, if it sits behind login
    pub fn team_id(&self) -> Option<&str> {
        match self {
            Route::Retro { team_id }
            | Route::Radiator { team_id }
            | Route::ArchivedBoards { team_id }
            | Route::ArchivedBoard { team_id, .. }
            | Route::ArchivedActionItems { team_id } => Some(team_id),
            _ => None,
        }
    }

    /// Pages that only exist when the backend can send email
    pub fn needs_email(&self) -> bool {
        matches!(
            self,
            Route::RecoverTeamName
                | Route::PasswordResetRequest
                | Route::ResetPassword { .. }
                | Route::ExpiredResetLink
        )
    }
}

// ========================
// History API
// ========================

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

/// Path plus query string of the current browser location
pub fn current_location() -> String {
    let Some(location) = web_sys::window().map(|win| win.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// Route for the current browser location
pub fn current_route() -> Route {
    Route::parse(&current_location())
}

pub fn push(route: &Route) {
    if let Some(history) = history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
    }
}

pub fn replace(route: &Route) {
    if let Some(history) = history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&route.path()));
    }
}

/// Call `on_change` with the new route whenever the user goes back/forward
pub fn bind_popstate<F>(on_change: F)
where
    F: Fn(Route) + 'static,
{
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(current_route());
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str) -> String {
        id.to_string()
    }

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(Route::parse("/"), Route::Login { team_id: None });
        assert_eq!(Route::parse("/").path(), "/login");
    }

    #[test]
    fn archives_redirects_to_thoughts() {
        let route = Route::parse("/team/crew/archives");
        assert_eq!(route, Route::ArchivedBoards { team_id: team("crew") });
        assert_eq!(route.path(), "/team/crew/archives/thoughts");
    }

    #[test]
    fn every_route_round_trips() {
        let routes = vec![
            Route::Login { team_id: None },
            Route::Login { team_id: Some(team("crew")) },
            Route::CreateTeam,
            Route::RecoverTeamName,
            Route::PasswordResetRequest,
            Route::Retro { team_id: team("crew") },
            Route::Radiator { team_id: team("crew") },
            Route::ArchivedBoards { team_id: team("crew") },
            Route::ArchivedBoard { team_id: team("crew"), board_id: 12 },
            Route::ArchivedActionItems { team_id: team("crew") },
            Route::ResetPassword { token: None },
            Route::ResetPassword { token: Some("abc-123".to_string()) },
            Route::ResetPassword { token: Some("a+b&c=d".to_string()) },
            Route::ExpiredResetLink,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn team_ids_are_decoded() {
        let route = Route::parse("/team/the%20crew/radiator");
        assert_eq!(route, Route::Radiator { team_id: team("the crew") });
        assert_eq!(route.path(), "/team/the%20crew/radiator");
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Route::parse("/team/crew/?x=1"), Route::Retro { team_id: team("crew") });
    }

    #[test]
    fn reset_link_carries_token_from_query() {
        assert_eq!(
            Route::parse("/password/reset?token=a%2Bb&utm=x"),
            Route::ResetPassword { token: Some("a+b".to_string()) }
        );
        assert_eq!(Route::parse("/password/reset?token="), Route::ResetPassword { token: None });
        assert_eq!(Route::parse("/password/reset/expired"), Route::ExpiredResetLink);
        assert!(Route::ResetPassword { token: None }.needs_email());
        assert!(Route::ExpiredResetLink.needs_email());
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound { path: "/nope".to_string() });
        assert!(matches!(Route::parse("/team/crew/archives/thoughts/abc"), Route::NotFound { .. }));
    }

    #[test]
    fn team_pages_expose_team_id() {
        assert_eq!(Route::parse("/team/crew/radiator").team_id(), Some("crew"));
        assert_eq!(Route::parse("/login/crew").team_id(), None);
        assert!(Route::RecoverTeamName.needs_email());
    }
}
