//! Team Endpoints

use serde::Serialize;

use super::{get_json, send_json, team_path, Method, Reply};
use crate::error::ApiError;
use crate::models::Team;

#[derive(Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateTeamRequest<'a> {
    name: &'a str,
    password: &'a str,
    email: &'a str,
}

/// Session issued by login or team creation
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSession {
    pub team_id: String,
    pub token: String,
}

/// Team id used by the backend when it sends no `Location`: lower-case, dashes for spaces
pub fn team_id_from_name(name: &str) -> String {
    name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Token comes back as the body (sometimes JSON-quoted), team id as `Location`
fn parse_session(reply: Reply, name: &str) -> Result<TeamSession, ApiError> {
    let token = reply.body.trim().trim_matches('"');
    if token.is_empty() {
        return Err(ApiError::Decode("empty token".into()));
    }
    let team_id = reply
        .location
        .as_deref()
        .and_then(|location| location.trim_end_matches('/').rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| team_id_from_name(name));
    Ok(TeamSession { team_id, token: token.to_string() })
}

pub async fn login(name: &str, password: &str) -> Result<TeamSession, ApiError> {
    let reply = send_json(Method::Post, "/team/login", &LoginRequest { name, password }).await?;
    parse_session(reply, name)
}

pub async fn create_team(name: &str, password: &str, email: &str) -> Result<TeamSession, ApiError> {
    let reply = send_json(Method::Post, "/team", &CreateTeamRequest { name, password, email }).await?;
    parse_session(reply, name)
}

pub async fn get_team(team_id: &str) -> Result<Team, ApiError> {
    get_json(&team_path(team_id, "")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str, location: Option<&str>) -> Reply {
        Reply { body: body.to_string(), location: location.map(str::to_string) }
    }

    #[test]
    fn token_may_be_quoted() {
        let session = parse_session(reply("\"abc.def\"\n", Some("crew")), "Crew").unwrap();
        assert_eq!(session.token, "abc.def");
        assert_eq!(session.team_id, "crew");
    }

    #[test]
    fn location_url_yields_last_segment() {
        let session = parse_session(reply("tok", Some("/api/team/the-crew")), "The Crew").unwrap();
        assert_eq!(session.team_id, "the-crew");
    }

    #[test]
    fn missing_location_falls_back_to_name() {
        let session = parse_session(reply("tok", None), "  The  Crew ").unwrap();
        assert_eq!(session.team_id, "the-crew");
    }

    #[test]
    fn empty_token_is_an_error() {
        assert!(matches!(parse_session(reply("  ", None), "x"), Err(ApiError::Decode(_))));
    }
}
