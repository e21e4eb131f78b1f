//! Email Recovery Endpoints

use serde::Serialize;

use super::{send_json, Method};
use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecoverTeamNameRequest<'a> {
    recovery_email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResetRequest<'a> {
    team_name: &'a str,
    email: &'a str,
}

pub async fn send_team_name_recovery_email(recovery_email: &str) -> Result<(), ApiError> {
    let body = RecoverTeamNameRequest { recovery_email };
    send_json(Method::Post, "/email/recover-team-name", &body).await.map(|_| ())
}

pub async fn send_password_reset_email(team_name: &str, email: &str) -> Result<(), ApiError> {
    let body = PasswordResetRequest { team_name, email };
    send_json(Method::Post, "/email/password-reset-request", &body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_are_camel_case() {
        let json = serde_json::to_string(&RecoverTeamNameRequest { recovery_email: "a@b.c" }).unwrap();
        assert_eq!(json, r#"{"recoveryEmail":"a@b.c"}"#);

        let json = serde_json::to_string(&PasswordResetRequest { team_name: "Crew", email: "a@b.c" }).unwrap();
        assert_eq!(json, r#"{"teamName":"Crew","email":"a@b.c"}"#);
    }
}
