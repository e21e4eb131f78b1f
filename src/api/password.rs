//! Password Reset Endpoints
//!
//! Used by the page behind the emailed reset link.

use serde::Serialize;

use super::{send_json, Method};
use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetTokenRequest<'a> {
    reset_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    reset_token: &'a str,
    password: &'a str,
}

/// The backend answers `true`/`false` as plain text
fn parse_validity(body: &str) -> Result<bool, ApiError> {
    match body.trim().trim_matches('"') {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ApiError::Decode(format!("unexpected token validity {:?}", other))),
    }
}

pub async fn check_reset_token(token: &str) -> Result<bool, ApiError> {
    let reply = send_json(Method::Post, "/password/reset/is-valid", &ResetTokenRequest { reset_token: token }).await?;
    parse_validity(&reply.body)
}

pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    let body = ResetPasswordRequest { reset_token: token, password };
    send_json(Method::Post, "/password/reset", &body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_is_read_from_text() {
        assert_eq!(parse_validity("true").ok(), Some(true));
        assert_eq!(parse_validity(" false\n").ok(), Some(false));
        assert!(parse_validity("").is_err());
    }

    #[test]
    fn reset_body_names_the_token() {
        let json = serde_json::to_string(&ResetPasswordRequest { reset_token: "t", password: "Password1" }).unwrap();
        assert_eq!(json, r#"{"resetToken":"t","password":"Password1"}"#);
    }
}
