//! API Errors

use serde::Deserialize;
use thiserror::Error;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Serialize(String),
}

/// Body shape of backend error responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, keeping the backend's `message` field if the body has one
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown under a form when the call behind it fails
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            ApiError::Status { status: 401 | 403, .. } => {
                "Incorrect team name or password. Please try again.".to_string()
            }
            ApiError::Status { status: 404, .. } => "Team could not be found.".to_string(),
            ApiError::Status { status: 409, .. } => {
                "This team name is already taken. Please try another one.".to_string()
            }
            ApiError::Network(_) => "Unable to reach RetroQuest. Check your connection.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Log a failed mutation and carry on; the local view stays as it was
pub fn log_error<T>(context: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!(target: "api", "{}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins() {
        let err = ApiError::from_status(400, r#"{"message":"Password must be 8 characters"}"#);
        assert_eq!(err.user_message(), "Password must be 8 characters");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn auth_failures_get_login_message() {
        let err = ApiError::from_status(403, "");
        assert_eq!(err.user_message(), "Incorrect team name or password. Please try again.");
    }

    #[test]
    fn blank_message_is_ignored() {
        let err = ApiError::from_status(409, r#"{"message":"  "}"#);
        assert_eq!(err, ApiError::Status { status: 409, message: None });
        assert!(err.user_message().contains("already taken"));
    }

    #[test]
    fn log_error_passes_values_through() {
        assert_eq!(log_error("noop", Ok::<_, ApiError>(3)), Some(3));
        assert_eq!(log_error::<u8>("fails", Err(ApiError::Decode("bad".into()))), None);
    }
}
