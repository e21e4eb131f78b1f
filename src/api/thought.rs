//! Thought Endpoints

use serde::Serialize;

use super::{get_json, send_empty, send_json, team_path, Method};
use crate::error::ApiError;
use crate::models::Thought;

// ========================
// Request Bodies
// ========================

/// Body of `POST /team/{teamId}/thought`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThoughtRequest {
    pub id: i64,
    pub team_id: String,
    pub topic: String,
    pub message: String,
    pub hearts: u32,
    pub discussed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<u64>,
}

impl CreateThoughtRequest {
    /// New thoughts carry placeholder id -1 and no hearts
    pub fn new(team_id: &str, topic: &str, message: &str) -> Self {
        Self {
            id: -1,
            team_id: team_id.to_string(),
            topic: topic.to_string(),
            message: message.to_string(),
            hearts: 0,
            discussed: false,
            column_id: None,
        }
    }

    pub fn in_column(mut self, column_id: u64) -> Self {
        self.column_id = Some(column_id);
        self
    }
}

#[derive(Serialize)]
struct DiscussedBody {
    discussed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveBody {
    column_id: u64,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

fn thought_path(team_id: &str, thought_id: u64, rest: &str) -> String {
    team_path(team_id, &format!("/thought/{}{}", thought_id, rest))
}

// ========================
// Calls
// ========================

pub async fn list_thoughts(team_id: &str) -> Result<Vec<Thought>, ApiError> {
    get_json(&team_path(team_id, "/thoughts")).await
}

pub async fn create_thought(team_id: &str, request: &CreateThoughtRequest) -> Result<(), ApiError> {
    send_json(Method::Post, &team_path(team_id, "/thought"), request).await.map(|_| ())
}

pub async fn heart_thought(team_id: &str, thought_id: u64) -> Result<(), ApiError> {
    send_empty(Method::Put, &thought_path(team_id, thought_id, "/heart")).await
}

pub async fn set_thought_discussed(team_id: &str, thought_id: u64, discussed: bool) -> Result<(), ApiError> {
    let path = thought_path(team_id, thought_id, "/discuss");
    send_json(Method::Put, &path, &DiscussedBody { discussed }).await.map(|_| ())
}

pub async fn move_thought(team_id: &str, thought_id: u64, column_id: u64) -> Result<(), ApiError> {
    let path = thought_path(team_id, thought_id, "/column-id");
    send_json(Method::Put, &path, &MoveBody { column_id }).await.map(|_| ())
}

pub async fn update_thought_message(team_id: &str, thought_id: u64, message: &str) -> Result<(), ApiError> {
    let path = thought_path(team_id, thought_id, "/message");
    send_json(Method::Put, &path, &MessageBody { message }).await.map(|_| ())
}

pub async fn delete_thought(team_id: &str, thought_id: u64) -> Result<(), ApiError> {
    send_empty(Method::Delete, &thought_path(team_id, thought_id, "")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_matches_backend_shape() {
        let request = CreateThoughtRequest::new("my-team", "happy", "Great sprint");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": -1,
                "teamId": "my-team",
                "topic": "happy",
                "message": "Great sprint",
                "hearts": 0,
                "discussed": false
            })
        );

        let json = serde_json::to_value(request.in_column(4)).unwrap();
        assert_eq!(json["columnId"], 4);
    }

    #[test]
    fn thought_paths() {
        assert_eq!(thought_path("t", 9, "/heart"), "/team/t/thought/9/heart");
        assert_eq!(thought_path("t", 9, ""), "/team/t/thought/9");
    }

    #[test]
    fn move_body_uses_column_id_key() {
        assert_eq!(serde_json::to_string(&MoveBody { column_id: 3 }).unwrap(), r#"{"columnId":3}"#);
    }
}
