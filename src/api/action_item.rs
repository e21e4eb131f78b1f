//! Action Item Endpoints

use serde::Serialize;

use super::{get_json, send_empty, send_json, team_path, Method};
use crate::error::ApiError;
use crate::models::Action;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateActionItemRequest {
    pub task: String,
    pub assignee: Option<String>,
    pub completed: bool,
    pub archived: bool,
}

impl CreateActionItemRequest {
    pub fn new(task: &str, assignee: Option<String>) -> Self {
        Self {
            task: task.to_string(),
            assignee,
            completed: false,
            archived: false,
        }
    }
}

#[derive(Serialize)]
struct CompletedBody {
    completed: bool,
}

#[derive(Serialize)]
struct TaskBody<'a> {
    task: &'a str,
}

#[derive(Serialize)]
struct AssigneeBody<'a> {
    assignee: &'a str,
}

#[derive(Serialize)]
struct ArchivedBody {
    archived: bool,
}

fn action_items_path(team_id: &str, archived: Option<bool>) -> String {
    match archived {
        Some(archived) => team_path(team_id, &format!("/action-item?archived={}", archived)),
        None => team_path(team_id, "/action-item"),
    }
}

fn action_item_path(team_id: &str, action_id: u64, rest: &str) -> String {
    team_path(team_id, &format!("/action-item/{}{}", action_id, rest))
}

/// `archived = None` lists everything
pub async fn list_action_items(team_id: &str, archived: Option<bool>) -> Result<Vec<Action>, ApiError> {
    get_json(&action_items_path(team_id, archived)).await
}

pub async fn create_action_item(team_id: &str, request: &CreateActionItemRequest) -> Result<(), ApiError> {
    send_json(Method::Post, &action_items_path(team_id, None), request).await.map(|_| ())
}

pub async fn update_completion_status(team_id: &str, action_id: u64, completed: bool) -> Result<(), ApiError> {
    let path = action_item_path(team_id, action_id, "/completed");
    send_json(Method::Put, &path, &CompletedBody { completed }).await.map(|_| ())
}

pub async fn update_task(team_id: &str, action_id: u64, task: &str) -> Result<(), ApiError> {
    let path = action_item_path(team_id, action_id, "/task");
    send_json(Method::Put, &path, &TaskBody { task }).await.map(|_| ())
}

pub async fn update_assignee(team_id: &str, action_id: u64, assignee: &str) -> Result<(), ApiError> {
    let path = action_item_path(team_id, action_id, "/assignee");
    send_json(Method::Put, &path, &AssigneeBody { assignee }).await.map(|_| ())
}

pub async fn update_archived_status(team_id: &str, action_id: u64, archived: bool) -> Result<(), ApiError> {
    let path = action_item_path(team_id, action_id, "/archived");
    send_json(Method::Put, &path, &ArchivedBody { archived }).await.map(|_| ())
}

pub async fn delete_action_item(team_id: &str, action_id: u64) -> Result<(), ApiError> {
    send_empty(Method::Delete, &action_item_path(team_id, action_id, "")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archived_filter_is_a_query_param() {
        assert_eq!(action_items_path("t", None), "/team/t/action-item");
        assert_eq!(action_items_path("t", Some(true)), "/team/t/action-item?archived=true");
        assert_eq!(action_items_path("t", Some(false)), "/team/t/action-item?archived=false");
    }

    #[test]
    fn item_paths() {
        assert_eq!(action_item_path("t", 5, "/assignee"), "/team/t/action-item/5/assignee");
    }

    #[test]
    fn new_action_items_start_open() {
        let json = serde_json::to_value(CreateActionItemRequest::new("Fix CI", Some("sam".into()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"task": "Fix CI", "assignee": "sam", "completed": false, "archived": false})
        );
    }
}
