//! Frontend Models
//!
//! Data structures matching backend resources.

use serde::{Deserialize, Serialize};

/// Team data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// A single retro-board entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: u64,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub topic: String,
    pub message: String,
    #[serde(default)]
    pub hearts: u32,
    #[serde(default)]
    pub discussed: bool,
    #[serde(default)]
    pub column_id: Option<u64>,
    #[serde(default)]
    pub board_id: Option<u64>,
}

/// Board column (happy / confused / sad by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: u64,
    pub topic: String,
    pub title: String,
    #[serde(default)]
    pub team_id: String,
}

impl Column {
    /// A thought belongs to this column by column id, or by topic for older thoughts
    pub fn contains(&self, thought: &Thought) -> bool {
        match thought.column_id {
            Some(column_id) => column_id == self.id,
            None => thought.topic == self.topic,
        }
    }
}

/// Follow-up task tracked separately from thoughts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: u64,
    pub task: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Archived retro board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u64,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub thoughts: Vec<Thought>,
}

/// Deployment settings served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub email_from_address: String,
    #[serde(default = "default_true")]
    pub email_is_enabled: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            email_from_address: String::new(),
            email_is_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thought_decodes_from_camel_case() {
        let json = r#"{"id":7,"teamId":"my-team","topic":"happy","message":"hi","hearts":3,"discussed":true,"columnId":2}"#;
        let thought: Thought = serde_json::from_str(json).unwrap();
        assert_eq!(thought.team_id, "my-team");
        assert_eq!(thought.hearts, 3);
        assert!(thought.discussed);
        assert_eq!(thought.column_id, Some(2));
        assert_eq!(thought.board_id, None);
    }

    #[test]
    fn action_tolerates_missing_optional_fields() {
        let action: Action = serde_json::from_str(r#"{"id":1,"task":"ship it"}"#).unwrap();
        assert_eq!(action.assignee, None);
        assert!(!action.completed);
        assert!(!action.archived);
        assert_eq!(action.date_created, None);
    }

    #[test]
    fn column_membership_prefers_column_id() {
        let column = Column { id: 2, topic: "sad".into(), title: "Sad".into(), team_id: String::new() };
        let mut thought: Thought = serde_json::from_str(r#"{"id":1,"topic":"happy","message":"m"}"#).unwrap();
        assert!(!column.contains(&thought));

        thought.topic = "sad".into();
        assert!(column.contains(&thought));

        thought.column_id = Some(3);
        assert!(!column.contains(&thought));
    }

    #[test]
    fn environment_config_defaults_email_on() {
        let config: EnvironmentConfig = serde_json::from_str(r#"{"email_from_address":"x@y.z"}"#).unwrap();
        assert!(config.email_is_enabled);
        assert_eq!(config.email_from_address, "x@y.z");
    }
}
