//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Action, Column, Team, Thought};

/// Data of the team currently shown, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Team behind the current team pages
    pub team: Option<Team>,
    /// Columns of the active retro
    pub columns: Vec<Column>,
    /// Thoughts of the active retro
    pub thoughts: Vec<Thought>,
    /// Action items, archived ones excluded
    pub action_items: Vec<Action>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch to another team, dropping the previous team's cards
pub fn store_set_team(store: &BoardStore, team: Team) {
    let changed = store.team().with_untracked(|current| current.as_ref().map(|t| t.id != team.id).unwrap_or(true));
    if changed {
        store.columns().write().clear();
        store.thoughts().write().clear();
        store.action_items().write().clear();
    }
    store.team().set(Some(team));
}

pub fn store_clear(store: &BoardStore) {
    store.team().set(None);
    store.columns().write().clear();
    store.thoughts().write().clear();
    store.action_items().write().clear();
}

/// Remove a thought from the store by ID
pub fn store_remove_thought(store: &BoardStore, thought_id: u64) {
    store.thoughts().write().retain(|t| t.id != thought_id);
}

/// Remove an action item from the store by ID
pub fn store_remove_action_item(store: &BoardStore, action_id: u64) {
    store.action_items().write().retain(|a| a.id != action_id);
}

/// Rename a column in the store after the backend accepted it
pub fn store_rename_column(store: &BoardStore, column_id: u64, title: &str) {
    if let Some(column) = store.columns().write().iter_mut().find(|c| c.id == column_id) {
        column.title = title.to_string();
    }
}
