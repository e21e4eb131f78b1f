//! Item View State
//!
//! DOM-free state machines behind thought and action item cards.
//! Each card is in one of three views and every confirmed user action
//! yields at most one mutation, which the component sends to the backend.
//! Local data is never patched optimistically: the board reload reconciles it.

use crate::api;
use crate::error::ApiError;
use crate::models::{Action, Thought};

/// Which sub-view a card is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemViewState {
    #[default]
    Default,
    Editing,
    ConfirmingDelete,
}

// ========================
// Thoughts
// ========================

/// REST call requested by a thought card
#[derive(Clone, Debug, PartialEq)]
pub enum ThoughtMutation {
    Heart { id: u64 },
    SetDiscussed { id: u64, discussed: bool },
    UpdateMessage { id: u64, message: String },
    Move { id: u64, column_id: u64 },
    Delete { id: u64 },
}

impl ThoughtMutation {
    pub async fn send(self, team_id: &str) -> Result<(), ApiError> {
        log::debug!(target: "thought", "{:?}", self);
        match self {
            ThoughtMutation::Heart { id } => api::heart_thought(team_id, id).await,
            ThoughtMutation::SetDiscussed { id, discussed } => {
                api::set_thought_discussed(team_id, id, discussed).await
            }
            ThoughtMutation::UpdateMessage { id, message } => {
                api::update_thought_message(team_id, id, &message).await
            }
            ThoughtMutation::Move { id, column_id } => api::move_thought(team_id, id, column_id).await,
            ThoughtMutation::Delete { id } => api::delete_thought(team_id, id).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThoughtItemState {
    thought: Thought,
    readonly: bool,
    view: ItemViewState,
    draft: String,
}

impl ThoughtItemState {
    pub fn new(thought: Thought, readonly: bool) -> Self {
        let draft = thought.message.clone();
        Self { thought, readonly, view: ItemViewState::Default, draft }
    }

    pub fn thought(&self) -> &Thought {
        &self.thought
    }

    pub fn view(&self) -> ItemViewState {
        self.view
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn readonly(&self) -> bool {
        self.readonly
    }

    /// Take fresh data from a reload; an open editor keeps its draft
    pub fn sync(&mut self, thought: Thought) {
        if self.view != ItemViewState::Editing {
            self.draft = thought.message.clone();
        }
        self.thought = thought;
    }

    pub fn start_edit(&mut self) -> bool {
        if self.readonly || self.view != ItemViewState::Default {
            return false;
        }
        self.draft = self.thought.message.clone();
        self.view = ItemViewState::Editing;
        true
    }

    pub fn edit_draft(&mut self, text: &str) {
        if self.view == ItemViewState::Editing {
            self.draft = text.to_string();
        }
    }

    /// Escape key or Cancel button, from either sub-view
    pub fn cancel(&mut self) {
        self.draft = self.thought.message.clone();
        self.view = ItemViewState::Default;
    }

    pub fn confirm_edit(&mut self, text: &str) -> Option<ThoughtMutation> {
        if self.view != ItemViewState::Editing {
            return None;
        }
        self.view = ItemViewState::Default;
        let message = text.trim();
        if message.is_empty() || message == self.thought.message {
            self.draft = self.thought.message.clone();
            return None;
        }
        self.draft = message.to_string();
        Some(ThoughtMutation::UpdateMessage { id: self.thought.id, message: message.to_string() })
    }

    pub fn start_delete(&mut self) -> bool {
        if self.readonly || self.view != ItemViewState::Default {
            return false;
        }
        self.view = ItemViewState::ConfirmingDelete;
        true
    }

    pub fn confirm_delete(&mut self) -> Option<ThoughtMutation> {
        if self.view != ItemViewState::ConfirmingDelete {
            return None;
        }
        self.view = ItemViewState::Default;
        Some(ThoughtMutation::Delete { id: self.thought.id })
    }

    pub fn heart(&self) -> Option<ThoughtMutation> {
        self.is_idle().then(|| ThoughtMutation::Heart { id: self.thought.id })
    }

    pub fn toggle_discussed(&self) -> Option<ThoughtMutation> {
        self.is_idle().then(|| ThoughtMutation::SetDiscussed {
            id: self.thought.id,
            discussed: !self.thought.discussed,
        })
    }

    pub fn move_to(&self, column_id: u64) -> Option<ThoughtMutation> {
        if self.readonly || self.thought.column_id == Some(column_id) {
            return None;
        }
        Some(ThoughtMutation::Move { id: self.thought.id, column_id })
    }

    fn is_idle(&self) -> bool {
        !self.readonly && self.view == ItemViewState::Default
    }
}

// ========================
// Action Items
// ========================

/// REST call requested by an action item card
#[derive(Clone, Debug, PartialEq)]
pub enum ActionMutation {
    SetCompleted { id: u64, completed: bool },
    UpdateTask { id: u64, task: String },
    UpdateAssignee { id: u64, assignee: String },
    SetArchived { id: u64, archived: bool },
    Delete { id: u64 },
}

impl ActionMutation {
    pub async fn send(self, team_id: &str) -> Result<(), ApiError> {
        log::debug!(target: "action", "{:?}", self);
        match self {
            ActionMutation::SetCompleted { id, completed } => {
                api::update_completion_status(team_id, id, completed).await
            }
            ActionMutation::UpdateTask { id, task } => api::update_task(team_id, id, &task).await,
            ActionMutation::UpdateAssignee { id, assignee } => {
                api::update_assignee(team_id, id, &assignee).await
            }
            ActionMutation::SetArchived { id, archived } => {
                api::update_archived_status(team_id, id, archived).await
            }
            ActionMutation::Delete { id } => api::delete_action_item(team_id, id).await,
        }
    }
}

/// Entry/exit animation of an action card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    Disabled,
    FadeIn,
    FadeOut,
}

impl Animation {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Animation::Disabled => None,
            Animation::FadeIn => Some("fade-in"),
            Animation::FadeOut => Some("fade-out"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionItemState {
    action: Action,
    readonly: bool,
    view: ItemViewState,
    draft_task: String,
    draft_assignee: String,
    /// Last assignee sent (or loaded), to skip duplicate Enter + blur commits
    committed_assignee: String,
    animation: Animation,
}

impl ActionItemState {
    pub fn new(action: Action, readonly: bool, disable_animations: bool) -> Self {
        let assignee = action.assignee.clone().unwrap_or_default();
        Self {
            draft_task: action.task.clone(),
            draft_assignee: assignee.clone(),
            committed_assignee: assignee,
            action,
            readonly,
            view: ItemViewState::Default,
            animation: if disable_animations { Animation::Disabled } else { Animation::FadeIn },
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn view(&self) -> ItemViewState {
        self.view
    }

    pub fn draft_task(&self) -> &str {
        &self.draft_task
    }

    pub fn draft_assignee(&self) -> &str {
        &self.draft_assignee
    }

    pub fn is_editing(&self) -> bool {
        self.view == ItemViewState::Editing
    }

    /// The task text is read-only unless the editor is open
    pub fn task_readonly(&self) -> bool {
        !self.is_editing()
    }

    pub fn assignee_disabled(&self) -> bool {
        self.readonly || self.is_editing()
    }

    pub fn checkbox_disabled(&self) -> bool {
        self.readonly || self.is_editing()
    }

    pub fn edit_disabled(&self) -> bool {
        self.readonly || self.action.completed
    }

    pub fn delete_disabled(&self) -> bool {
        self.readonly || self.is_editing()
    }

    /// Clicking the task opens the detail modal unless it is being edited
    /// or already done (read-only views always may)
    pub fn can_open_modal(&self) -> bool {
        !self.is_editing() && (self.readonly || !self.action.completed)
    }

    /// Card classes: `action-item`, state modifiers, then animation
    pub fn class_name(&self) -> String {
        let mut class = String::from("action-item column-item");
        if self.action.completed {
            class.push_str(" completed");
        }
        if self.is_editing() {
            class.push_str(" editing");
        }
        if let Some(animation) = self.animation.class() {
            class.push(' ');
            class.push_str(animation);
        }
        class
    }

    pub fn sync(&mut self, action: Action) {
        if !self.is_editing() {
            self.draft_task = action.task.clone();
        }
        let assignee = action.assignee.clone().unwrap_or_default();
        if self.draft_assignee == self.committed_assignee {
            self.draft_assignee = assignee.clone();
        }
        self.committed_assignee = assignee;
        self.action = action;
    }

    /// Edit button. A second click while editing discards the draft.
    pub fn start_edit(&mut self) -> bool {
        match self.view {
            ItemViewState::Editing => {
                self.revert_task();
                false
            }
            ItemViewState::Default if !self.edit_disabled() => {
                self.draft_task = self.action.task.clone();
                self.view = ItemViewState::Editing;
                true
            }
            _ => false,
        }
    }

    pub fn edit_draft(&mut self, text: &str) {
        if self.is_editing() {
            self.draft_task = text.to_string();
        }
    }

    pub fn escape(&mut self) {
        match self.view {
            ItemViewState::Editing => self.revert_task(),
            ItemViewState::ConfirmingDelete => self.view = ItemViewState::Default,
            ItemViewState::Default => {}
        }
    }

    /// Page-wide keydown while the editor is open; true when it was handled.
    /// Delete confirmation handles its own Escape.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_editing() {
            self.revert_task();
            return true;
        }
        false
    }

    pub fn confirm_edit(&mut self) -> Option<ActionMutation> {
        if !self.is_editing() {
            return None;
        }
        let task = self.draft_task.trim().to_string();
        if task.is_empty() || task == self.action.task {
            self.revert_task();
            return None;
        }
        self.view = ItemViewState::Default;
        self.draft_task = task.clone();
        Some(ActionMutation::UpdateTask { id: self.action.id, task })
    }

    pub fn start_delete(&mut self) -> bool {
        if self.delete_disabled() {
            return false;
        }
        self.view = ItemViewState::ConfirmingDelete;
        true
    }

    pub fn cancel_delete(&mut self) {
        if self.view == ItemViewState::ConfirmingDelete {
            self.view = ItemViewState::Default;
        }
    }

    pub fn confirm_delete(&mut self) -> Option<ActionMutation> {
        if self.view != ItemViewState::ConfirmingDelete {
            return None;
        }
        self.view = ItemViewState::Default;
        Some(ActionMutation::Delete { id: self.action.id })
    }

    /// Checkbox. Flips the animation class right away so the card fades out.
    pub fn toggle_completed(&mut self) -> Option<ActionMutation> {
        if self.checkbox_disabled() {
            return None;
        }
        let completed = !self.action.completed;
        self.animation = match (self.animation, completed) {
            (Animation::Disabled, _) => Animation::Disabled,
            (_, true) => Animation::FadeOut,
            (_, false) => Animation::FadeIn,
        };
        Some(ActionMutation::SetCompleted { id: self.action.id, completed })
    }

    pub fn edit_assignee(&mut self, text: &str) {
        if !self.assignee_disabled() {
            self.draft_assignee = text.to_string();
        }
    }

    /// Enter key or blur on the assignee input
    pub fn commit_assignee(&mut self) -> Option<ActionMutation> {
        if self.assignee_disabled() {
            return None;
        }
        let assignee = self.draft_assignee.trim().to_string();
        if assignee == self.committed_assignee {
            return None;
        }
        self.committed_assignee = assignee.clone();
        self.draft_assignee = assignee.clone();
        Some(ActionMutation::UpdateAssignee { id: self.action.id, assignee })
    }

    /// Move an archived item back onto the board
    pub fn restore(&self) -> Option<ActionMutation> {
        (self.action.archived && !self.readonly)
            .then(|| ActionMutation::SetArchived { id: self.action.id, archived: false })
    }

    fn revert_task(&mut self) {
        self.draft_task = self.action.task.clone();
        self.view = ItemViewState::Default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_action() -> Action {
        Action {
            id: 0,
            task: "fake task".to_string(),
            assignee: None,
            completed: false,
            date_created: Some("2021-08-12".to_string()),
            archived: false,
        }
    }

    fn fake_thought() -> Thought {
        Thought {
            id: 42,
            team_id: "my-team".to_string(),
            topic: "happy".to_string(),
            message: "We shipped".to_string(),
            hearts: 1,
            discussed: false,
            column_id: Some(1),
            board_id: None,
        }
    }

    #[test]
    fn edit_opens_for_open_writable_action() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        assert!(state.task_readonly());
        assert!(state.start_edit());
        assert_eq!(state.view(), ItemViewState::Editing);
        assert!(!state.task_readonly());
    }

    #[test]
    fn escape_reverts_task_text() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        state.edit_draft("New Fake Task");
        assert_eq!(state.draft_task(), "New Fake Task");

        state.escape();
        assert_eq!(state.view(), ItemViewState::Default);
        assert_eq!(state.draft_task(), "fake task");
    }

    #[test]
    fn escape_anywhere_reverts_open_editor() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        assert!(!state.key_pressed("Escape"));

        state.start_edit();
        state.edit_draft("half typed");
        assert!(!state.key_pressed("a"));
        assert!(state.is_editing());

        assert!(state.key_pressed("Escape"));
        assert_eq!(state.view(), ItemViewState::Default);
        assert_eq!(state.draft_task(), state.action().task);
    }

    #[test]
    fn escape_anywhere_leaves_delete_confirmation_alone() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_delete();
        assert!(!state.key_pressed("Escape"));
        assert_eq!(state.view(), ItemViewState::ConfirmingDelete);
    }

    #[test]
    fn second_edit_click_cancels_editing() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        state.edit_draft("New Fake Task");
        assert!(!state.start_edit());
        assert_eq!(state.draft_task(), "fake task");
        assert_eq!(state.view(), ItemViewState::Default);
    }

    #[test]
    fn editing_disables_other_controls() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        assert!(state.assignee_disabled());
        assert!(!state.start_delete());
        assert_eq!(state.toggle_completed(), None);
        assert!(!state.can_open_modal());
    }

    #[test]
    fn confirming_edit_sends_trimmed_task() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        state.edit_draft("  New Fake Task ");
        assert_eq!(
            state.confirm_edit(),
            Some(ActionMutation::UpdateTask { id: 0, task: "New Fake Task".to_string() })
        );
        assert_eq!(state.view(), ItemViewState::Default);
    }

    #[test]
    fn unchanged_or_blank_task_sends_nothing() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        assert_eq!(state.confirm_edit(), None);

        state.start_edit();
        state.edit_draft("   ");
        assert_eq!(state.confirm_edit(), None);
        assert_eq!(state.draft_task(), "fake task");
    }

    #[test]
    fn escape_closes_delete_confirmation() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        assert!(state.start_delete());
        assert_eq!(state.view(), ItemViewState::ConfirmingDelete);
        state.escape();
        assert_eq!(state.view(), ItemViewState::Default);
    }

    #[test]
    fn cancelled_delete_sends_nothing() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_delete();
        state.cancel_delete();
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn confirmed_delete_sends_exactly_one_call() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_delete();
        assert_eq!(state.confirm_delete(), Some(ActionMutation::Delete { id: 0 }));
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn completing_switches_fade_class() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        assert!(state.class_name().contains("fade-in"));
        assert!(!state.class_name().contains("fade-out"));

        assert_eq!(
            state.toggle_completed(),
            Some(ActionMutation::SetCompleted { id: 0, completed: true })
        );
        assert!(!state.class_name().contains("fade-in"));
        assert!(state.class_name().contains("fade-out"));
    }

    #[test]
    fn disabled_animations_render_no_fade_class() {
        let mut state = ActionItemState::new(fake_action(), false, true);
        state.toggle_completed();
        let class = state.class_name();
        assert!(!class.contains("fade-in"));
        assert!(!class.contains("fade-out"));
    }

    #[test]
    fn completed_action_can_be_deleted_and_reopened_but_not_edited() {
        let action = Action { completed: true, ..fake_action() };
        let mut state = ActionItemState::new(action, false, false);
        assert!(!state.start_edit());
        assert!(!state.can_open_modal());
        assert_eq!(
            state.toggle_completed(),
            Some(ActionMutation::SetCompleted { id: 0, completed: false })
        );
        assert!(state.start_delete());
    }

    #[test]
    fn readonly_action_disables_everything_but_modal() {
        let mut state = ActionItemState::new(fake_action(), true, false);
        assert!(!state.start_edit());
        assert!(!state.start_delete());
        assert_eq!(state.toggle_completed(), None);
        state.edit_assignee("new Assignee");
        assert_eq!(state.commit_assignee(), None);
        assert!(state.can_open_modal());
    }

    #[test]
    fn assignee_commits_once_per_change() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.edit_assignee("FordLabs");
        assert_eq!(
            state.commit_assignee(),
            Some(ActionMutation::UpdateAssignee { id: 0, assignee: "FordLabs".to_string() })
        );
        // blur right after Enter
        assert_eq!(state.commit_assignee(), None);

        state.edit_assignee("FordLabs Team");
        assert_eq!(
            state.commit_assignee(),
            Some(ActionMutation::UpdateAssignee { id: 0, assignee: "FordLabs Team".to_string() })
        );
    }

    #[test]
    fn sync_keeps_open_editor_draft() {
        let mut state = ActionItemState::new(fake_action(), false, false);
        state.start_edit();
        state.edit_draft("typing");
        state.sync(Action { task: "changed elsewhere".to_string(), ..fake_action() });
        assert_eq!(state.draft_task(), "typing");
        state.escape();
        assert_eq!(state.draft_task(), "changed elsewhere");
    }

    #[test]
    fn archived_action_can_be_restored() {
        let state = ActionItemState::new(Action { archived: true, ..fake_action() }, false, true);
        assert_eq!(state.restore(), Some(ActionMutation::SetArchived { id: 0, archived: false }));
        let state = ActionItemState::new(fake_action(), false, true);
        assert_eq!(state.restore(), None);
    }

    #[test]
    fn thought_edit_and_cancel() {
        let mut state = ThoughtItemState::new(fake_thought(), false);
        assert!(state.start_edit());
        state.edit_draft("We shipped twice");
        state.cancel();
        assert_eq!(state.view(), ItemViewState::Default);
        assert_eq!(state.draft(), "We shipped");
    }

    #[test]
    fn thought_edit_sends_new_message() {
        let mut state = ThoughtItemState::new(fake_thought(), false);
        state.start_edit();
        assert_eq!(
            state.confirm_edit("We shipped twice"),
            Some(ThoughtMutation::UpdateMessage { id: 42, message: "We shipped twice".to_string() })
        );
        assert_eq!(state.view(), ItemViewState::Default);
    }

    #[test]
    fn thought_delete_requires_confirmation() {
        let mut state = ThoughtItemState::new(fake_thought(), false);
        assert_eq!(state.confirm_delete(), None);
        assert!(state.start_delete());
        assert_eq!(state.heart(), None);
        assert_eq!(state.confirm_delete(), Some(ThoughtMutation::Delete { id: 42 }));
    }

    #[test]
    fn thought_discussed_toggles() {
        let state = ThoughtItemState::new(fake_thought(), false);
        assert_eq!(
            state.toggle_discussed(),
            Some(ThoughtMutation::SetDiscussed { id: 42, discussed: true })
        );
        assert_eq!(state.heart(), Some(ThoughtMutation::Heart { id: 42 }));
    }

    #[test]
    fn thought_move_skips_own_column() {
        let state = ThoughtItemState::new(fake_thought(), false);
        assert_eq!(state.move_to(1), None);
        assert_eq!(state.move_to(2), Some(ThoughtMutation::Move { id: 42, column_id: 2 }));
    }

    #[test]
    fn readonly_thought_ignores_input() {
        let mut state = ThoughtItemState::new(fake_thought(), true);
        assert!(state.readonly());
        assert!(!state.start_edit());
        assert!(!state.start_delete());
        assert_eq!(state.heart(), None);
        assert_eq!(state.toggle_discussed(), None);
        assert_eq!(state.move_to(2), None);
    }
}
