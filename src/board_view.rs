//! Board View Helpers
//!
//! Grouping and ordering of cards for rendering.

use crate::models::{Action, Column, Thought};

/// Thoughts of one column in display order.
/// Undiscussed thoughts come first; within each group newest first, or most hearts first.
pub fn column_thoughts(thoughts: &[Thought], column: &Column, sort_by_hearts: bool) -> Vec<Thought> {
    let mut result: Vec<Thought> = thoughts.iter().filter(|t| column.contains(t)).cloned().collect();
    result.sort_by(|a, b| {
        a.discussed
            .cmp(&b.discussed)
            .then_with(|| if sort_by_hearts { b.hearts.cmp(&a.hearts) } else { std::cmp::Ordering::Equal })
            .then_with(|| b.id.cmp(&a.id))
    });
    result
}

/// Open action items first, newest first within each group
pub fn sort_action_items(actions: &[Action]) -> Vec<Action> {
    let mut result = actions.to_vec();
    result.sort_by(|a, b| a.completed.cmp(&b.completed).then_with(|| b.id.cmp(&a.id)));
    result
}

/// Items still on the board (not archived)
pub fn active_action_items(actions: &[Action]) -> Vec<Action> {
    let active: Vec<Action> = actions.iter().filter(|a| !a.archived).cloned().collect();
    sort_action_items(&active)
}

/// (open, total) count shown in column headers
pub fn open_count(thoughts: &[Thought]) -> (usize, usize) {
    (thoughts.iter().filter(|t| !t.discussed).count(), thoughts.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thought(id: u64, column_id: u64, hearts: u32, discussed: bool) -> Thought {
        Thought {
            id,
            team_id: "t".to_string(),
            topic: String::new(),
            message: format!("Thought {}", id),
            hearts,
            discussed,
            column_id: Some(column_id),
            board_id: None,
        }
    }

    fn action(id: u64, completed: bool, archived: bool) -> Action {
        Action {
            id,
            task: format!("Task {}", id),
            assignee: None,
            completed,
            date_created: None,
            archived,
        }
    }

    fn column(id: u64) -> Column {
        Column { id, topic: "happy".to_string(), title: "Happy".to_string(), team_id: "t".to_string() }
    }

    #[test]
    fn thoughts_are_filtered_to_column_newest_first() {
        let thoughts = vec![thought(1, 1, 0, false), thought(2, 2, 0, false), thought(3, 1, 0, false)];
        let ids: Vec<u64> = column_thoughts(&thoughts, &column(1), false).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn discussed_thoughts_sink_to_bottom() {
        let thoughts = vec![thought(1, 1, 5, true), thought(2, 1, 0, false)];
        let ids: Vec<u64> = column_thoughts(&thoughts, &column(1), true).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn heart_sort_orders_by_hearts_then_newest() {
        let thoughts = vec![thought(1, 1, 3, false), thought(2, 1, 1, false), thought(3, 1, 3, false)];
        let ids: Vec<u64> = column_thoughts(&thoughts, &column(1), true).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn completed_actions_follow_open_ones() {
        let actions = vec![action(1, false, false), action(2, true, false), action(3, false, false)];
        let ids: Vec<u64> = sort_action_items(&actions).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn archived_actions_are_hidden_from_board() {
        let actions = vec![action(1, false, true), action(2, true, false)];
        let ids: Vec<u64> = active_action_items(&actions).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn open_count_ignores_discussed() {
        let thoughts = vec![thought(1, 1, 0, true), thought(2, 1, 0, false)];
        assert_eq!(open_count(&thoughts), (1, 2));
    }
}
