//! Text Formatting Helpers

use chrono::{Datelike, NaiveDate};

/// Placeholder for a missing date
pub const NO_DATE: &str = "—";

/// Longest thought message or action task the backend accepts
pub const MAX_ITEM_LENGTH: usize = 255;
/// Longest assignee list the backend accepts
pub const MAX_ASSIGNEE_LENGTH: usize = 50;

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // Accept plain dates and the date part of timestamps
    let date = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `2021-08-12` → `Aug 12th`; missing or unparseable → `—`
pub fn format_date_created(value: Option<&str>) -> String {
    match value.and_then(parse_date) {
        Some(date) => format!("{} {}{}", date.format("%b"), date.day(), ordinal_suffix(date.day())),
        None => NO_DATE.to_string(),
    }
}

/// `2022-01-03` → `Jan 3rd, 2022`
pub fn format_board_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} {}{}, {}",
            date.format("%b"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        ),
        None => NO_DATE.to_string(),
    }
}

/// Split an add-action input into task and assignees.
/// `"do thing @alice @bob"` → `("do thing", Some("alice, bob"))`
pub fn parse_action_input(input: &str) -> (String, Option<String>) {
    let mut task_words = Vec::new();
    let mut assignees = Vec::new();

    for word in input.split_whitespace() {
        match word.strip_prefix('@') {
            Some(name) if !name.is_empty() => assignees.push(name),
            _ => task_words.push(word),
        }
    }

    let assignee = if assignees.is_empty() {
        None
    } else {
        let mut joined = assignees.join(", ");
        truncate_chars(&mut joined, MAX_ASSIGNEE_LENGTH);
        Some(joined)
    };
    (task_words.join(" "), assignee)
}

/// Characters left before hitting `max`
pub fn remaining_chars(text: &str, max: usize) -> i64 {
    max as i64 - text.chars().count() as i64
}

fn truncate_chars(text: &mut String, max: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_created_uses_short_month_and_ordinal() {
        assert_eq!(format_date_created(Some("2021-08-12")), "Aug 12th");
        assert_eq!(format_date_created(Some("2018-08-08")), "Aug 8th");
        assert_eq!(format_date_created(Some("2018-03-01")), "Mar 1st");
        assert_eq!(format_date_created(Some("2018-03-22")), "Mar 22nd");
        assert_eq!(format_date_created(Some("2018-03-23")), "Mar 23rd");
        assert_eq!(format_date_created(Some("2018-03-11")), "Mar 11th");
    }

    #[test]
    fn missing_date_shows_dash() {
        assert_eq!(format_date_created(None), "—");
        assert_eq!(format_date_created(Some("")), "—");
        assert_eq!(format_date_created(Some("yesterday")), "—");
    }

    #[test]
    fn timestamps_use_date_part() {
        assert_eq!(format_date_created(Some("2021-08-12T10:15:00")), "Aug 12th");
        assert_eq!(format_board_date("2022-01-03T00:00:00Z"), "Jan 3rd, 2022");
    }

    #[test]
    fn assignees_are_pulled_out_of_task() {
        assert_eq!(
            parse_action_input("do thing @alice @bob"),
            ("do thing".to_string(), Some("alice, bob".to_string()))
        );
        assert_eq!(parse_action_input("  plain task "), ("plain task".to_string(), None));
        assert_eq!(parse_action_input("email me @ noon"), ("email me @ noon".to_string(), None));
    }

    #[test]
    fn assignee_list_is_capped() {
        let input = format!("task @{}", "a".repeat(80));
        let (_, assignee) = parse_action_input(&input);
        assert_eq!(assignee.unwrap().chars().count(), MAX_ASSIGNEE_LENGTH);
    }

    #[test]
    fn remaining_chars_counts_unicode() {
        assert_eq!(remaining_chars("héllo", 10), 5);
        assert_eq!(remaining_chars("abc", 2), -1);
    }
}
