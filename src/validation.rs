//! Form Validation
//!
//! Checks run before auth forms are submitted.

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_TEAM_NAME_LENGTH: usize = 64;

/// Error message for an invalid team name, `None` when valid
pub fn team_name_error(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Some("Please enter a team name.");
    }
    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Some("Team name must be 64 characters or fewer.");
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_') {
        return Some("Please enter a team name without any special characters.");
    }
    None
}

pub fn password_error(password: &str) -> Option<&'static str> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_upper && has_lower && has_digit {
        None
    } else {
        Some("8 or more characters with a mix of numbers, upper and lower case letters.")
    }
}

pub fn password_confirmation_error(password: &str, confirmation: &str) -> Option<&'static str> {
    (password != confirmation).then_some("Passwords do not match.")
}

pub fn email_error(email: &str) -> Option<&'static str> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        None
    } else {
        Some("Please enter a valid email address.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_names() {
        assert_eq!(team_name_error("The Crew-2"), None);
        assert!(team_name_error("   ").is_some());
        assert!(team_name_error("crew!").is_some());
        assert!(team_name_error(&"a".repeat(65)).is_some());
    }

    #[test]
    fn passwords_need_mixed_case_and_digit() {
        assert_eq!(password_error("Password1"), None);
        assert!(password_error("password1").is_some());
        assert!(password_error("PASSWORD1").is_some());
        assert!(password_error("Password").is_some());
        assert!(password_error("Pass1").is_some());
    }

    #[test]
    fn confirmation_must_match() {
        assert_eq!(password_confirmation_error("Password1", "Password1"), None);
        assert!(password_confirmation_error("Password1", "Password2").is_some());
    }

    #[test]
    fn emails() {
        assert_eq!(email_error("a@b.co"), None);
        assert!(email_error("ab.co").is_some());
        assert!(email_error("@b.co").is_some());
        assert!(email_error("a@bco").is_some());
        assert!(email_error("a@b.").is_some());
    }
}
