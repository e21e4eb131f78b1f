//! Session Persistence
//!
//! Auth token and theme kept in `localStorage`.

const TOKEN_KEY: &str = "token";
const THEME_KEY: &str = "theme";

/// Color theme picked by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system-theme",
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn parse(value: &str) -> Theme {
        match value {
            "light-theme" => Theme::Light,
            "dark-theme" => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::System => "System Settings",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Body class to apply; `System` resolves through the OS preference
    pub fn body_class(self, prefers_dark: bool) -> &'static str {
        match self {
            Theme::Light => Theme::Light.as_str(),
            Theme::Dark => Theme::Dark.as_str(),
            Theme::System if prefers_dark => Theme::Dark.as_str(),
            Theme::System => Theme::Light.as_str(),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!(target: "session", "could not persist token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Put the theme class on `<body>`
pub fn apply_theme(theme: Theme) {
    if let Some(body) = web_sys::window().and_then(|win| win.document()).and_then(|doc| doc.body()) {
        body.set_class_name(theme.body_class(prefers_dark()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_storage_value() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_theme_value_means_system() {
        assert_eq!(Theme::parse(""), Theme::System);
        assert_eq!(Theme::parse("purple"), Theme::System);
    }

    #[test]
    fn system_theme_follows_os_preference() {
        assert_eq!(Theme::System.body_class(true), "dark-theme");
        assert_eq!(Theme::System.body_class(false), "light-theme");
        assert_eq!(Theme::Light.body_class(true), "light-theme");
    }
}
