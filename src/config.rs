//! Build-time Configuration
//!
//! Values baked in at compile time through environment variables.

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;
/// Polling faster than this hammers the backend for no visible gain
const MIN_POLL_INTERVAL_MS: u32 = 1_000;

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every REST path, without trailing slash
    pub api_base: String,
    /// How often the retro board reloads thoughts and action items
    pub poll_interval_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read `RETROQUEST_API_BASE`, `RETROQUEST_POLL_MS` and `RETROQUEST_LOG` as set at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("RETROQUEST_API_BASE"),
            option_env!("RETROQUEST_POLL_MS"),
            option_env!("RETROQUEST_LOG"),
        )
    }

    fn from_values(api_base: Option<&str>, poll_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or(defaults.api_base);

        let poll_interval_ms = poll_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_POLL_INTERVAL_MS))
            .unwrap_or(defaults.poll_interval_ms);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self { api_base, poll_interval_ms, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn api_base_loses_trailing_slash() {
        let config = AppConfig::from_values(Some("https://retro.example.com/api/"), None, None);
        assert_eq!(config.api_base, "https://retro.example.com/api");
    }

    #[test]
    fn poll_interval_is_clamped() {
        let config = AppConfig::from_values(None, Some("10"), None);
        assert_eq!(config.poll_interval_ms, MIN_POLL_INTERVAL_MS);

        let config = AppConfig::from_values(None, Some("not a number"), None);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = AppConfig::from_values(None, None, Some("DEBUG"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
