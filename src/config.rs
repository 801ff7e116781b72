//! Client configuration loaded from environment variables.
//!
//! Read once at startup. A `.env` file in the working directory is honored
//! for local development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which presenter the terminal front-end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendKind {
    /// Card layout modeled on the browser client.
    Panel,
    /// Single summary block modeled on the mobile client.
    Compact,
}

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the NOX API (no trailing slash)
    pub api_base_url: String,
    /// Directory holding the persisted session and journals.
    /// `None` means the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Fixed duration of the loading screen
    pub loading_delay: Duration,
    /// Trailing window (days) for the workout history read
    pub workout_window_days: u32,
    /// Per-identity journal cap (0 = unlimited)
    pub journal_max_entries: usize,
    pub frontend: FrontendKind,
    pub log_format: LogFormat,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            data_dir: None,
            loading_delay: Duration::ZERO,
            workout_window_days: 30,
            journal_max_entries: 0,
            frontend: FrontendKind::Panel,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let frontend = match env::var("NOX_FRONTEND").as_deref() {
            Err(_) | Ok("panel") => FrontendKind::Panel,
            Ok("compact") => FrontendKind::Compact,
            Ok(other) => return Err(ConfigError::invalid("NOX_FRONTEND", other)),
        };

        let log_format = match env::var("NOX_LOG_FORMAT").as_deref() {
            Err(_) | Ok("pretty") => LogFormat::Pretty,
            Ok("json") => LogFormat::Json,
            Ok(other) => return Err(ConfigError::invalid("NOX_LOG_FORMAT", other)),
        };

        Ok(Self {
            api_base_url: normalize_base_url(
                &env::var("NOX_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            ),
            data_dir: env::var("NOX_DATA_DIR").ok().map(PathBuf::from),
            loading_delay: Duration::from_millis(parse_var("NOX_LOADING_DELAY_MS", 2200)?),
            workout_window_days: parse_var("NOX_WORKOUT_DAYS", 30)?,
            journal_max_entries: parse_var("NOX_JOURNAL_MAX_ENTRIES", 0)?,
            frontend,
            log_format,
        })
    }

    /// Resolve the local data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_local_dir().ok_or(ConfigError::Missing("NOX_DATA_DIR"))?;
        Ok(base.join("nox"))
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(name, &raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str) -> Self {
        ConfigError::Invalid {
            var,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("NOX_BASE_URL", "https://nox.example.com///");
        env::set_var("NOX_LOADING_DELAY_MS", "50");
        env::set_var("NOX_FRONTEND", "compact");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "https://nox.example.com");
        assert_eq!(config.loading_delay, Duration::from_millis(50));
        assert_eq!(config.frontend, FrontendKind::Compact);
        assert_eq!(config.workout_window_days, 30);

        env::remove_var("NOX_BASE_URL");
        env::remove_var("NOX_LOADING_DELAY_MS");
        env::remove_var("NOX_FRONTEND");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://a.b/ "), "http://a.b");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/nox-test")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/nox-test")
        );
    }
}
