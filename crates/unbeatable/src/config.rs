//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use unbeatable_core::Mark;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "unbeatable.toml";

/// User-configurable settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mark the human plays. `None` shows the selection screen.
    #[serde(default)]
    human_mark: Option<Mark>,

    /// Pause before the computer's move appears, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Start with move hints visible.
    #[serde(default)]
    show_hints: bool,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("unbeatable.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_mark: None,
            think_delay_ms: default_think_delay_ms(),
            show_hints: false,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config at `path`, or [`DEFAULT_CONFIG_PATH`] if none given.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human's mark when `mark` is set.
    pub fn with_human_mark(mut self, mark: Option<Mark>) -> Self {
        if mark.is_some() {
            self.human_mark = mark;
        }
        self
    }

    /// Overrides the thinking delay.
    pub fn with_think_delay_ms(mut self, delay_ms: u64) -> Self {
        self.think_delay_ms = delay_ms;
        self
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "human_mark = \"O\"\nthink_delay_ms = 0\nshow_hints = true\nlog_file = \"game.log\""
        )
        .expect("write config");

        let config = AppConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.human_mark(), &Some(Mark::O));
        assert_eq!(config.think_delay_ms(), &0);
        assert!(*config.show_hints());
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "human_mark = \"Z\"").expect("write config");

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_override() {
        let config = AppConfig::default().with_human_mark(Some(Mark::X));
        assert_eq!(config.human_mark(), &Some(Mark::X));
        let config = config.with_human_mark(None);
        assert_eq!(config.human_mark(), &Some(Mark::X));
    }
}
