//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Whether the computer opponent starts enabled.
    computer_enabled: bool,

    /// Mark played by the computer.
    computer_mark: Mark,

    /// Pause before the computer answers, in milliseconds.
    computer_delay_ms: u64,

    /// Seed for computer moves; entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// File receiving tracing output.
    log_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer_enabled: true,
            computer_mark: Mark::O,
            computer_delay_ms: 300,
            seed: None,
            log_file: "tictactoe.log".to_string(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            computer_enabled = config.computer_enabled,
            computer_mark = %config.computer_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` when given and present, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!("Config file not found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Computer delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
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
    fn test_defaults_match_classic_game() {
        let config = SessionConfig::default();
        assert!(*config.computer_enabled());
        assert_eq!(*config.computer_mark(), Mark::O);
        assert_eq!(config.computer_delay(), Duration::from_millis(300));
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_mark = \"X\"\nseed = 5").unwrap();

        let config = SessionConfig::from_file(file.path()).unwrap();

        assert_eq!(*config.computer_mark(), Mark::X);
        assert_eq!(*config.seed(), Some(5));
        assert_eq!(*config.computer_delay_ms(), 300);
        assert!(*config.computer_enabled());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

        let err = SessionConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_override_fields() {
        let config = SessionConfig::default()
            .with_computer_enabled(false)
            .with_seed(9);
        assert!(!*config.computer_enabled());
        assert_eq!(*config.seed(), Some(9));
    }
}
