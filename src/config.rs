//! Session configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name for the player holding X.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Name for the player holding O.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Longest display name kept, in characters. Never zero.
    #[serde(
        default = "default_max_name_len",
        deserialize_with = "deserialize_max_name_len"
    )]
    max_name_len: usize,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_x_name() -> String {
    "Player 1".to_string()
}

fn default_player_o_name() -> String {
    "Player 2".to_string()
}

fn default_max_name_len() -> usize {
    24
}

fn deserialize_max_name_len<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match usize::deserialize(deserializer)? {
        0 => Err(serde::de::Error::custom("max_name_len must be at least 1")),
        len => Ok(len),
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            max_name_len: default_max_name_len(),
            log_file: default_log_file(),
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

        let config = Self::from_toml(&content)?;
        info!(
            player_x = %config.player_x_name,
            player_o = %config.player_o_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Default display name for a mark.
    pub fn default_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x_name,
            Mark::O => &self.player_o_name,
        }
    }

    /// Overrides the configured name for a mark.
    pub fn with_name(mut self, mark: Mark, name: String) -> Self {
        match mark {
            Mark::X => self.player_x_name = name,
            Mark::O => self.player_o_name = name,
        }
        self
    }

    /// Overrides the log file path.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
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
