//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use lanes_tictactoe::{Mark, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Strategy the AI plays.
    #[serde(default = "default_strategy")]
    strategy: Strategy,

    /// The human's mark. X moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,
}

fn default_size() -> usize {
    3
}

fn default_strategy() -> Strategy {
    Strategy::BlockThenFinish
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            strategy: default_strategy(),
            human_mark: default_human_mark(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        strategy: Option<Strategy>,
        human_mark: Option<Mark>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(human_mark) = human_mark {
            self.human_mark = human_mark;
        }
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
