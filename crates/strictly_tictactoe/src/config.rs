//! Engine configuration.

use super::error::ConfigError;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings that change how a [`GameState`](crate::GameState) behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark played by the human. The computer plays the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Reject moves made out of turn.
    ///
    /// Off by default: callers are trusted to alternate human and computer.
    #[serde(default)]
    enforce_turns: bool,
}

fn default_human_mark() -> Player {
    Player::X
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(human_mark: Player, enforce_turns: bool) -> Self {
        Self {
            human_mark,
            enforce_turns,
        }
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            human = %config.human_mark,
            enforce_turns = config.enforce_turns,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            enforce_turns: false,
        }
    }
}
