//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{ConfigError, EngineConfig};
use tracing::{debug, info, instrument};

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "STRICTLY_GAMES_CONFIG";

/// User-configurable settings for a terminal session.
///
/// ```toml
/// show_analysis = true
///
/// [engine]
/// human_mark = "O"
/// enforce_turns = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Engine configuration.
    #[serde(default)]
    engine: EngineConfig,

    /// Print the computer's per-square scores before each of its moves.
    #[serde(default)]
    show_analysis: bool,
}

impl Settings {
    /// Creates settings from parts.
    #[instrument]
    pub fn new(engine: EngineConfig, show_analysis: bool) -> Self {
        Self {
            engine,
            show_analysis,
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            human = %settings.engine.human_mark(),
            show_analysis = settings.show_analysis,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise from the file named by
    /// [`CONFIG_ENV`], otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
