//! Game configuration loaded from TOML.

use crate::games::tictactoe::Engine;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File read when no config path is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_noughts.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the computer's random fallback move. Unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(log_filter))]
    pub fn new(seed: Option<u64>, log_filter: String) -> Self {
        Self { seed, log_filter }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the given file, or the default file if present, or falls back to defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the seed when one is given.
    #[instrument(skip(self))]
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds an engine honouring the configured seed.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn engine(&self) -> Engine {
        match self.seed {
            Some(seed) => Engine::with_seed(seed),
            None => Engine::new(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None, default_log_filter())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
