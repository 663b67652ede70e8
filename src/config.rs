//! Configuration management
//!
//! Loads settings from a TOML file at startup. A missing file is not an
//! error: defaults apply. The hop bound is revalidated on the way out so
//! a config file can never push a search past the ceiling.

use crate::search::MaxHops;
use serde::{Deserialize, Serialize};

/// Path finder configuration
///
/// Loaded from the file named by `CONFIG_PATH` (default
/// `pathfinder.toml`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum markets a returned route may cross (0 to 6)
    #[serde(default = "default_max_hops")]
    pub max_hops: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_hops: default_max_hops(),
        }
    }
}

fn default_max_hops() -> u8 {
    MaxHops::DEFAULT.get()
}

impl Config {
    /// Load configuration from the TOML file named by `CONFIG_PATH`.
    ///
    /// If the file doesn't exist, returns default configuration.
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "pathfinder.toml".to_string());

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)
                    .map_err(|e| ConfigError::ParseError(e.to_string()))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File not found - use defaults
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::IoError(e)),
        }
    }

    /// The configured hop bound, revalidated.
    /// # Errors
    /// `MaxHopsOutOfRange` when the file asks for more than the ceiling.
    pub fn max_hops(&self) -> Result<MaxHops, ConfigError> {
        MaxHops::new(self.search.max_hops)
            .ok_or(ConfigError::MaxHopsOutOfRange(self.search.max_hops))
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading file
    IoError(std::io::Error),
    /// Parse error (invalid TOML)
    ParseError(String),
    /// max_hops above the settlement ceiling
    MaxHopsOutOfRange(u8),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::MaxHopsOutOfRange(n) => {
                write!(f, "max_hops {} exceeds ceiling {}", n, MaxHops::CEILING)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(_) => None,
            ConfigError::MaxHopsOutOfRange(_) => None,
        }
    }
}
