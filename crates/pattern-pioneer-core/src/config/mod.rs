//! Configuration management for Pattern Pioneer.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. All config structs implement `Default`, so an absent file or an
//! absent section means "use the gallery defaults".

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-image transform settings
    pub optimize: OptimizeConfig,

    /// Batch selection and naming
    pub batch: BatchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.patternpioneer.pattern-pioneer/config.toml
    /// - Linux: ~/.config/pattern-pioneer/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\pattern-pioneer\config\config.toml
    ///
    /// Falls back to ~/.pattern-pioneer/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "patternpioneer", "pattern-pioneer")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home)
                    .join(".pattern-pioneer")
                    .join("config.toml")
            })
    }

    /// Get the resolved output directory (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        expand_path(&self.batch.output_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Expand a leading `~` in a path.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}
