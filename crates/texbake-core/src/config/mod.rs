//! Configuration management for texbake.
//!
//! The directory layout is an explicit value handed to the batch driver. All
//! config structs implement `Default` with the repository layout used by the
//! avatar assets; an optional TOML file can override any field.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for texbake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository layout: anchor, texture directory, converter binary
    pub paths: PathsConfig,

    /// Display-name rules
    pub naming: NamingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Default configuration anchored at the given repository root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.paths.root = root.into();
        config
    }

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
    /// - macOS: ~/Library/Application Support/com.texbake.texbake/config.toml
    /// - Linux: ~/.config/texbake/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\texbake\config\config.toml
    ///
    /// Falls back to ~/.texbake/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "texbake", "texbake")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".texbake").join("config.toml")
            })
    }

    /// Repository root with `~` expanded.
    pub fn root(&self) -> PathBuf {
        expand(&self.paths.root)
    }

    /// Directory holding the source textures.
    pub fn input_dir(&self) -> PathBuf {
        self.resolve(&self.paths.input_dir)
    }

    /// Path of the external converter executable.
    pub fn converter_path(&self) -> PathBuf {
        self.resolve(&self.paths.converter)
    }

    /// Expand `~`, then anchor relative paths at the repository root.
    fn resolve(&self, path: &Path) -> PathBuf {
        let expanded = expand(path);
        if expanded.is_absolute() {
            expanded
        } else {
            self.root().join(expanded)
        }
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&path_str).into_owned())
}
