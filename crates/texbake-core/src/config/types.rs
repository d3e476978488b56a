//! Sub-configuration structs with defaults matching the repository layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where things live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Anchor for the relative paths below
    pub root: PathBuf,

    /// Directory scanned for source textures (relative to `root` unless absolute)
    pub input_dir: PathBuf,

    /// External converter executable (relative to `root` unless absolute)
    pub converter: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input_dir: ["src", "renderer", "src", "assets", "avatars", "character_avatars"]
                .iter()
                .collect(),
            converter: PathBuf::from("texconv.exe"),
        }
    }
}

/// Display-name rules applied to converted files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Extension of the compressed textures to pick up (matched case-insensitively)
    pub source_extension: String,

    /// Extension of the raster files the converter writes
    pub target_extension: String,

    /// Variant marker stripped from the end of the base name
    pub marker_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            source_extension: "dds".to_string(),
            target_extension: "png".to_string(),
            marker_suffix: "_r".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
