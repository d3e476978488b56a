//! Error types for the texbake conversion pipeline.
//!
//! Errors fall into two tiers: setup errors abort the whole run, while
//! pipeline errors are scoped to a single file and never stop the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a whole run.
///
/// Per-file [`PipelineError`]s never surface here; they are recorded in the
/// batch report instead.
#[derive(Error, Debug)]
pub enum TexbakeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Missing tool or input directory
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Preconditions checked before any file is touched.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The converter executable is not where the layout says it is
    #[error("Converter not found at {}", .0.display())]
    ToolNotFound(PathBuf),

    /// The texture directory does not exist
    #[error("Input directory not found at {}", .0.display())]
    InputDirNotFound(PathBuf),

    /// The texture directory exists but could not be listed
    #[error("Cannot read input directory {}: {message}", .path.display())]
    InputDirUnreadable { path: PathBuf, message: String },
}

/// Errors for a single file, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The converter exited with a non-zero status
    #[error("Converter failed for {} ({status}): {stderr}", .path.display())]
    ConverterFailed {
        path: PathBuf,
        status: String,
        stderr: String,
    },

    /// The converter process could not be started
    #[error("Cannot run converter for {}: {message}", .path.display())]
    Spawn { path: PathBuf, message: String },

    /// Moving the converter output onto the display name failed
    #[error("Rename {} -> {} failed: {message}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// Opening, rotating or saving the raster image failed
    #[error("Rotate failed for {}: {message}", .path.display())]
    Rotate { path: PathBuf, message: String },

    /// The source texture could not be deleted after conversion
    #[error("Cannot remove source {}: {message}", .path.display())]
    RemoveSource { path: PathBuf, message: String },
}

/// Convenience type alias for texbake results.
pub type Result<T> = std::result::Result<T, TexbakeError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
