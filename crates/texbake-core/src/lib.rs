//! texbake core - batch conversion of DDS avatar textures.
//!
//! Each source texture goes through a short, strictly sequential pipeline:
//!
//! ```text
//! *.dds → converter (PNG) → rename to display name → rotate 180° → delete source
//! ```
//!
//! A failure on one file is recorded in the [`BatchReport`] and the batch moves
//! on. Only a missing converter or input directory stops the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use texbake_core::{BatchProcessor, Config};
//!
//! #[tokio::main]
//! async fn main() -> texbake_core::Result<()> {
//!     let config = Config::for_root(".");
//!     let report = BatchProcessor::new(&config)?.run().await?;
//!     println!("{} converted, {} failed", report.succeeded(), report.failed());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PipelineResult, Result, SetupError, TexbakeError};
pub use pipeline::{
    BatchObserver, BatchProcessor, CommandRunner, Converter, DiscoveredFile, NameTransformer,
};
pub use types::{BatchReport, FileOutcome, ProcessingStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
