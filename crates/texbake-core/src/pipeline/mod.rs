//! Texture conversion pipeline components.
//!
//! - **naming**: Map source texture names to display names
//! - **discovery**: Find source textures in the input directory
//! - **converter**: Run the external converter and reconcile its output name
//! - **rotate**: Rotate converted images by 180 degrees in place
//! - **processor**: Orchestrates the batch

pub mod converter;
pub mod discovery;
pub mod naming;
pub mod processor;
pub mod rotate;

// Re-exports for convenient access
pub use converter::{CommandOutput, CommandRunner, Converter, SystemRunner};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use naming::NameTransformer;
pub use processor::{BatchObserver, BatchProcessor};
pub use rotate::Rotator;
