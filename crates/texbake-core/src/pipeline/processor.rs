//! Batch orchestration - wires discovery, conversion, rotation and cleanup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult, Result, SetupError};
use crate::types::{BatchReport, FileOutcome};

use super::converter::{CommandRunner, Converter};
use super::discovery::{DiscoveredFile, FileDiscovery};
use super::naming::NameTransformer;
use super::rotate::Rotator;

/// Hooks for following a batch while it runs.
pub trait BatchObserver {
    /// Called once with the files about to be processed (possibly none).
    fn on_start(&mut self, _files: &[DiscoveredFile]) {}

    /// Called after each file, in processing order.
    fn on_outcome(&mut self, _outcome: &FileOutcome) {}
}

impl BatchObserver for () {}

/// Converts every source texture in the input directory, one at a time.
pub struct BatchProcessor {
    input_dir: PathBuf,
    names: NameTransformer,
    discovery: FileDiscovery,
    converter: Converter,
    rotator: Rotator,
}

impl BatchProcessor {
    /// Create a processor that runs the real converter executable.
    pub fn new(config: &Config) -> Result<Self> {
        let converter = Converter::new(config.converter_path(), &config.naming);
        Self::with_converter(config, converter)
    }

    /// Create a processor whose converter goes through `runner`.
    pub fn with_runner(config: &Config, runner: Box<dyn CommandRunner>) -> Result<Self> {
        let converter = Converter::with_runner(config.converter_path(), &config.naming, runner);
        Self::with_converter(config, converter)
    }

    fn with_converter(config: &Config, converter: Converter) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            input_dir: config.input_dir(),
            names: NameTransformer::new(config.naming.clone()),
            discovery: FileDiscovery::new(&config.naming),
            converter,
            rotator: Rotator,
        })
    }

    /// Directory scanned for source textures.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Fail fast if the converter or the input directory is missing.
    pub fn check_setup(&self) -> std::result::Result<(), SetupError> {
        if !self.converter.tool().is_file() {
            return Err(SetupError::ToolNotFound(self.converter.tool().to_path_buf()));
        }
        if !self.input_dir.is_dir() {
            return Err(SetupError::InputDirNotFound(self.input_dir.clone()));
        }
        Ok(())
    }

    /// Source textures in the input directory, sorted by name.
    pub fn discover(&self) -> std::result::Result<Vec<DiscoveredFile>, SetupError> {
        self.discovery.discover(&self.input_dir)
    }

    /// Check setup, then process every discovered file.
    pub async fn run(&self) -> Result<BatchReport> {
        self.run_with(&mut ()).await
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    ///
    /// Only setup problems are returned as errors. A failing file is recorded
    /// in the report and never stops the batch.
    pub async fn run_with<O>(&self, observer: &mut O) -> Result<BatchReport>
    where
        O: BatchObserver + ?Sized,
    {
        self.check_setup()?;
        let files = self.discover()?;
        if files.is_empty() {
            tracing::info!(
                "No {} files found in {:?}",
                self.discovery.suffix(),
                self.input_dir
            );
        } else {
            tracing::info!("Found {} texture(s) to convert", files.len());
        }
        observer.on_start(&files);

        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            let outcome = self.process_file(file).await;
            observer.on_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(BatchReport {
            outcomes,
            elapsed: start.elapsed(),
        })
    }

    /// Convert, rotate, then delete the source of a single file.
    pub async fn process_file(&self, file: &DiscoveredFile) -> FileOutcome {
        let target = self.names.target_path(&self.input_dir, &file.file_name);
        tracing::info!(
            "Processing {} -> {}",
            file.file_name,
            target.file_name().unwrap_or_default().to_string_lossy()
        );

        let result = self.run_stages(&file.path, &target).await;
        match &result {
            Ok(()) => tracing::info!("Done: {}", file.file_name),
            Err(PipelineError::ConverterFailed { stderr, .. }) => {
                tracing::error!(
                    "Failed to convert {}. Converter error: {}",
                    file.file_name,
                    stderr
                );
            }
            Err(e) => tracing::error!("An error occurred with {}: {}", file.file_name, e),
        }

        FileOutcome {
            source: file.path.clone(),
            target,
            result,
        }
    }

    async fn run_stages(&self, source: &Path, target: &Path) -> PipelineResult<()> {
        let start = Instant::now();
        self.converter.convert(source, target).await?;
        tracing::trace!("  Convert: {:?}", start.elapsed());

        let rotate_start = Instant::now();
        self.rotator.rotate_in_place(target).await?;
        tracing::trace!("  Rotate: {:?}", rotate_start.elapsed());

        std::fs::remove_file(source).map_err(|e| PipelineError::RemoveSource {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
    }
}
