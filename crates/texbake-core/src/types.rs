//! Per-file outcomes and batch summaries.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::PipelineError;

/// What happened to one source texture.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source texture path
    pub source: PathBuf,

    /// Display-name target path
    pub target: PathBuf,

    /// `Ok` once converted, rotated and the source removed
    pub result: Result<(), PipelineError>,
}

impl FileOutcome {
    /// Whether the file went through every stage.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Source file name for log lines.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Collected outcomes of one run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per discovered source texture
    pub outcomes: Vec<FileOutcome>,

    /// Wall time spent on the batch
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of files fully processed.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of files left in place because a stage failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Summary counters for display.
    pub fn stats(&self) -> ProcessingStats {
        let succeeded = self.succeeded();
        let total_seconds = self.elapsed.as_secs_f64();
        ProcessingStats {
            succeeded,
            failed: self.failed(),
            files_per_second: if total_seconds > 0.0 {
                succeeded as f64 / total_seconds
            } else {
                0.0
            },
            total_seconds,
        }
    }
}

/// Summary statistics for a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    /// Files converted successfully
    pub succeeded: usize,

    /// Files that failed
    pub failed: usize,

    /// Processing rate in files per second
    pub files_per_second: f64,

    /// Total processing time in seconds
    pub total_seconds: f64,
}
