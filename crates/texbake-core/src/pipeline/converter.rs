//! External converter invocation and output-name reconciliation.
//!
//! The converter always names its output after the source stem. The
//! [`Converter`] runs it and then moves that output onto the display name.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::config::NamingConfig;
use crate::error::{PipelineError, PipelineResult};

use super::naming::split_extension;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Whether the process exited with status 0
    pub success: bool,
    /// Human-readable exit status
    pub status: String,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Runs an external program to completion.
///
/// Object-safe so the converter can hold a `Box<dyn CommandRunner>` and tests
/// can substitute a fake.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, waiting for it to exit.
    async fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput>;
}

/// Spawns real processes through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Converts one texture with the external tool and renames the result.
pub struct Converter {
    tool: PathBuf,
    target_extension: String,
    runner: Box<dyn CommandRunner>,
}

impl Converter {
    /// Create a converter that spawns `tool` as a real process.
    pub fn new(tool: impl Into<PathBuf>, naming: &NamingConfig) -> Self {
        Self::with_runner(tool, naming, Box::new(SystemRunner))
    }

    /// Create a converter with a custom process runner.
    pub fn with_runner(
        tool: impl Into<PathBuf>,
        naming: &NamingConfig,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            tool: tool.into(),
            target_extension: naming.target_extension.clone(),
            runner,
        }
    }

    /// Path of the converter executable.
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Arguments for converting `source` into `out_dir`.
    ///
    /// Output format, overwrite, output directory, then the source as the
    /// final positional argument.
    pub fn args(&self, source: &Path, out_dir: &Path) -> Vec<OsString> {
        vec![
            "-ft".into(),
            self.target_extension.clone().into(),
            "-y".into(),
            "-o".into(),
            out_dir.into(),
            source.into(),
        ]
    }

    /// Where the converter writes its output for `source`.
    pub fn implied_output(&self, source: &Path, out_dir: &Path) -> PathBuf {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let (stem, _) = split_extension(&file_name);
        out_dir.join(format!("{}.{}", stem, self.target_extension))
    }

    /// Convert `source` and leave the result at `target`.
    pub async fn convert(&self, source: &Path, target: &Path) -> PipelineResult<()> {
        let out_dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        tracing::info!(
            "Running converter for {}",
            source.file_name().unwrap_or_default().to_string_lossy()
        );
        let args = self.args(source, &out_dir);
        let output = self
            .runner
            .run(&self.tool, &args)
            .await
            .map_err(|e| PipelineError::Spawn {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.stdout.trim().is_empty() {
            tracing::debug!(
                "Converter output for {:?}:\n{}",
                source,
                output.stdout.trim_end()
            );
        }
        if !output.success {
            let stderr = output.stderr.trim();
            return Err(PipelineError::ConverterFailed {
                path: source.to_path_buf(),
                status: output.status,
                stderr: if stderr.is_empty() {
                    "Unknown".to_string()
                } else {
                    stderr.to_string()
                },
            });
        }

        let produced = self.implied_output(source, &out_dir);
        if produced != target {
            move_onto(&produced, target)?;
        }
        Ok(())
    }
}

/// Move `from` onto `to`, replacing any file already at `to`.
///
/// The output is parked under a staging name first, so a target that differs
/// only in case on a case-insensitive filesystem is not mistaken for a stale
/// file and deleted along with the fresh output.
fn move_onto(from: &Path, to: &Path) -> PipelineResult<()> {
    let rename_err = |e: std::io::Error| PipelineError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: e.to_string(),
    };

    let staging = staging_path(from);
    std::fs::rename(from, &staging).map_err(rename_err)?;

    let result = remove_if_exists(to).and_then(|()| std::fs::rename(&staging, to));
    if let Err(e) = result {
        if let Err(restore) = std::fs::rename(&staging, from) {
            tracing::warn!("Could not restore {:?} from {:?}: {}", from, staging, restore);
        }
        return Err(rename_err(e));
    }
    tracing::debug!("Renamed {:?} -> {:?}", from, to);
    Ok(())
}

fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("Removed stale {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".texbake-tmp");
    path.with_file_name(name)
}
