//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use std::io::{self, Write};
use std::sync::Mutex;

use indicatif::ProgressBar;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Progress bar currently drawn on stderr, if any.
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Route log lines around `bar` until [`detach_progress_bar`] is called.
pub fn attach_progress_bar(bar: &ProgressBar) {
    *ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()) = Some(bar.clone());
}

/// Stop routing log lines around the progress bar.
pub fn detach_progress_bar() {
    ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()).take();
}

/// Stderr writer that hides the active progress bar while a line is written,
/// so log output and the bar never share a terminal row.
struct StderrAroundBar;

impl Write for StderrAroundBar {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Clone out of the lock; suspend redraws the bar and must not hold it.
        let bar = ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()).clone();
        match bar {
            Some(bar) => bar.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `default_level` - Filter used when RUST_LOG is unset (e.g. "info").
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// # Notes
///
/// - Log output goes to stderr, written around the progress bar if one is attached
/// - The RUST_LOG environment variable can override the log level
pub fn init(default_level: &str, json_format: bool) {
    // Build the filter, respecting RUST_LOG if set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        // JSON format for machine parsing
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(|| StderrAroundBar))
            .init();
    } else {
        // Pretty format for humans
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(|| StderrAroundBar)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging with configuration from Config.
///
/// `--verbose` raises the configured level to at least debug; `--json-logs`
/// forces JSON output.
pub fn init_from_config(
    config: &texbake_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = effective_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}

fn effective_level(configured: &str, verbose: bool) -> &str {
    match (verbose, configured) {
        (true, "trace") => "trace",
        (true, _) => "debug",
        (false, level) => level,
    }
}
