//! The default command: convert every texture in the input directory.

use indicatif::ProgressBar;
use texbake_core::pipeline::FileDiscovery;
use texbake_core::{
    BatchObserver, BatchProcessor, BatchReport, Config, DiscoveredFile, FileOutcome,
    ProcessingStats,
};

use crate::logging;

/// Execute the conversion.
///
/// Returns an error only for setup problems. Per-file failures are logged
/// and summarised but leave the exit status at 0.
pub async fn execute(config: &Config) -> anyhow::Result<()> {
    let processor = BatchProcessor::new(config)?;

    let mut progress = ProgressObserver::default();
    let result = processor.run_with(&mut progress).await;
    progress.finish();

    let report = result?;
    if !report.outcomes.is_empty() {
        print_summary(&report, progress.total_bytes);
    }
    Ok(())
}

/// Drives the progress bar from batch events.
#[derive(Default)]
struct ProgressObserver {
    bar: Option<ProgressBar>,
    total_bytes: u64,
}

impl BatchObserver for ProgressObserver {
    fn on_start(&mut self, files: &[DiscoveredFile]) {
        if files.is_empty() {
            return;
        }
        self.total_bytes = FileDiscovery::total_size(files);
        let bar = create_progress_bar(files.len() as u64);
        logging::attach_progress_bar(&bar);
        self.bar = Some(bar);
    }

    fn on_outcome(&mut self, outcome: &FileOutcome) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            bar.set_message(outcome.file_name());
        }
    }
}

impl ProgressObserver {
    fn finish(&mut self) {
        logging::detach_progress_bar();
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Create a progress bar for the batch.
fn create_progress_bar(total: u64) -> ProgressBar {
    use indicatif::ProgressStyle;

    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after the batch.
fn print_summary(report: &BatchReport, total_bytes: u64) {
    for line in summary_lines(&report.stats(), total_bytes) {
        eprintln!("{line}");
    }
    for outcome in report.failures() {
        if let Err(e) = &outcome.result {
            eprintln!(
                "    {} {}: {}",
                console::style("✗").for_stderr().red(),
                outcome.file_name(),
                e
            );
        }
    }
}

fn summary_lines(stats: &ProcessingStats, total_bytes: u64) -> Vec<String> {
    let total = stats.succeeded + stats.failed;
    let mb_processed = total_bytes as f64 / 1_000_000.0;

    let mut lines = vec![
        String::new(),
        "  ====================================".to_string(),
        "               Summary".to_string(),
        "  ====================================".to_string(),
        format!("    Converted:    {:>8}", stats.succeeded),
    ];
    if stats.failed > 0 {
        lines.push(format!(
            "    Failed:       {:>8}",
            console::style(stats.failed).for_stderr().red()
        ));
    }
    lines.extend([
        "  ------------------------------------".to_string(),
        format!("    Total:        {:>8}", total),
        format!("    Input size:   {:>7.1} MB", mb_processed),
        format!("    Duration:     {:>7.1}s", stats.total_seconds),
        format!("    Rate:         {:>7.1} files/sec", stats.files_per_second),
        "  ====================================".to_string(),
    ]);
    lines
}
