//! Batch execution with progress tracking, report file, and summary.

use std::time::{Duration, Instant};

use pattern_pioneer_core::{write_report_file, BatchReport, BatchRunner, Config};

use super::OptimizeArgs;

/// Optimize the input directory and print a summary.
///
/// Per-file failures are reported but do not make the command fail.
pub fn run_batch(config: &Config, args: &OptimizeArgs) -> anyhow::Result<()> {
    let output_dir = config.output_dir();
    let settings = config.optimize;

    eprintln!("Pattern Pioneer Image Optimizer");
    eprintln!("Input: {}", args.input_dir.display());
    eprintln!("Output: {}", output_dir.display());
    eprintln!(
        "Settings: {}px max, {}% quality, {}x zoom",
        settings.max_size, settings.quality, settings.crop_zoom
    );
    eprintln!("{}", "=".repeat(50));

    let runner = BatchRunner::new(config);
    let plan = runner.plan(&args.input_dir)?;
    if plan.items.is_empty() {
        tracing::warn!(
            "No supported image files found in {}",
            args.input_dir.display()
        );
    } else {
        eprintln!(
            "Selected {} of {} images ({:.1}MB)",
            plan.items.len(),
            plan.found(),
            plan.total_bytes() as f64 / (1024.0 * 1024.0)
        );
    }

    let progress = create_progress_bar(plan.items.len() as u64);
    let start_time = Instant::now();

    let report = runner.run_plan(plan, &args.input_dir, &output_dir, |item, _| {
        progress.inc(1);
        progress.set_message(item.output_name.clone());
    })?;

    progress.finish_and_clear();
    print_summary(&report, start_time.elapsed());

    if let Some(ref report_path) = args.report {
        write_report_file(report_path, &report)?;
        tracing::info!("Report written to {:?}", report_path);
    }

    eprintln!("Optimized images saved to: {}/", output_dir.display());
    Ok(())
}

/// Create a progress bar for batch processing.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after batch processing.
fn print_summary(report: &BatchReport, elapsed: Duration) {
    let original_mb = report.original_bytes() as f64 / (1024.0 * 1024.0);
    let output_kb = report.output_bytes() as f64 / 1024.0;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Found:        {:>8}", report.found);
    eprintln!("    Succeeded:    {:>8}", report.succeeded.len());
    if !report.failed.is_empty() {
        eprintln!("    Failed:       {:>8}", report.failed.len());
    }
    if !report.skipped.is_empty() {
        eprintln!("    Skipped:      {:>8}", report.skipped.len());
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Input:        {:>7.1}MB", original_mb);
    eprintln!("    Output:       {:>7.0}KB", output_kb);
    if let Some(ratio) = reduction_percent(report) {
        eprintln!("    Reduction:    {:>7.1}%", ratio);
    }
    eprintln!("    Duration:     {:>7.1}s", elapsed.as_secs_f64());
    eprintln!("  ====================================");
    if report.is_clean() {
        return;
    }
    for failure in &report.failed {
        eprintln!("    FAILED {}: {}", failure.source.display(), failure.error);
    }
}

/// Size reduction across the written images, if anything was written.
fn reduction_percent(report: &BatchReport) -> Option<f64> {
    let original = report.original_bytes();
    if original == 0 {
        return None;
    }
    Some(100.0 * (1.0 - report.output_bytes() as f64 / original as f64))
}
