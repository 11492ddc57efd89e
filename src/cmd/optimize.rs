//! Optimize command implementation
//!
//! Thin presentation layer for the optimize command: loads configuration,
//! picks the encoder backend, drives the batch optimizer, and renders the
//! per-file reports and the final summary.

use anyhow::Result;
use console::style;
use indicatif::ProgressBar;
use std::env;

use crate::config::{BackendKind, ConfigLoader};
use crate::encoder::{CliEncoder, EncoderBackend, NativeEncoder};
use crate::error::ImgSlimError;
use crate::fmt::ROCKET;
use crate::infra::RealFileSystem;
use crate::optimizer::{BatchOptimizer, ImageTask, ResultFormatter, RunSummary};
use crate::tools::{install_instructions, ToolChain};

/// Main optimize command handler (presentation layer)
///
/// # Examples
///
/// ```no_run
/// use img_slim::cmd::optimize::cmd_optimize;
///
/// // Optimize with the configured backend
/// cmd_optimize(false, false, None)?;
///
/// // Dry-run to preview which files would be touched
/// cmd_optimize(true, false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_optimize(
    dry_run: bool,
    json_output: bool,
    backend_override: Option<BackendKind>,
) -> Result<()> {
    println!("{} {} Image Optimization", ROCKET, style("img-slim").bold());
    println!();

    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    if config.files.is_empty() {
        return Err(ImgSlimError::NoFilesConfigured.into());
    }

    let backend = backend_override.unwrap_or(config.backend);
    let tasks = config.tasks();

    if dry_run {
        present_dry_run(&tasks);
        return Ok(());
    }

    if backend == BackendKind::Cli {
        ensure_cli_tools()?;
    }

    let encoder: Box<dyn EncoderBackend> = match backend {
        BackendKind::Native => Box::new(NativeEncoder::new()),
        BackendKind::Cli => Box::new(CliEncoder::new()),
    };

    println!(
        "{} Optimizing {} file(s) with the {} backend...\n",
        style("→").dim(),
        tasks.len(),
        style(encoder.name()).cyan()
    );

    let optimizer = BatchOptimizer::new(encoder.as_ref(), config.optimize_options());

    let progress = ProgressBar::new_spinner();
    let summary = optimizer.run_with(&tasks, |report| {
        progress.set_message(report.path.display().to_string());
        progress.suspend(|| ResultFormatter::print_file_report(report));
        progress.tick();
    });
    progress.finish_and_clear();

    ResultFormatter::print_summary(&summary);

    // JSON output for CI/CD
    if json_output {
        present_json_report(&summary)?;
    }

    Ok(())
}

/// Fail fast with install instructions when the subprocess backend cannot run
fn ensure_cli_tools() -> Result<()> {
    let toolchain = ToolChain::new();
    if toolchain.check_required().is_ok() {
        return Ok(());
    }

    let missing = [&toolchain.oxipng, &toolchain.cjpeg]
        .into_iter()
        .find(|tool| !tool.is_installed())
        .map(|tool| (tool.name, tool.binary))
        .unwrap_or(("oxipng", "oxipng"));

    Err(ImgSlimError::ToolMissing {
        tool: missing.0.to_string(),
        install_cmd: install_instructions(missing.1).to_string(),
    }
    .into())
}

/// Present the files a real run would touch
fn present_dry_run(tasks: &[ImageTask]) {
    let fs = RealFileSystem;
    let located: Vec<_> = tasks.iter().flat_map(|task| task.locate(&fs)).collect();

    if located.is_empty() {
        println!("[DRY RUN] No configured files found in the candidate directories.");
        return;
    }

    println!("[DRY RUN] Would optimize {} file(s):", located.len());
    for path in located {
        println!("   {} Would optimize: {}", style("→").dim(), path.display());
    }
    println!();
}

/// Present JSON report for CI/CD systems
fn present_json_report(summary: &RunSummary) -> Result<()> {
    let report = serde_json::json!({
        "total_before": summary.total_before,
        "total_after": summary.total_after,
        "total_webp_savings": summary.total_webp_savings,
        "saved_bytes": summary.saved_bytes(),
        "saved_percent": summary.saved_percent(),
        "files": summary.reports,
    });

    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();

    Ok(())
}
