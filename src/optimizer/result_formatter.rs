//! Optimization result formatting and display
//!
//! Human-readable only; the `--json` flag serializes the summary instead.
//! The substrings printed here ("Size before:", "Original total:", ...) are
//! stable enough for smoke tests to grep but are not a machine contract.

use console::style;

use crate::fmt::{format_bytes, CAMERA, CHART, SPARKLES, WARNING};

use super::report::{FileOutcome, FileReport};
use super::summary::RunSummary;

/// Formats and displays per-file reports and the run summary
pub struct ResultFormatter;

impl ResultFormatter {
    /// Print the report block for one processed file
    pub fn print_file_report(report: &FileReport) {
        let name = report
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.path.display().to_string());
        let location = report
            .path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        println!("{} {}", CAMERA, style(name).bold());
        println!("   Location: {}", style(location).dim());
        println!("   Size before: {}", format_bytes(report.size_before));

        match report.outcome {
            FileOutcome::Skipped => {
                println!("   {} Skipped (unsupported format)", style("→").dim());
            }
            FileOutcome::Failed => {
                println!("   {} Optimization failed, original kept", WARNING);
            }
            FileOutcome::Optimized | FileOutcome::KeptOriginal => {
                let saved = report.saved_bytes().max(0) as u64;
                println!(
                    "   Size after: {} (saved {} / {:.1}%)",
                    style(format_bytes(report.size_after)).green(),
                    format_bytes(saved),
                    report.saved_percent()
                );
            }
        }

        if let Some(webp_size) = report.webp_size {
            if webp_size <= report.size_before {
                println!(
                    "   WebP size: {} ({} smaller than original)",
                    format_bytes(webp_size),
                    format_bytes(report.size_before - webp_size)
                );
            } else {
                println!(
                    "   WebP size: {} ({} larger than original)",
                    format_bytes(webp_size),
                    format_bytes(webp_size - report.size_before)
                );
            }
        }

        println!();
    }

    /// Print the aggregate summary block for a finished run
    pub fn print_summary(summary: &RunSummary) {
        println!("{} {}", CHART, style("Summary").bold());
        println!("   ==========");
        println!(
            "   Original total:  {}",
            style(format_bytes(summary.total_before)).yellow()
        );
        println!(
            "   Optimized total: {}",
            style(format_bytes(summary.total_after)).green().bold()
        );

        let saved = summary.saved_bytes();
        if saved > 0 {
            println!(
                "   Direct savings:  {} ({:.1}%)",
                style(format_bytes(saved as u64)).green().bold(),
                summary.saved_percent()
            );
        } else {
            println!("   Direct savings:  none");
        }

        if summary.total_webp_savings > 0 {
            println!(
                "   WebP savings:    {}",
                style(format_bytes(summary.total_webp_savings as u64)).green()
            );
        }

        println!(
            "   {} optimized, {} kept, {} skipped, {} failed",
            summary.count(FileOutcome::Optimized),
            summary.count(FileOutcome::KeptOriginal),
            summary.count(FileOutcome::Skipped),
            summary.count(FileOutcome::Failed)
        );

        println!(
            "\n{} {} Optimization complete!",
            SPARKLES,
            style("Done.").green().bold()
        );
    }
}
