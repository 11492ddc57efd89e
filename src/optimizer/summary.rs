//! Run summary: the accumulator folded over the task list
//!
//! The totals are carried by value through a pure fold instead of living in
//! process-wide mutable counters, so the batch has no shared state and the
//! caller receives everything the run produced.

use serde::Serialize;

use crate::fmt::percent_saved;

use super::report::{FileOutcome, FileReport};

/// Aggregate result of one optimization run
///
/// # Examples
///
/// ```
/// use img_slim::optimizer::{FileOutcome, FileReport, RunSummary};
/// use std::path::Path;
///
/// let summary = RunSummary::default()
///     .record(FileReport::new(Path::new("a.png"), 1000, 600, Some(500), FileOutcome::Optimized))
///     .record(FileReport::new(Path::new("b.jpg"), 2000, 2000, None, FileOutcome::KeptOriginal));
///
/// assert_eq!(summary.total_before, 3000);
/// assert_eq!(summary.total_after, 2600);
/// assert_eq!(summary.total_webp_savings, 500);
/// assert_eq!(summary.saved_bytes(), 400);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Sum of before-sizes across all located files
    pub total_before: u64,
    /// Sum of after-sizes across all located files
    pub total_after: u64,
    /// Sum of (before-size − WebP-sibling-size) across files with a kept sibling
    ///
    /// Negative contributions are possible when larger siblings are kept.
    pub total_webp_savings: i64,
    /// Per-file reports in processing order
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    /// Fold one per-file report into the accumulator
    pub fn record(mut self, report: FileReport) -> Self {
        self.total_before += report.size_before;
        self.total_after += report.size_after;
        if let Some(webp) = report.webp_size {
            self.total_webp_savings += report.size_before as i64 - webp as i64;
        }
        self.reports.push(report);
        self
    }

    /// Bytes saved across all main files
    pub fn saved_bytes(&self) -> i64 {
        self.total_before as i64 - self.total_after as i64
    }

    /// Percentage saved across all main files
    pub fn saved_percent(&self) -> f64 {
        percent_saved(self.total_before, self.total_after)
    }

    /// Number of files with the given outcome
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }

    /// Whether any file failed to optimize
    pub fn has_failures(&self) -> bool {
        self.count(FileOutcome::Failed) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn report(before: u64, after: u64, webp: Option<u64>, outcome: FileOutcome) -> FileReport {
        FileReport::new(Path::new("img.png"), before, after, webp, outcome)
    }

    #[test]
    fn test_empty_summary_has_zero_totals() {
        let summary = RunSummary::default();
        assert_eq!(summary.total_before, 0);
        assert_eq!(summary.total_after, 0);
        assert_eq!(summary.total_webp_savings, 0);
        assert_eq!(summary.saved_bytes(), 0);
        assert_eq!(summary.saved_percent(), 0.0);
        assert!(summary.reports.is_empty());
    }

    #[test]
    fn test_record_accumulates_totals_monotonically() {
        let summary = RunSummary::default()
            .record(report(1000, 700, None, FileOutcome::Optimized))
            .record(report(500, 500, None, FileOutcome::KeptOriginal))
            .record(report(200, 200, None, FileOutcome::Skipped));

        assert_eq!(summary.total_before, 1700);
        assert_eq!(summary.total_after, 1400);
        assert_eq!(summary.saved_bytes(), 300);
    }

    #[test]
    fn test_webp_savings_only_counted_for_kept_siblings() {
        let summary = RunSummary::default()
            .record(report(1000, 700, Some(400), FileOutcome::Optimized))
            .record(report(500, 500, None, FileOutcome::KeptOriginal));

        assert_eq!(summary.total_webp_savings, 600);
    }

    #[test]
    fn test_webp_savings_can_go_negative_with_larger_siblings() {
        let summary =
            RunSummary::default().record(report(100, 100, Some(150), FileOutcome::KeptOriginal));

        assert_eq!(summary.total_webp_savings, -50);
    }

    #[test]
    fn test_count_by_outcome() {
        let summary = RunSummary::default()
            .record(report(10, 5, None, FileOutcome::Optimized))
            .record(report(10, 10, None, FileOutcome::Failed))
            .record(report(10, 10, None, FileOutcome::Failed));

        assert_eq!(summary.count(FileOutcome::Optimized), 1);
        assert_eq!(summary.count(FileOutcome::Failed), 2);
        assert_eq!(summary.count(FileOutcome::Skipped), 0);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_summary_serializes_to_json_with_reports() {
        let summary = RunSummary::default().record(report(10, 5, None, FileOutcome::Optimized));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_before\":10"));
        assert!(json.contains("\"reports\""));
    }
}
