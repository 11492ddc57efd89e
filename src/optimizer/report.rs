//! Per-file optimization reports

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::fmt::percent_saved;

/// What happened to one located file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// Candidate was strictly smaller; the original was replaced
    Optimized,
    /// Candidate was not smaller; the original was kept byte-for-byte
    KeptOriginal,
    /// Unsupported extension; the file was counted but never rewritten
    Skipped,
    /// Encoder failed; the original was kept and the batch continued
    Failed,
}

impl FileOutcome {
    /// Whether the file came through the pass intact and processed
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Optimized | FileOutcome::KeptOriginal)
    }
}

/// Result of optimizing a single located file
///
/// Produced per located file and folded into the
/// [`RunSummary`](crate::optimizer::RunSummary); files absent from every
/// candidate directory never produce a report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path that was processed
    pub path: PathBuf,
    /// Size in bytes before the pass (zero when unreadable)
    pub size_before: u64,
    /// Size in bytes after the pass
    pub size_after: u64,
    /// Size of the WebP sibling, when one was produced and kept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp_size: Option<u64>,
    /// Per-file outcome
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Build a report for `path` with the given measurements
    pub fn new(
        path: &Path,
        size_before: u64,
        size_after: u64,
        webp_size: Option<u64>,
        outcome: FileOutcome,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            size_before,
            size_after,
            webp_size,
            outcome,
        }
    }

    /// Bytes saved on the main file (negative if it grew)
    pub fn saved_bytes(&self) -> i64 {
        self.size_before as i64 - self.size_after as i64
    }

    /// Percentage saved on the main file; zero when the before-size is zero
    pub fn saved_percent(&self) -> f64 {
        percent_saved(self.size_before, self.size_after)
    }
}
