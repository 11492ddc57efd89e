//! The batch optimizer: locate, encode, replace-if-smaller, accumulate
//!
//! One file is fully processed (encode, compare, replace-or-discard, WebP
//! sibling) before the next begins. Per-file failures are logged and folded
//! into the summary as [`FileOutcome::Failed`]; they never abort the batch.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::encoder::{EncoderBackend, ImageKind};
use crate::infra::{FileSystem, RealFileSystem};

use super::report::{FileOutcome, FileReport};
use super::summary::RunSummary;
use super::task::ImageTask;

/// Tunables for one optimization run
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// JPEG recompression quality (1–100)
    pub jpeg_quality: u8,
    /// WebP sibling quality (1–100); ignored by lossless WebP encoders
    pub webp_quality: u8,
    /// Whether to produce WebP siblings at all
    pub webp_siblings: bool,
    /// Keep a WebP sibling even when it is not smaller than the final main file
    ///
    /// `true` reproduces the legacy always-keep behavior.
    pub keep_larger_webp: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: 80,
            webp_quality: 80,
            webp_siblings: true,
            keep_larger_webp: false,
        }
    }
}

/// Temporary candidate path: the source path with `.tmp` appended
///
/// Derived from the source path, so temp names are unique per file.
fn temp_candidate_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

/// Sibling path: the source path with its extension swapped for `webp`
fn webp_sibling_path(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

/// Sequential batch optimizer over a fixed task list
///
/// # Examples
///
/// ```no_run
/// use img_slim::encoder::NativeEncoder;
/// use img_slim::optimizer::{BatchOptimizer, ImageTask, OptimizeOptions};
/// use std::path::PathBuf;
///
/// let dirs = [PathBuf::from("assets"), PathBuf::from("public/assets")];
/// let tasks = vec![ImageTask::new("hero-background.png", &dirs)];
///
/// let encoder = NativeEncoder::new();
/// let optimizer = BatchOptimizer::new(&encoder, OptimizeOptions::default());
/// let summary = optimizer.run(&tasks);
///
/// println!("saved {} bytes", summary.saved_bytes());
/// ```
pub struct BatchOptimizer<'e, FS: FileSystem = RealFileSystem> {
    encoder: &'e dyn EncoderBackend,
    options: OptimizeOptions,
    fs: FS,
}

impl<'e> BatchOptimizer<'e, RealFileSystem> {
    /// Create an optimizer over the real filesystem
    pub fn new(encoder: &'e dyn EncoderBackend, options: OptimizeOptions) -> Self {
        Self::with_fs(encoder, options, RealFileSystem)
    }
}

impl<'e, FS: FileSystem> BatchOptimizer<'e, FS> {
    /// Create an optimizer with a custom filesystem implementation
    pub fn with_fs(encoder: &'e dyn EncoderBackend, options: OptimizeOptions, fs: FS) -> Self {
        Self {
            encoder,
            options,
            fs,
        }
    }

    /// Run the batch and return the folded summary
    pub fn run(&self, tasks: &[ImageTask]) -> RunSummary {
        self.run_with(tasks, |_| {})
    }

    /// Run the batch, invoking `observer` with each report as it is produced
    ///
    /// The observer sees reports in processing order, before they are folded
    /// into the summary; the CLI uses it to drive per-file output and the
    /// progress bar.
    pub fn run_with<F>(&self, tasks: &[ImageTask], mut observer: F) -> RunSummary
    where
        F: FnMut(&FileReport),
    {
        tasks.iter().fold(RunSummary::default(), |summary, task| {
            task.locate(&self.fs)
                .into_iter()
                .fold(summary, |acc, path| {
                    let report = self.optimize_file(&path);
                    observer(&report);
                    acc.record(report)
                })
        })
    }

    /// Optimize one located file and report what happened
    ///
    /// Never returns an error: encoder failures are logged, leftover temp
    /// files are removed best-effort, and the outcome records the failure.
    pub fn optimize_file(&self, path: &Path) -> FileReport {
        let size_before = self.fs.file_size(path);

        let Some(kind) = ImageKind::from_path(path) else {
            debug!("{}: unsupported extension, skipping", path.display());
            return FileReport::new(path, size_before, size_before, None, FileOutcome::Skipped);
        };

        let tmp = temp_candidate_path(path);
        let outcome = match self
            .encoder
            .encode(path, &tmp, kind, self.options.jpeg_quality)
        {
            Ok(_) => self.commit_if_smaller(path, &tmp, size_before),
            Err(err) => {
                warn!(
                    "{}: {} encoder failed: {}",
                    path.display(),
                    self.encoder.name(),
                    err
                );
                self.discard(&tmp);
                FileOutcome::Failed
            }
        };

        let size_after = self.fs.file_size(path);

        let webp_size = if self.options.webp_siblings && outcome != FileOutcome::Failed {
            self.write_webp_sibling(path, size_after)
        } else {
            None
        };

        FileReport::new(path, size_before, size_after, webp_size, outcome)
    }

    /// Replace-if-smaller: commit the candidate only when it is strictly
    /// smaller than the original and non-empty; otherwise discard it.
    fn commit_if_smaller(&self, path: &Path, tmp: &Path, size_before: u64) -> FileOutcome {
        let candidate = self.fs.file_size(tmp);

        if candidate > 0 && candidate < size_before {
            match self.fs.rename(tmp, path) {
                Ok(()) => {
                    debug!(
                        "{}: replaced ({} -> {} bytes)",
                        path.display(),
                        size_before,
                        candidate
                    );
                    FileOutcome::Optimized
                }
                Err(err) => {
                    warn!("{}: failed to commit candidate: {}", path.display(), err);
                    self.discard(tmp);
                    FileOutcome::Failed
                }
            }
        } else {
            debug!(
                "{}: keeping original ({} bytes, candidate {})",
                path.display(),
                size_before,
                candidate
            );
            self.discard(tmp);
            FileOutcome::KeptOriginal
        }
    }

    /// Write the WebP sibling and apply the retention policy
    ///
    /// Returns the sibling's size when it was produced and kept.
    fn write_webp_sibling(&self, path: &Path, main_size: u64) -> Option<u64> {
        let sibling = webp_sibling_path(path);

        if let Err(err) = self
            .encoder
            .encode_webp(path, &sibling, self.options.webp_quality)
        {
            warn!("{}: webp sibling failed: {}", path.display(), err);
            self.discard(&sibling);
            return None;
        }

        let webp_size = self.fs.file_size(&sibling);
        if webp_size == 0 {
            return None;
        }

        if !self.options.keep_larger_webp && main_size > 0 && webp_size >= main_size {
            debug!(
                "{}: discarding webp sibling ({} >= {} bytes)",
                path.display(),
                webp_size,
                main_size
            );
            self.discard(&sibling);
            return None;
        }

        Some(webp_size)
    }

    /// Best-effort removal of a leftover artifact
    fn discard(&self, path: &Path) {
        if !self.fs.exists(path) {
            return;
        }
        if let Err(err) = self.fs.remove_file(path) {
            warn!("{}: failed to remove leftover: {}", path.display(), err);
        }
    }
}
