//! Optimization tasks: one named asset, searched across candidate directories

use std::path::PathBuf;

use serde::Serialize;

use crate::infra::FileSystem;

/// A single asset to optimize, identified by file name
///
/// The candidate paths are fixed at construction time (file name joined onto
/// each configured directory, in order) and never change afterwards. A task
/// whose file exists in several candidate directories is optimized in each of
/// them, mirroring the per-directory pass of the original asset pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTask {
    file_name: String,
    candidates: Vec<PathBuf>,
}

impl ImageTask {
    /// Build a task for `file_name` searched across `directories` in order
    ///
    /// # Examples
    ///
    /// ```
    /// use img_slim::optimizer::ImageTask;
    /// use std::path::PathBuf;
    ///
    /// let dirs = [PathBuf::from("assets"), PathBuf::from("public/assets")];
    /// let task = ImageTask::new("hero-background.png", &dirs);
    ///
    /// assert_eq!(task.file_name(), "hero-background.png");
    /// assert_eq!(task.candidates().len(), 2);
    /// ```
    pub fn new(file_name: impl Into<String>, directories: &[PathBuf]) -> Self {
        let file_name = file_name.into();
        let candidates = directories.iter().map(|d| d.join(&file_name)).collect();
        Self {
            file_name,
            candidates,
        }
    }

    /// The bare file name this task targets
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// All candidate paths, in directory order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// The candidate paths that currently exist on disk, in directory order
    pub fn locate<FS: FileSystem>(&self, fs: &FS) -> Vec<PathBuf> {
        self.candidates
            .iter()
            .filter(|p| fs.exists(p))
            .cloned()
            .collect()
    }
}
