#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! img-slim library
//!
//! This library provides the core functionality for batch image asset
//! optimization. It can be used programmatically in addition to the CLI
//! interface.
//!
//! # Basic Example
//!
//! Building a task list and folding the summary:
//!
//! ```
//! use img_slim::optimizer::{FileOutcome, FileReport, RunSummary};
//! use std::path::Path;
//!
//! let summary = RunSummary::default()
//!     .record(FileReport::new(Path::new("a.png"), 1000, 700, Some(500), FileOutcome::Optimized))
//!     .record(FileReport::new(Path::new("b.jpg"), 400, 400, None, FileOutcome::KeptOriginal));
//!
//! assert_eq!(summary.total_before, 1400);
//! assert_eq!(summary.saved_bytes(), 300);
//! assert_eq!(summary.count(FileOutcome::Optimized), 1);
//! ```
//!
//! # Advanced Example: Configuration
//!
//! Resolving runtime options from a configuration:
//!
//! ```
//! use img_slim::config::{ConfigFile, QualitySettings, WebpSettings};
//!
//! let config = ConfigFile {
//!     files: vec!["hero-background.png".to_string()],
//!     quality: Some(QualitySettings { jpeg: Some(75), webp: Some(85) }),
//!     webp: Some(WebpSettings { enabled: Some(true), keep_larger: Some(false) }),
//!     ..Default::default()
//! };
//!
//! assert!(config.validate().is_ok());
//! let options = config.optimize_options();
//! assert_eq!(options.jpeg_quality, 75);
//! assert!(!options.keep_larger_webp);
//! ```
//!
//! # Advanced Example: Running a batch
//!
//! The optimizer takes any [`encoder::EncoderBackend`]; the native backend
//! needs no external tools:
//!
//! ```no_run
//! use img_slim::encoder::NativeEncoder;
//! use img_slim::optimizer::{BatchOptimizer, ImageTask, OptimizeOptions};
//! use std::path::PathBuf;
//!
//! let dirs = [PathBuf::from("assets"), PathBuf::from("public/assets")];
//! let tasks = vec![ImageTask::new("hero-background.png", &dirs)];
//!
//! let encoder = NativeEncoder::new();
//! let optimizer = BatchOptimizer::new(&encoder, OptimizeOptions::default());
//! let summary = optimizer.run(&tasks);
//!
//! println!("saved {} bytes across {} files", summary.saved_bytes(), summary.reports.len());
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Encoder backends (subprocess and in-process)
pub mod encoder;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Batch optimization pipeline
pub mod optimizer;
/// Encoder tool detection and version checking
pub mod tools;
