//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! Per-file encoder failures never reach this module: the batch recovers from
//! them locally and records the outcome in the run summary. These errors are
//! the ones that stop a command before or instead of a run.

use std::path::PathBuf;
use thiserror::Error;

/// Enhanced img-slim errors with contextual suggestions
#[derive(Error, Debug)]
pub enum ImgSlimError {
    /// Required encoder tool is not installed
    #[error("Tool not installed: {tool}")]
    ToolMissing {
        /// Tool name
        tool: String,
        /// Installation command
        install_cmd: String,
    },

    /// Configuration file is present but unusable
    #[error("Invalid configuration: {path}")]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// File not found during operation
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to missing file
        path: PathBuf,
        /// Operation that required the file
        operation: String,
    },

    /// Nothing to optimize: the configuration lists no files
    #[error("No files configured for optimization")]
    NoFilesConfigured,

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ImgSlimError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use img_slim::error::ImgSlimError;
    ///
    /// let error = ImgSlimError::ToolMissing {
    ///     tool: "oxipng".to_string(),
    ///     install_cmd: "cargo install oxipng".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// assert!(suggestion.unwrap().contains("cargo install"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ToolMissing { install_cmd, .. } => Some(format!("Install with: {}", install_cmd)),
            Self::InvalidConfig { reason, .. } => Some(format!(
                "{}\nRun 'img-slim init' to regenerate a starter config",
                reason
            )),
            Self::FileNotFound { path, operation } => Some(format!(
                "Ensure {} exists before running {}",
                path.display(),
                operation
            )),
            Self::NoFilesConfigured => Some(
                "Add file names to the [files] list in .img-slim.toml, or run 'img-slim init' \
                 to create a starter config"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following
    /// sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use img_slim::error::ImgSlimError;
    ///
    /// let error = ImgSlimError::ToolMissing {
    ///     tool: "cwebp".to_string(),
    ///     install_cmd: "apt install webp".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 127); // Command not found
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolMissing { .. } => 127, // Command not found (Unix convention)
            Self::InvalidConfig { .. } => 65, // EX_DATAERR
            Self::FileNotFound { .. } => 66, // EX_NOINPUT
            Self::NoFilesConfigured => 64,   // EX_USAGE
            Self::Io { .. } => 74,           // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to ImgSlimError for suggestions
        if let Some(is_error) = error.downcast_ref::<ImgSlimError>() {
            if let Some(suggestion) = is_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(is_error) = error.downcast_ref::<ImgSlimError>() {
            is_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
