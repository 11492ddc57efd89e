//! Configuration file data structures

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::optimizer::{ImageTask, OptimizeOptions};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".img-slim.toml";

/// Which encoder backend to dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process encoding with the `image` crate (no external tools)
    #[default]
    Native,
    /// Subprocess encoding via oxipng/cjpeg/cwebp
    Cli,
}

/// img-slim configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Encoder backend to use
    #[serde(default)]
    pub backend: BackendKind,

    /// File names to optimize, searched across `directories`
    #[serde(default)]
    pub files: Vec<String>,

    /// Candidate directories, searched in order
    #[serde(default = "default_directories")]
    pub directories: Vec<PathBuf>,

    /// Per-format quality settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualitySettings>,

    /// WebP sibling policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp: Option<WebpSettings>,
}

fn default_directories() -> Vec<PathBuf> {
    vec![PathBuf::from("assets"), PathBuf::from("public/assets")]
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            files: Vec::new(),
            directories: default_directories(),
            quality: None,
            webp: None,
        }
    }
}

/// Quality settings for lossy encoders
///
/// PNG recompression is lossless on both backends and has no quality knob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualitySettings {
    /// JPEG recompression quality (1-100, default 80)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpeg: Option<u8>,

    /// WebP sibling quality (1-100, default 80)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp: Option<u8>,
}

impl QualitySettings {
    /// Validate that quality values are in the encoder-accepted range
    pub fn validate(&self) -> Result<()> {
        for (format, quality) in [("jpeg", self.jpeg), ("webp", self.webp)] {
            if let Some(q) = quality {
                if !(1..=100).contains(&q) {
                    anyhow::bail!("{} quality must be between 1 and 100, got {}", format, q);
                }
            }
        }
        Ok(())
    }
}

/// WebP sibling policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebpSettings {
    /// Whether to produce WebP siblings at all (default true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Keep siblings that are not smaller than the final main file
    /// (default false; true reproduces the legacy always-keep behavior)
    #[serde(rename = "keep-larger", skip_serializing_if = "Option::is_none")]
    pub keep_larger: Option<bool>,
}

impl ConfigFile {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        if self.directories.is_empty() {
            anyhow::bail!("at least one candidate directory is required");
        }
        if let Some(ref quality) = self.quality {
            quality.validate()?;
        }
        Ok(())
    }

    /// Resolve the runtime options for the optimizer
    pub fn optimize_options(&self) -> OptimizeOptions {
        let defaults = OptimizeOptions::default();
        let quality = self.quality.clone().unwrap_or_default();
        let webp = self.webp.clone().unwrap_or_default();

        OptimizeOptions {
            jpeg_quality: quality.jpeg.unwrap_or(defaults.jpeg_quality),
            webp_quality: quality.webp.unwrap_or(defaults.webp_quality),
            webp_siblings: webp.enabled.unwrap_or(defaults.webp_siblings),
            keep_larger_webp: webp.keep_larger.unwrap_or(defaults.keep_larger_webp),
        }
    }

    /// Build the task list: every configured file against every directory
    pub fn tasks(&self) -> Vec<ImageTask> {
        self.files
            .iter()
            .map(|name| ImageTask::new(name.as_str(), &self.directories))
            .collect()
    }
}
