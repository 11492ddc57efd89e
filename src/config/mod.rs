//! Configuration management for img-slim
//!
//! This module provides:
//! - .img-slim.toml config file support (files, directories, backend, policy)
//! - Built-in defaults mirroring the legacy asset scripts' constants

pub mod file;
pub mod loader;

pub use file::{BackendKind, ConfigFile, QualitySettings, WebpSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
