//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::ImgSlimError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .img-slim.toml in the given directory
    ///
    /// A missing config file is not an error: the built-in defaults mirror
    /// the constants of the legacy asset scripts.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use img_slim::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("{} files configured", config.files.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(ImgSlimError::Io {
                    context: format!("reading {}", CONFIG_FILE_NAME),
                    source: e,
                }
                .into());
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| ImgSlimError::InvalidConfig {
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        config.validate().map_err(|e| ImgSlimError::InvalidConfig {
            path: config_path,
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to .img-slim.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = toml_edit::ser::to_string_pretty(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

        fs.write(&config_path, contents)
            .map_err(|e| ImgSlimError::Io {
                context: format!("writing {}", CONFIG_FILE_NAME),
                source: e,
            })?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::BackendKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert!(config.files.is_empty());
        assert_eq!(config.backend, BackendKind::Native);
    }

    #[test]
    fn test_load_parses_full_config() {
        let temp = TempDir::new().unwrap();
        let toml = r#"
backend = "cli"
files = ["hero.png", "cover.jpg"]
directories = ["assets", "public/assets"]

[quality]
jpeg = 75
webp = 85

[webp]
enabled = true
keep-larger = true
"#;
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), toml).unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.backend, BackendKind::Cli);
        assert_eq!(config.files, vec!["hero.png", "cover.jpg"]);

        let options = config.optimize_options();
        assert_eq!(options.jpeg_quality, 75);
        assert_eq!(options.webp_quality, 85);
        assert!(options.keep_larger_webp);
    }

    #[test]
    fn test_load_with_invalid_toml_returns_invalid_config_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "backend = [not toml").unwrap();

        let result = ConfigLoader::load(temp.path());
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<crate::error::ImgSlimError>().is_some());
    }

    #[test]
    fn test_load_with_out_of_range_quality_fails_validation() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[quality]\njpeg = 250\n",
        )
        .unwrap();

        let result = ConfigLoader::load(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();

        let config = ConfigFile {
            files: vec!["hero.png".to_string()],
            ..Default::default()
        };
        ConfigLoader::save(&config, temp.path()).unwrap();

        assert!(ConfigLoader::exists(temp.path()));

        let loaded = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(loaded.files, vec!["hero.png"]);
        assert_eq!(loaded.directories, config.directories);
    }

    #[test]
    fn test_exists_is_false_without_config() {
        let temp = TempDir::new().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));
    }
}
