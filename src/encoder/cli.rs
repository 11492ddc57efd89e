//! Subprocess encoder backend
//!
//! Shells out to the external compressors detected by [`crate::tools`]:
//! `oxipng` for PNG recompression, `cjpeg` (mozjpeg) for progressive JPEG,
//! `cwebp` for WebP siblings. All invocations go through the injected
//! [`CommandExecutor`] so tests never spawn real processes.

use std::path::Path;

use log::debug;

use super::{EncoderBackend, EncoderError, ImageKind};
use crate::infra::{CommandExecutor, FileSystem, RealCommandExecutor, RealFileSystem};

/// Encoder backend that invokes external compression tools
pub struct CliEncoder<FS: FileSystem = RealFileSystem, CE: CommandExecutor = RealCommandExecutor> {
    fs: FS,
    cmd_executor: CE,
}

impl CliEncoder<RealFileSystem, RealCommandExecutor> {
    /// Create a CLI encoder using real subprocess execution
    pub fn new() -> Self {
        Self::with_executors(RealFileSystem, RealCommandExecutor)
    }
}

impl Default for CliEncoder<RealFileSystem, RealCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem, CE: CommandExecutor> CliEncoder<FS, CE> {
    /// Create a CLI encoder with custom filesystem and command executor implementations
    pub fn with_executors(fs: FS, cmd_executor: CE) -> Self {
        Self { fs, cmd_executor }
    }

    fn run_tool<F>(&self, tool: &'static str, builder: F) -> Result<(), EncoderError>
    where
        F: FnOnce(&mut std::process::Command) -> &mut std::process::Command,
    {
        let output = self.cmd_executor.execute(builder, tool)?;
        if !output.status.success() {
            return Err(EncoderError::ToolFailed {
                tool,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn written_bytes(&self, output: &Path) -> Result<u64, EncoderError> {
        let len = self.fs.metadata(output)?.len();
        debug!("wrote {} bytes to {}", len, output.display());
        Ok(len)
    }
}

impl<FS: FileSystem, CE: CommandExecutor> EncoderBackend for CliEncoder<FS, CE> {
    fn name(&self) -> &'static str {
        "cli"
    }

    fn encode(
        &self,
        input: &Path,
        output: &Path,
        kind: ImageKind,
        quality: u8,
    ) -> Result<u64, EncoderError> {
        match kind {
            ImageKind::Png => {
                // oxipng refuses to overwrite without --force; candidates go
                // to a fresh temp path so this only matters on retry leftovers.
                self.run_tool("oxipng", |cmd| {
                    cmd.arg("--quiet")
                        .arg("-o")
                        .arg("4")
                        .arg("--strip")
                        .arg("safe")
                        .arg("--force")
                        .arg("--out")
                        .arg(output)
                        .arg(input)
                })?;
            }
            ImageKind::Jpeg => {
                let quality_arg = quality.to_string();
                self.run_tool("cjpeg", |cmd| {
                    cmd.arg("-quality")
                        .arg(&quality_arg)
                        .arg("-progressive")
                        .arg("-optimize")
                        .arg("-outfile")
                        .arg(output)
                        .arg(input)
                })?;
            }
        }
        self.written_bytes(output)
    }

    fn encode_webp(&self, input: &Path, output: &Path, quality: u8) -> Result<u64, EncoderError> {
        let quality_arg = quality.to_string();
        self.run_tool("cwebp", |cmd| {
            cmd.arg("-quiet")
                .arg("-q")
                .arg(&quality_arg)
                .arg(input)
                .arg("-o")
                .arg(output)
        })?;
        self.written_bytes(output)
    }
}
