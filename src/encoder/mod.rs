//! Encoder backends for image recompression
//!
//! The optimizer never encodes pixels itself; it dispatches to an
//! [`EncoderBackend`] that produces a recompressed candidate at a caller-chosen
//! output path. Two implementations exist:
//!
//! - [`CliEncoder`] — subprocess invocations of `oxipng`, `cjpeg` and `cwebp`
//! - [`NativeEncoder`] — in-process encoding with the `image` crate
//!
//! Swapping backends must not change the replace-if-smaller policy or the
//! reporting format; those live in the optimizer, not here.

pub mod cli;
pub mod native;

pub use cli::CliEncoder;
pub use native::NativeEncoder;

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while producing an encoded candidate
#[derive(Error, Debug)]
pub enum EncoderError {
    /// I/O error reading the input or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Subprocess encoder exited with a failure status
    #[error("{tool} failed: {stderr}")]
    ToolFailed {
        /// Binary that failed
        tool: &'static str,
        /// Captured stderr (may be empty)
        stderr: String,
    },

    /// In-process decode or encode failed
    #[error("image codec error: {0}")]
    Codec(String),
}

/// Input formats the optimizer recompresses
///
/// Anything else is a no-op for the batch (the file is still counted in
/// totals when located, but never rewritten).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// PNG input, recompressed losslessly
    Png,
    /// JPEG input, recompressed at the configured quality
    Jpeg,
}

impl ImageKind {
    /// Classify a path by its extension (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use img_slim::encoder::ImageKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(ImageKind::from_path(Path::new("hero.png")), Some(ImageKind::Png));
    /// assert_eq!(ImageKind::from_path(Path::new("photo.JPG")), Some(ImageKind::Jpeg));
    /// assert_eq!(ImageKind::from_path(Path::new("logo.svg")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<ImageKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            _ => None,
        }
    }
}

/// Capability set every encoder backend provides
///
/// Both operations write a *new* file at `output` and return the number of
/// bytes written. They never touch the input: the decision to replace the
/// original belongs to the optimizer's replace-if-smaller policy.
pub trait EncoderBackend {
    /// Backend name for logs and reports
    fn name(&self) -> &'static str;

    /// Recompress `input` in its own format, writing the candidate to `output`
    ///
    /// `quality` applies to lossy formats (JPEG); PNG recompression is
    /// lossless and ignores it.
    fn encode(
        &self,
        input: &Path,
        output: &Path,
        kind: ImageKind,
        quality: u8,
    ) -> Result<u64, EncoderError>;

    /// Encode a WebP sibling of `input` at `output`
    fn encode_webp(&self, input: &Path, output: &Path, quality: u8) -> Result<u64, EncoderError>;
}
