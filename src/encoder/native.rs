//! In-process encoder backend
//!
//! Pure-Rust counterpart of the subprocess backend, built on the `image`
//! crate: PNG at best compression with adaptive filtering, JPEG at the
//! configured quality, WebP siblings via the crate's lossless encoder. No
//! system libraries required, so this is the default backend.
//!
//! The `image` crate's WebP encoder is lossless-only; the quality knob is
//! honored by the subprocess backend's `cwebp` instead.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageError};
use log::debug;

use super::{EncoderBackend, EncoderError, ImageKind};

/// Encoder backend that encodes in-process with the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEncoder;

impl NativeEncoder {
    /// Create a native encoder
    pub fn new() -> Self {
        Self
    }

    fn open(input: &Path) -> Result<DynamicImage, EncoderError> {
        image::open(input).map_err(codec_error)
    }

    fn written_bytes(output: &Path) -> Result<u64, EncoderError> {
        let len = std::fs::metadata(output)?.len();
        debug!("wrote {} bytes to {}", len, output.display());
        Ok(len)
    }
}

fn codec_error(err: ImageError) -> EncoderError {
    match err {
        ImageError::IoError(io) => EncoderError::Io(io),
        other => EncoderError::Codec(other.to_string()),
    }
}

impl EncoderBackend for NativeEncoder {
    fn name(&self) -> &'static str {
        "native"
    }

    fn encode(
        &self,
        input: &Path,
        output: &Path,
        kind: ImageKind,
        quality: u8,
    ) -> Result<u64, EncoderError> {
        let img = Self::open(input)?;
        let writer = BufWriter::new(File::create(output)?);

        match kind {
            ImageKind::Png => {
                let encoder =
                    PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
                img.write_with_encoder(encoder).map_err(codec_error)?;
            }
            ImageKind::Jpeg => {
                // JPEG has no alpha channel; flatten before encoding.
                let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
                let encoder = JpegEncoder::new_with_quality(writer, quality);
                rgb.write_with_encoder(encoder).map_err(codec_error)?;
            }
        }

        Self::written_bytes(output)
    }

    fn encode_webp(&self, input: &Path, output: &Path, _quality: u8) -> Result<u64, EncoderError> {
        let img = Self::open(input)?;
        let writer = BufWriter::new(File::create(output)?);

        // Lossless WebP supports RGB8/RGBA8 sample layouts only.
        let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
        let encoder = WebPEncoder::new_lossless(writer);
        rgba.write_with_encoder(encoder).map_err(codec_error)?;

        Self::written_bytes(output)
    }
}
