//! PNG encoding for the finished icon.
//!
//! Encoding always happens fully in memory. Writing to disk is a separate
//! step, so an encoder failure never leaves a partial file behind.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;
use tracing::info;

use crate::decode::{DecodedImage, CHANNELS};

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Example
///
/// ```
/// use iconmask_core::encode::encode_png;
///
/// let pixels = vec![255u8; 16 * 16 * 4];
/// let png = encode_png(&pixels, 16, 16).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode an image and write it to `path` as PNG.
pub fn write_png(image: &DecodedImage, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_png(&image.pixels, image.width, image.height)?;
    std::fs::write(path, &bytes)
        .map_err(|e| EncodeError::Io(format!("{}: {}", path.display(), e)))?;
    info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        bytes = bytes.len(),
        "wrote PNG"
    );
    Ok(())
}
