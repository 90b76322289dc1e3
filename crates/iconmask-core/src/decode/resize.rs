//! Image resizing using the `image` crate's algorithms.
//!
//! Returns new `DecodedImage` instances without modifying the input.
//! Resampling runs on premultiplied alpha, so fully transparent pixels
//! contribute no colour to their neighbours.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// Colour channels are premultiplied by alpha before filtering and divided
/// back out afterwards.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for a zero target dimension and
/// `DecodeError::CorruptedFile` if the source buffer does not match its
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let mut rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;
    premultiply(&mut rgba_image);

    let mut resized =
        image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());
    unpremultiply(&mut resized);

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Scale RGB by alpha in place, rounding to nearest.
fn premultiply(image: &mut image::RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u32;
        for c in &mut pixel.0[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
}

/// Undo `premultiply`. Fully transparent pixels become transparent black.
fn unpremultiply(image: &mut image::RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u32;
        if a == 0 {
            pixel.0 = [0, 0, 0, 0];
            continue;
        }
        for c in &mut pixel.0[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
