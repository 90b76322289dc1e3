//! Uniform upscaling followed by a centered crop.
//!
//! Scaling by a factor above 1 pushes the original canvas edges (and any
//! transparent border left by recentering) outside the final crop.

use tracing::debug;

use super::crop::center_crop;
use super::TransformError;
use crate::decode::{resize, DecodedImage, FilterType};

/// Dimensions after scaling by `factor`, truncated to whole pixels.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    (
        (width as f64 * factor).floor() as u32,
        (height as f64 * factor).floor() as u32,
    )
}

/// Scale both axes by the same factor.
///
/// # Errors
///
/// Returns `TransformError::InvalidScale` if `factor` is not a positive
/// finite number, and `TransformError::InvalidDimensions` if the scaled
/// image would have a zero dimension.
pub fn scale_uniform(
    image: &DecodedImage,
    factor: f64,
    filter: FilterType,
) -> Result<DecodedImage, TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScale(factor));
    }

    let (width, height) = scaled_dimensions(image.width, image.height, factor);
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    debug!(
        from_width = image.width,
        from_height = image.height,
        width,
        height,
        factor,
        "scaling image"
    );
    Ok(resize(image, width, height, filter)?)
}

/// Scale uniformly, then crop the centered `target_size` square.
///
/// The result is always exactly `target_size x target_size`, whatever the
/// input size. If the scaled image is smaller than the target on some axis,
/// the missing area is transparent.
///
/// # Example
///
/// ```
/// use iconmask_core::decode::{DecodedImage, FilterType};
/// use iconmask_core::transform::scale_and_crop;
///
/// let image = DecodedImage::filled(300, 200, [255, 255, 255, 255]);
/// let icon = scale_and_crop(&image, 1.35, 256, FilterType::Bilinear).unwrap();
/// assert_eq!((icon.width, icon.height), (256, 256));
/// ```
pub fn scale_and_crop(
    image: &DecodedImage,
    factor: f64,
    target_size: u32,
    filter: FilterType,
) -> Result<DecodedImage, TransformError> {
    if target_size == 0 {
        return Err(TransformError::InvalidDimensions {
            width: target_size,
            height: target_size,
        });
    }

    let scaled = scale_uniform(image, factor, filter)?;
    Ok(center_crop(&scaled, target_size, target_size))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
