//! Geometric transforms: recentering, uniform scaling, and cropping.
//!
//! # Transform Order
//!
//! When building an icon, transforms are applied in this order:
//! 1. Recenter (shift the foreground centroid onto the canvas centroid)
//! 2. Uniform scale (factor > 1)
//! 3. Center crop to the target size
//!
//! # Coordinate System
//!
//! - Offsets and crop origins are in whole pixels and may be negative
//! - Origin is top-left corner
//! - Anything outside the source image reads as transparent

mod crop;
mod recenter;
mod scale;

use thiserror::Error;

use crate::decode::DecodeError;

pub use crop::{center_crop, center_margin, crop_region};
pub use recenter::{centering_offset, recenter};
pub use scale::{scale_and_crop, scale_uniform, scaled_dimensions};

/// Errors from geometric transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Scale factor is zero, negative, or not finite
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f64),

    /// A transform would produce an image with a zero dimension
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Resampling failed
    #[error("Resize failed: {0}")]
    Resize(#[from] DecodeError),
}
