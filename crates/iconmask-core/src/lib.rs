//! iconmask core - application icon post-processing library
//!
//! This crate turns a pre-rendered square icon (a subject on a light
//! background) into a platform-style application icon: it locates the
//! subject, recenters it, scales and crops to a fixed size, and rounds the
//! corners with a transparency mask.

pub mod decode;
pub mod encode;
pub mod locate;
pub mod luminance;
pub mod mask;
pub mod pipeline;
pub mod transform;

pub use decode::{DecodedImage, FilterType};
pub use locate::{locate_foreground, BoundingBox, DEFAULT_THRESHOLD};
pub use mask::{round_corners, RoundedRectMask, DEFAULT_CORNER_RADIUS};
pub use pipeline::{build_icon, build_icon_file, round_corners_file, IconError, IconReport};
pub use transform::{centering_offset, recenter, scale_and_crop};

/// Default scale factor applied after recentering
pub const DEFAULT_SCALE_FACTOR: f64 = 1.35;

/// Default output edge length in pixels
pub const DEFAULT_TARGET_SIZE: u32 = 1024;

/// Largest accepted scale factor
pub const MAX_SCALE_FACTOR: f64 = 8.0;

/// Largest accepted output edge length in pixels
pub const MAX_TARGET_SIZE: u32 = 8192;

/// Parameters for building an icon
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IconParams {
    /// Luma cutoff; darker pixels are foreground (0 to 255)
    pub threshold: u8,
    /// Uniform upscale factor applied before cropping (> 0, normally > 1)
    pub scale_factor: f64,
    /// Output width and height in pixels
    pub target_size: u32,
    /// Corner radius as a fraction of the output width (0.0 to 0.5)
    pub corner_radius: f32,
    /// Resampling filter used for scaling
    pub filter: FilterType,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scale_factor: DEFAULT_SCALE_FACTOR,
            target_size: DEFAULT_TARGET_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            filter: FilterType::Lanczos3,
        }
    }
}

impl IconParams {
    /// Create a new IconParams with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<(), IconError> {
        if !self.scale_factor.is_finite()
            || self.scale_factor <= 0.0
            || self.scale_factor > MAX_SCALE_FACTOR
        {
            return Err(IconError::InvalidParams(format!(
                "scale factor must be in (0, {}], got {}",
                MAX_SCALE_FACTOR, self.scale_factor
            )));
        }
        if self.target_size == 0 || self.target_size > MAX_TARGET_SIZE {
            return Err(IconError::InvalidParams(format!(
                "target size must be between 1 and {}, got {}",
                MAX_TARGET_SIZE, self.target_size
            )));
        }
        if !(0.0..=0.5).contains(&self.corner_radius) {
            return Err(IconError::InvalidParams(format!(
                "corner radius must be between 0.0 and 0.5, got {}",
                self.corner_radius
            )));
        }
        Ok(())
    }
}
