//! End-to-end icon building.
//!
//! The pipeline is a straight line: locate the foreground, recenter it,
//! scale and crop to the target size, round the corners. The file-level
//! helpers add PNG reading and writing around it.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::decode::{read_png, DecodeError, DecodedImage};
use crate::encode::{write_png, EncodeError};
use crate::locate::{locate_foreground, BoundingBox};
use crate::mask::{round_corners, MaskError};
use crate::transform::{centering_offset, recenter, scale_and_crop, TransformError};
use crate::IconParams;

/// Errors from building an icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// No pixel was darker than the foreground threshold
    #[error("No foreground found: no pixel is darker than threshold {threshold}")]
    NoForeground { threshold: u8 },

    /// Parameters failed validation
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Mask(#[from] MaskError),
}

/// Summary of a completed icon build.
#[derive(Debug, Clone, PartialEq)]
pub struct IconReport {
    /// Foreground box in the source image
    pub bbox: BoundingBox,
    /// Shift applied to center the foreground
    pub offset: (i64, i64),
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// Build an icon from an already decoded image.
///
/// # Errors
///
/// Returns `IconError::NoForeground` if nothing passes the threshold, and
/// `IconError::InvalidParams` if `params` fail validation.
pub fn build_icon(
    image: &DecodedImage,
    params: &IconParams,
) -> Result<(DecodedImage, IconReport), IconError> {
    params.validate()?;

    let Some(bbox) = locate_foreground(image, params.threshold) else {
        warn!(threshold = params.threshold, "no foreground detected");
        return Err(IconError::NoForeground {
            threshold: params.threshold,
        });
    };
    debug!(?bbox, "located foreground");

    let offset = centering_offset(&bbox, image.width, image.height);
    let centered = recenter(image, offset);

    let mut icon = scale_and_crop(
        &centered,
        params.scale_factor,
        params.target_size,
        params.filter,
    )?;
    round_corners(&mut icon, params.corner_radius)?;

    let report = IconReport {
        bbox,
        offset,
        width: icon.width,
        height: icon.height,
    };
    Ok((icon, report))
}

/// Read `input`, build the icon, and write it to `output`.
///
/// Nothing is written unless every step succeeds.
pub fn build_icon_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    params: &IconParams,
) -> Result<IconReport, IconError> {
    let image = read_png(input.as_ref())?;
    let (icon, report) = build_icon(&image, params)?;
    write_png(&icon, output.as_ref())?;
    info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        "icon built"
    );
    Ok(report)
}

/// Round the corners of a PNG at its own size, without recentering or scaling.
pub fn round_corners_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    fraction: f32,
) -> Result<(), IconError> {
    if !(0.0..=0.5).contains(&fraction) {
        return Err(IconError::InvalidParams(format!(
            "corner radius must be between 0.0 and 0.5, got {}",
            fraction
        )));
    }

    let mut image = read_png(input.as_ref())?;
    round_corners(&mut image, fraction)?;
    write_png(&image, output.as_ref())?;
    Ok(())
}
