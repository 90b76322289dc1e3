//! Alpha-channel replacement.
//!
//! The mask becomes the image's alpha channel outright. Colour channels are
//! never touched, so a white background inside the silhouette stays white.

use image::GrayImage;

use super::MaskError;
use crate::decode::{DecodedImage, CHANNELS};

/// Replace the alpha channel of `image` with `mask`, in place.
///
/// # Errors
///
/// Returns `MaskError::DimensionMismatch` if the mask and image sizes differ.
///
/// # Example
/// ```
/// use iconmask_core::decode::DecodedImage;
/// use iconmask_core::mask::{apply_alpha_mask, RoundedRectMask};
///
/// let mut icon = DecodedImage::filled(64, 64, [255, 255, 255, 255]);
/// let mask = RoundedRectMask::from_fraction(64, 0.22).render(64, 64);
/// apply_alpha_mask(&mut icon, &mask).unwrap();
/// assert_eq!(icon.pixel(0, 0)[3], 0);
/// ```
pub fn apply_alpha_mask(image: &mut DecodedImage, mask: &GrayImage) -> Result<(), MaskError> {
    let (mask_width, mask_height) = mask.dimensions();
    if mask_width != image.width || mask_height != image.height {
        return Err(MaskError::DimensionMismatch {
            image_width: image.width,
            image_height: image.height,
            mask_width,
            mask_height,
        });
    }

    for (chunk, alpha) in image
        .pixels
        .chunks_exact_mut(CHANNELS)
        .zip(mask.as_raw().iter())
    {
        chunk[3] = *alpha;
    }

    Ok(())
}
