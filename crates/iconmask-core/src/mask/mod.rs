//! Rounded-corner transparency masks.
//!
//! ## Algorithm
//!
//! A single-channel mask the size of the image is rendered with a filled
//! rounded rectangle spanning the whole canvas (255 inside, 0 outside),
//! then written over the image's alpha channel. Only the corners become
//! transparent; colours everywhere are preserved.

pub mod apply;
pub mod rounded;

use thiserror::Error;

use crate::decode::DecodedImage;

pub use apply::apply_alpha_mask;
pub use rounded::{RoundedRectMask, DEFAULT_CORNER_RADIUS};

/// Errors from mask compositing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    /// Mask and image sizes differ
    #[error("Mask is {mask_width}x{mask_height} but image is {image_width}x{image_height}")]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },
}

/// Round the corners of `image` in place.
///
/// The radius is `fraction` of the image width. The mask is rendered at the
/// image's own size, so the two always match.
pub fn round_corners(image: &mut DecodedImage, fraction: f32) -> Result<(), MaskError> {
    let mask =
        RoundedRectMask::from_fraction(image.width, fraction).render(image.width, image.height);
    apply_alpha_mask(image, &mask)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: rendered masks always match the requested size.
        #[test]
        fn prop_mask_matches_image_size(
            (width, height) in (1u32..=96, 1u32..=96),
            fraction in 0.0f32..=0.5,
        ) {
            let mask = RoundedRectMask::from_fraction(width, fraction).render(width, height);
            prop_assert_eq!(mask.dimensions(), (width, height));
        }

        /// Property: the center pixel survives any radius.
        #[test]
        fn prop_center_always_opaque(
            size in 2u32..=96,
            fraction in 0.0f32..=0.5,
        ) {
            let mut image = DecodedImage::filled(size, size, [200, 150, 100, 255]);
            round_corners(&mut image, fraction).unwrap();

            prop_assert_eq!(image.pixel(size / 2, size / 2), [200, 150, 100, 255]);
        }

        /// Property: masking only ever changes the alpha channel.
        #[test]
        fn prop_rgb_preserved(
            size in 1u32..=48,
            fraction in 0.0f32..=0.5,
            rgb in any::<[u8; 3]>(),
        ) {
            let mut image = DecodedImage::filled(size, size, [rgb[0], rgb[1], rgb[2], 255]);
            round_corners(&mut image, fraction).unwrap();

            for p in image.pixels.chunks_exact(4) {
                prop_assert_eq!(&p[..3], &rgb[..]);
            }
        }
    }
}
