//! Foreground detection by brightness thresholding.
//!
//! Icons are rendered as a subject on a light (usually white) background.
//! Any pixel whose luma is strictly below the threshold counts as
//! foreground, and the bounding box of those pixels locates the subject.

use image::{GrayImage, Luma};

use crate::decode::DecodedImage;
use crate::luminance::to_grayscale;

/// Default luma cutoff. Pixels darker than this are foreground.
pub const DEFAULT_THRESHOLD: u8 = 245;

/// Axis-aligned box enclosing the detected foreground.
///
/// `right` and `bottom` are exclusive, so `right - left` is the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Centroid of the box in pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left as f64 + self.right as f64) / 2.0,
            (self.top as f64 + self.bottom as f64) / 2.0,
        )
    }
}

/// Build a binary mask: 255 where the pixel is foreground, 0 elsewhere.
pub fn foreground_mask(image: &DecodedImage, threshold: u8) -> GrayImage {
    let mut mask = to_grayscale(image);
    for Luma([v]) in mask.pixels_mut() {
        *v = if *v < threshold { 255 } else { 0 };
    }
    mask
}

/// Locate the foreground bounding box.
///
/// The box encloses every nonzero pixel of [`foreground_mask`]. Returns `None` when no pixel is darker than `threshold`, including for
/// empty images.
///
/// # Example
///
/// ```
/// use iconmask_core::decode::DecodedImage;
/// use iconmask_core::locate::{locate_foreground, BoundingBox};
///
/// let mut image = DecodedImage::filled(10, 10, [255, 255, 255, 255]);
/// image.set_pixel(3, 4, [0, 0, 0, 255]);
///
/// assert_eq!(locate_foreground(&image, 245), Some(BoundingBox::new(3, 4, 4, 5)));
/// ```
pub fn locate_foreground(image: &DecodedImage, threshold: u8) -> Option<BoundingBox> {
    mask_bounds(&foreground_mask(image, threshold))
}

/// Smallest box containing every nonzero pixel of `mask`.
fn mask_bounds(mask: &GrayImage) -> Option<BoundingBox> {
    mask.enumerate_pixels()
        .filter(|(_, _, p)| p[0] != 0)
        .fold(None, |bbox, (x, y, _)| {
            Some(match bbox {
                None => BoundingBox::new(x, y, x + 1, y + 1),
                Some(b) => BoundingBox::new(
                    b.left.min(x),
                    b.top.min(y),
                    b.right.max(x + 1),
                    b.bottom.max(y + 1),
                ),
            })
        })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
