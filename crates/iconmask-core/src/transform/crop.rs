//! Pixel-space cropping.
//!
//! Crop rectangles are given in source pixel coordinates and may extend past
//! the source on any side. Whatever falls outside the source is filled with
//! transparent pixels, so the output always has exactly the requested size.
//!
//! # Example
//!
//! ```ignore
//! // Take the middle 1024x1024 of a 1382x1382 image
//! let cropped = center_crop(&image, 1024, 1024);
//! ```

use crate::decode::{DecodedImage, CHANNELS};

/// Crop a `width x height` region whose top-left corner is at (`left`, `top`).
///
/// # Behavior
///
/// - The output is always exactly `width x height`
/// - Parts of the region outside the source are transparent (all zero)
/// - A region that covers the whole source returns a copy of it
pub fn crop_region(
    image: &DecodedImage,
    left: i64,
    top: i64,
    width: u32,
    height: u32,
) -> DecodedImage {
    // Fast path: region is the whole image
    if left == 0 && top == 0 && width == image.width && height == image.height {
        return image.clone();
    }

    let mut output = DecodedImage::transparent(width, height);

    // Overlap of the region with the source, in source coordinates
    let src_x0 = left.max(0);
    let src_y0 = top.max(0);
    let src_x1 = (left + width as i64).min(image.width as i64);
    let src_y1 = (top + height as i64).min(image.height as i64);

    if src_x0 >= src_x1 || src_y0 >= src_y1 {
        return output;
    }

    let row_bytes = (src_x1 - src_x0) as usize * CHANNELS;
    let dst_x = (src_x0 - left) as u32;

    // Copy pixel data row by row
    for src_y in src_y0..src_y1 {
        let dst_y = (src_y - top) as u32;
        let src_start = image.index(src_x0 as u32, src_y as u32);
        let dst_start = output.index(dst_x, dst_y);
        output.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    output
}

/// Margin that centers a `target` span inside a `source` span.
///
/// Uses floor division, so a source smaller than the target yields a
/// negative margin and the crop pads evenly on both sides.
#[inline]
pub fn center_margin(source: u32, target: u32) -> i64 {
    (source as i64 - target as i64).div_euclid(2)
}

/// Crop the centered `width x height` region of an image.
pub fn center_crop(image: &DecodedImage, width: u32, height: u32) -> DecodedImage {
    let left = center_margin(image.width, width);
    let top = center_margin(image.height, height);
    crop_region(image, left, top, width, height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
