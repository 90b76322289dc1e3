//! Grayscale conversion using ITU-R BT.601 luma weights.
//!
//! This is the integer "RGB to L" conversion most image libraries apply, so
//! thresholds tuned against other tools carry over unchanged. Alpha is
//! ignored: a transparent pixel is judged by its colour channels alone.

use image::GrayImage;

use crate::decode::DecodedImage;

/// BT.601 weight for the red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// BT.601 weight for the green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// BT.601 weight for the blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Calculate luma from u8 RGB values (0 to 255).
///
/// The result is truncated, not rounded.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B) / 1000) as u8
}

/// Convert an RGBA image to a single-channel grayscale image.
pub fn to_grayscale(image: &DecodedImage) -> GrayImage {
    let raw: Vec<u8> = image
        .pixels
        .chunks_exact(4)
        .map(|p| luma_u8(p[0], p[1], p[2]))
        .collect();
    GrayImage::from_raw(image.width, image.height, raw)
        .unwrap_or_else(|| GrayImage::new(image.width, image.height))
}
