//! Moving the foreground onto the canvas center.

use tracing::debug;

use crate::decode::{DecodedImage, CHANNELS};
use crate::locate::BoundingBox;

/// Offset that moves the box centroid onto the canvas centroid.
///
/// Each component is the real-valued difference truncated toward zero, so
/// a sub-pixel misalignment never causes a shift.
pub fn centering_offset(bbox: &BoundingBox, width: u32, height: u32) -> (i64, i64) {
    let (cx, cy) = bbox.center();
    let dx = width as f64 / 2.0 - cx;
    let dy = height as f64 / 2.0 - cy;
    (dx.trunc() as i64, dy.trunc() as i64)
}

/// Blend `src` over `dst` with weight `a` (0-255), rounding to nearest.
#[inline]
fn blend(src: u8, dst: u8, a: u8) -> u8 {
    let a = a as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Paste `image` onto a transparent canvas of the same size, shifted by `offset`.
///
/// The source alpha acts as the paste mask and is applied to all four
/// channels: `out = src * a + dst * (1 - a)`. Opaque pixels are copied
/// exactly. Content shifted past the canvas edges is dropped.
pub fn recenter(image: &DecodedImage, offset: (i64, i64)) -> DecodedImage {
    let (dx, dy) = offset;
    let mut canvas = DecodedImage::transparent(image.width, image.height);

    let (w, h) = (image.width as i64, image.height as i64);
    let dst_x0 = dx.max(0);
    let dst_x1 = (w + dx).min(w);
    let dst_y0 = dy.max(0);
    let dst_y1 = (h + dy).min(h);

    for y in dst_y0..dst_y1 {
        for x in dst_x0..dst_x1 {
            let src_i = image.index((x - dx) as u32, (y - dy) as u32);
            let dst_i = canvas.index(x as u32, y as u32);
            let alpha = image.pixels[src_i + 3];
            for c in 0..CHANNELS {
                canvas.pixels[dst_i + c] = blend(image.pixels[src_i + c], 0, alpha);
            }
        }
    }

    debug!(dx, dy, "recentered foreground");
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_has_zero_offset() {
        let bbox = BoundingBox::new(40, 40, 60, 60);
        assert_eq!(centering_offset(&bbox, 100, 100), (0, 0));
    }

    #[test]
    fn test_subpixel_offset_truncates_to_zero() {
        // Center (50.5, 49.5) on a 100x100 canvas: (-0.5, 0.5) -> (0, 0)
        let bbox = BoundingBox::new(40, 40, 61, 59);
        assert_eq!(centering_offset(&bbox, 100, 100), (0, 0));
    }

    #[test]
    fn test_offset_direction() {
        // Box in the top-left quadrant must move right and down
        let bbox = BoundingBox::new(10, 20, 30, 40);
        assert_eq!(centering_offset(&bbox, 100, 100), (30, 20));

        // Box in the bottom-right must move left and up
        let bbox = BoundingBox::new(70, 80, 90, 100);
        assert_eq!(centering_offset(&bbox, 100, 100), (-30, -40));
    }

    #[test]
    fn test_negative_offset_truncates_toward_zero() {
        // Center 52.5 on width 100 -> -2.5 -> -2
        let bbox = BoundingBox::new(50, 50, 55, 55);
        assert_eq!(centering_offset(&bbox, 100, 100), (-2, -2));
    }

    #[test]
    fn test_zero_offset_is_identity_for_opaque() {
        let image = DecodedImage::filled(6, 6, [12, 34, 56, 255]);
        assert_eq!(recenter(&image, (0, 0)), image);
    }

    #[test]
    fn test_shift_exposes_transparent_border() {
        let mut image = DecodedImage::filled(4, 4, [255, 255, 255, 255]);
        image.set_pixel(0, 0, [0, 0, 0, 255]);

        let shifted = recenter(&image, (2, 1));

        assert_eq!(shifted.pixel(2, 1), [0, 0, 0, 255]);
        assert_eq!(shifted.pixel(3, 2), [255, 255, 255, 255]);
        assert_eq!(shifted.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(shifted.pixel(1, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_shift_drops_leading_edge() {
        let mut image = DecodedImage::filled(4, 1, [0, 0, 0, 255]);
        image.set_pixel(3, 0, [9, 9, 9, 255]);

        let shifted = recenter(&image, (-3, 0));

        assert_eq!(shifted.pixel(0, 0), [9, 9, 9, 255]);
        assert_eq!(shifted.pixel(1, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_shift_beyond_canvas_is_empty() {
        let image = DecodedImage::filled(4, 4, [1, 2, 3, 255]);
        let shifted = recenter(&image, (10, -10));
        assert!(shifted.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_paste_mask_weights_all_channels() {
        let image = DecodedImage::filled(1, 1, [200, 100, 50, 0]);
        assert_eq!(recenter(&image, (0, 0)).pixel(0, 0), [0, 0, 0, 0]);

        let image = DecodedImage::filled(1, 1, [200, 100, 50, 128]);
        // 200 * 128 / 255 = 100.39, 128 * 128 / 255 = 64.25
        assert_eq!(recenter(&image, (0, 0)).pixel(0, 0), [100, 50, 25, 64]);
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(200, 10, 255), 200);
        assert_eq!(blend(200, 10, 0), 10);
    }
}
