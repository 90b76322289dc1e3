//! Rounded-rectangle opacity mask.
//!
//! The rectangle spans the whole canvas; only the four corners are cut
//! away by quarter circles of the given radius. Edges are hard: a pixel is
//! either fully inside (255) or fully outside (0), decided at its center.

use image::{GrayImage, Luma};

/// Corner radius as a fraction of the icon width, matching the usual
/// desktop application icon silhouette.
pub const DEFAULT_CORNER_RADIUS: f32 = 0.22;

/// Rounded-rectangle mask covering the full canvas.
///
/// # Example
/// ```
/// use iconmask_core::mask::RoundedRectMask;
///
/// let mask = RoundedRectMask::from_fraction(100, 0.22);
/// assert!(mask.contains(50, 50, 100, 100));
/// assert!(!mask.contains(0, 0, 100, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectMask {
    /// Corner radius in pixels
    pub radius: f32,
}

impl RoundedRectMask {
    /// Create a mask with a corner radius in pixels. Negative radii become 0.
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Create a mask whose radius is `fraction` of `width`.
    pub fn from_fraction(width: u32, fraction: f32) -> Self {
        Self::new(width as f32 * fraction)
    }

    /// Radius clamped so opposite corners never overlap.
    #[inline]
    fn effective_radius(&self, width: u32, height: u32) -> f32 {
        self.radius.min(width.min(height) as f32 / 2.0)
    }

    /// Check whether the pixel at (x, y) lies inside the rounded rectangle.
    pub fn contains(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        if x >= width || y >= height {
            return false;
        }

        let r = self.effective_radius(width, height);
        let (w, h) = (width as f32, height as f32);
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Nearest corner-circle center; outside the corner zones it is the
        // point itself and the distance is zero
        let cx = px.clamp(r, w - r);
        let cy = py.clamp(r, h - r);
        let (dx, dy) = (px - cx, py - cy);

        dx * dx + dy * dy <= r * r
    }

    /// Render the mask into a single-channel buffer: 255 inside, 0 outside.
    pub fn render(&self, width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            Luma([if self.contains(x, y, width, height) {
                255
            } else {
                0
            }])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_outside() {
        let mask = RoundedRectMask::from_fraction(64, DEFAULT_CORNER_RADIUS);
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert!(!mask.contains(x, y, 64, 64), "Corner ({}, {}) should be cut", x, y);
        }
    }

    #[test]
    fn test_center_and_edge_midpoints_inside() {
        let mask = RoundedRectMask::from_fraction(64, DEFAULT_CORNER_RADIUS);
        for (x, y) in [(32, 32), (32, 0), (0, 32), (63, 32), (32, 63)] {
            assert!(mask.contains(x, y, 64, 64), "({}, {}) should be inside", x, y);
        }
    }

    #[test]
    fn test_zero_radius_is_full_rectangle() {
        let mask = RoundedRectMask::new(0.0);
        let rendered = mask.render(10, 10);
        assert!(rendered.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(RoundedRectMask::new(-5.0).radius, 0.0);
    }

    #[test]
    fn test_oversized_radius_becomes_ellipse_limit() {
        // Radius larger than half the side behaves like a circle
        let mask = RoundedRectMask::new(1000.0);
        assert!(mask.contains(50, 50, 100, 100));
        assert!(!mask.contains(10, 10, 100, 100));
        assert!(mask.contains(50, 0, 100, 100));
    }

    #[test]
    fn test_out_of_bounds_not_contained() {
        let mask = RoundedRectMask::new(2.0);
        assert!(!mask.contains(10, 5, 10, 10));
        assert!(!mask.contains(5, 10, 10, 10));
    }

    #[test]
    fn test_render_dimensions_and_values() {
        let mask = RoundedRectMask::from_fraction(100, DEFAULT_CORNER_RADIUS);
        let rendered = mask.render(100, 80);

        assert_eq!(rendered.dimensions(), (100, 80));
        assert!(rendered.pixels().all(|p| p[0] == 0 || p[0] == 255));
        assert_eq!(rendered.get_pixel(0, 0)[0], 0);
        assert_eq!(rendered.get_pixel(50, 40)[0], 255);
    }

    #[test]
    fn test_render_is_symmetric() {
        let mask = RoundedRectMask::new(10.0);
        let rendered = mask.render(48, 48);

        for y in 0..48 {
            for x in 0..48 {
                let v = rendered.get_pixel(x, y)[0];
                assert_eq!(v, rendered.get_pixel(47 - x, y)[0]);
                assert_eq!(v, rendered.get_pixel(x, 47 - y)[0]);
                assert_eq!(v, rendered.get_pixel(y, x)[0]);
            }
        }
    }

    #[test]
    fn test_cut_area_matches_geometry() {
        // Each corner removes r^2 - pi r^2 / 4 of area
        let size = 200;
        let mask = RoundedRectMask::from_fraction(size, DEFAULT_CORNER_RADIUS);
        let rendered = mask.render(size, size);

        let r = size as f32 * DEFAULT_CORNER_RADIUS;
        let expected_cut = 4.0 * (r * r - std::f32::consts::PI * r * r / 4.0);
        let actual_cut = rendered.pixels().filter(|p| p[0] == 0).count() as f32;

        assert!(
            (actual_cut - expected_cut).abs() / expected_cut < 0.05,
            "cut {} vs expected {}",
            actual_cut,
            expected_cut
        );
    }
}
