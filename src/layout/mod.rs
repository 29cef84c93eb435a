//! Layout engines for the home screen
//!
//! Two interchangeable layouts:
//! - Ellipse carousel (icons orbit an ellipse, drag to rotate)
//! - Paged grid (fixed-capacity pages, snap-to-page scrolling)
//!
//! Layout components are plain data/behavior structs. A rendering frontend
//! reads item positions out of them every frame; nothing here knows about
//! widgets or toolkits.

pub mod carousel;
pub mod ellipse;
pub mod pager;

pub use carousel::{Carousel, CarouselItem};
pub use ellipse::Ellipse;
pub use pager::{IndicatorRow, Page, PagedGrid, ScrollAxis};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A window or cell size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Normalize an angle in degrees into `[0, 360)` by wraparound, not
/// clamping: 370 becomes 10, -10 becomes 350.
pub fn normalize_angle(value: f64) -> f64 {
    let r = value % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range() {
        for v in [-720.5, -360.0, -10.0, 0.0, 90.0, 359.99, 360.0, 370.0, 1234.5] {
            let n = normalize_angle(v);
            assert!((0.0..360.0).contains(&n), "normalize({}) = {}", v, n);
        }
    }

    #[test]
    fn test_normalize_wraparound() {
        assert!((normalize_angle(370.0) - 10.0).abs() < 1e-9);
        assert!((normalize_angle(-10.0) - 350.0).abs() < 1e-9);
        assert_eq!(normalize_angle(360.0), 0.0);
    }

    #[test]
    fn test_normalize_periodic() {
        for v in [-123.4, 0.0, 45.0, 300.0] {
            for k in [-3i32, -1, 1, 5] {
                let shifted = v + 360.0 * k as f64;
                assert!(
                    (normalize_angle(v) - normalize_angle(shifted)).abs() < 1e-9,
                    "normalize({}) != normalize({})",
                    v,
                    shifted
                );
            }
        }
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-9);
    }
}
