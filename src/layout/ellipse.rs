//! Ellipse geometry for the carousel

use super::{Point, Size};

/// Minimum circumference per item; keeps icons from overlapping as the
/// item count grows.
const MIN_ITEM_SPACING: f64 = 225.0;

/// Upper bound on growth iterations, so pathological window sizes cannot
/// spin the fit loop forever.
const GROW_STEP_CAP: u32 = 10_000;

/// An axis-aligned ellipse in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub radius_a: f64,
    pub radius_b: f64,
    pub center: Point,
}

impl Ellipse {
    pub fn new(radius_a: f64, radius_b: f64, center: Point) -> Self {
        Self {
            radius_a,
            radius_b,
            center,
        }
    }

    /// Ramanujan's approximation; exact enough for spacing decisions.
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.radius_a, self.radius_b);
        std::f64::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    /// Point on the circumference at `angle` degrees, measured from the
    /// 0-degree reference (positive x axis).
    pub fn point_at(&self, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(
            self.center.x + self.radius_a * rad.cos(),
            self.center.y + self.radius_b * rad.sin(),
        )
    }

    /// Fit an ellipse to the window, growing the radii (1% / 2% per step)
    /// until the perimeter can space `count` items apart. The center sits
    /// at the horizontal midpoint, raised by the final vertical radius so
    /// the lower arc crosses the middle of the screen.
    pub fn fit(window: Size, count: usize) -> Self {
        let mut a = window.w * 1.25 / 2.0;
        let mut b = window.h / 2.0;
        let min_perimeter = MIN_ITEM_SPACING * count as f64;

        let mut steps = 0;
        while count > 0 && steps < GROW_STEP_CAP {
            let candidate = Ellipse::new(a, b, Point::default());
            if candidate.perimeter() >= min_perimeter {
                break;
            }
            a *= 1.01;
            b *= 1.02;
            steps += 1;
        }

        let center = Point::new(window.w / 2.0, window.h / 2.0 - b);
        Ellipse::new(a, b, center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_perimeter() {
        // for a = b the approximation degenerates to an exact circle
        let e = Ellipse::new(10.0, 10.0, Point::default());
        let expected = 2.0 * std::f64::consts::PI * 10.0;
        assert!((e.perimeter() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_reference_angles() {
        let e = Ellipse::new(100.0, 50.0, Point::new(200.0, 200.0));
        let right = e.point_at(0.0);
        assert!((right.x - 300.0).abs() < 1e-9);
        assert!((right.y - 200.0).abs() < 1e-9);
        let bottom = e.point_at(90.0);
        assert!((bottom.x - 200.0).abs() < 1e-9);
        assert!((bottom.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_meets_spacing() {
        for count in [1usize, 6, 24, 60] {
            let e = Ellipse::fit(Size::new(800.0, 480.0), count);
            assert!(
                e.perimeter() >= 225.0 * count as f64,
                "perimeter {} too small for {} items",
                e.perimeter(),
                count
            );
        }
    }

    #[test]
    fn test_fit_zero_items_terminates() {
        let e = Ellipse::fit(Size::new(800.0, 480.0), 0);
        assert!((e.radius_a - 500.0).abs() < 1e-9);
        assert!((e.radius_b - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_center_follows_radius() {
        let window = Size::new(800.0, 480.0);
        let e = Ellipse::fit(window, 12);
        assert!((e.center.x - 400.0).abs() < 1e-9);
        assert!((e.center.y - (240.0 - e.radius_b)).abs() < 1e-9);
    }
}
