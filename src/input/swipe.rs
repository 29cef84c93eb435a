//! Swipe classification
//!
//! A deliberately small state machine: record where and when the pointer
//! went down, then classify the matching pointer-up into one of four
//! directions - or nothing. A gesture must finish within `allowed_time`,
//! travel at least `threshold` pixels along one axis, and stay within
//! `restraint` pixels on the other.

use std::time::{Duration, Instant};

use crate::layout::Point;

/// Direction of a classified swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Tuning for swipe classification.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Required minimum distance traveled on the swipe axis.
    pub threshold: f64,
    /// Maximum distance allowed on the perpendicular axis.
    pub restraint: f64,
    /// Maximum time between pointer-down and pointer-up.
    pub allowed_time: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 150.0,
            restraint: 100.0,
            allowed_time: Duration::from_millis(300),
        }
    }
}

/// Classifies pointer-down/pointer-up pairs into swipes.
///
/// Malformed event order (two downs without an up) simply overwrites the
/// recorded start; that is accepted best-effort behavior, not an error.
#[derive(Debug, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    start: Option<(Point, Instant)>,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    pub fn pointer_down(&mut self, pos: Point, time: Instant) {
        self.start = Some((pos, time));
    }

    /// Consume the recorded start and classify. Emits at most one
    /// direction per down/up pair; the horizontal axis is checked first.
    pub fn pointer_up(&mut self, pos: Point, time: Instant) -> Option<SwipeDirection> {
        let (start, started_at) = self.start.take()?;
        if time.duration_since(started_at) > self.config.allowed_time {
            return None;
        }

        let dx = start.x - pos.x;
        let dy = start.y - pos.y;

        if dx.abs() >= self.config.threshold && dy.abs() <= self.config.restraint {
            Some(if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else if dy.abs() >= self.config.threshold && dx.abs() <= self.config.restraint {
            Some(if dy < 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(dx: f64, dy: f64, elapsed_ms: u64) -> Option<SwipeDirection> {
        let mut detector = SwipeDetector::default();
        let t0 = Instant::now();
        // dist = start - end, so place the start at (dx, dy) and end at origin
        detector.pointer_down(Point::new(dx, dy), t0);
        detector.pointer_up(Point::new(0.0, 0.0), t0 + Duration::from_millis(elapsed_ms))
    }

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(classify(200.0, 0.0, 100), Some(SwipeDirection::Right));
        assert_eq!(classify(-200.0, 0.0, 100), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify(0.0, -200.0, 100), Some(SwipeDirection::Up));
        assert_eq!(classify(0.0, 200.0, 100), Some(SwipeDirection::Down));
    }

    #[test]
    fn test_diagonal_within_restraint() {
        // x exceeds the threshold, y stays within the restraint
        assert_eq!(classify(160.0, 30.0, 100), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_diagonal_outside_restraint() {
        // both axes exceed the restraint of the other, neither qualifies
        assert_eq!(classify(160.0, 120.0, 100), None);
    }

    #[test]
    fn test_too_slow() {
        assert_eq!(classify(160.0, 30.0, 400), None);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(classify(100.0, 0.0, 100), None);
    }

    #[test]
    fn test_up_without_down() {
        let mut detector = SwipeDetector::default();
        assert_eq!(
            detector.pointer_up(Point::new(0.0, 0.0), Instant::now()),
            None
        );
    }

    #[test]
    fn test_second_down_overwrites_first() {
        let mut detector = SwipeDetector::default();
        let t0 = Instant::now();
        detector.pointer_down(Point::new(500.0, 0.0), t0);
        detector.pointer_down(Point::new(200.0, 0.0), t0 + Duration::from_millis(50));
        let dir = detector.pointer_up(Point::new(0.0, 0.0), t0 + Duration::from_millis(150));
        assert_eq!(dir, Some(SwipeDirection::Right));
    }
}
