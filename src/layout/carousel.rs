//! Ellipse carousel layout
//!
//! Items sit at evenly spaced angles on an ellipse and a horizontal drag
//! rotates all of them in lockstep. A fast swipe nudges the wheel with an
//! ease-out animation that drives the same per-frame recomputation as a
//! live drag.

use std::time::{Duration, Instant};

use crate::anim::{Animator, Easing};
use crate::input::SwipeDirection;

use super::ellipse::Ellipse;
use super::{normalize_angle, Point, Size};

/// Synthetic drag distance applied by one swipe nudge.
const SWIPE_DELTA: f64 = 200.0;
const SWIPE_DURATION: Duration = Duration::from_secs(1);
/// Rotation speed per dragged pixel, scaled by window width so the feel
/// is independent of screen size.
const ANGLE_SPEED_FACTOR: f64 = 0.0002;

/// One icon on the carousel.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    /// Stable insertion order, assigned by the carousel at load time.
    pub index: usize,
    angle: f64,
    /// Screen position on the ellipse, recomputed on every move.
    pub position: Point,
}

impl CarouselItem {
    /// Current angle in degrees, always in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    fn set_angle(&mut self, value: f64) {
        self.angle = normalize_angle(value);
    }
}

/// The carousel: item angles plus the ellipse they move on.
#[derive(Debug)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    /// Angles snapshotted at the start of the current drag or swipe, so
    /// deltas are relative to the gesture start instead of accumulating.
    drag_angles: Vec<f64>,
    ellipse: Ellipse,
    window: Size,
    swipe: Animator,
}

impl Carousel {
    pub fn new(window: Size) -> Self {
        Self {
            items: Vec::new(),
            drag_angles: Vec::new(),
            ellipse: Ellipse::fit(window, 0),
            window,
            swipe: Animator::new(0.0, 0.0, SWIPE_DURATION, Easing::CircularOut),
        }
    }

    /// Place `count` items at evenly spaced angles, offset by the
    /// persisted `base_angle`. A zero count leaves the carousel empty.
    pub fn load(&mut self, count: usize, base_angle: f64) {
        self.items.clear();
        self.drag_angles.clear();
        self.swipe.stop();
        if count == 0 {
            return;
        }

        self.ellipse = Ellipse::fit(self.window, count);
        let separation = 360.0 / count as f64;
        for index in 0..count {
            let mut item = CarouselItem {
                index,
                angle: 0.0,
                position: Point::default(),
            };
            item.set_angle(base_angle + index as f64 * separation);
            self.items.push(item);
        }

        self.snapshot_angles();
        self.move_items(0.0);
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ellipse(&self) -> &Ellipse {
        &self.ellipse
    }

    /// Angle of the reference item, persisted as the next run's base
    /// offset.
    pub fn base_angle(&self) -> Option<f64> {
        self.items.first().map(|item| item.angle)
    }

    /// Begin a drag: stop any swipe animation and re-snapshot angles so
    /// subsequent deltas are measured from here.
    pub fn drag_start(&mut self) {
        self.swipe.stop();
        self.snapshot_angles();
    }

    /// Rotate all items by a horizontal drag distance in pixels, relative
    /// to the drag start.
    pub fn drag(&mut self, delta_px: f64) {
        self.move_items(delta_px);
    }

    /// Nudge the carousel one step. Ignored while a swipe animation is
    /// still running, and for vertical directions.
    pub fn swipe(&mut self, direction: SwipeDirection, now: Instant) {
        if self.swipe.running() {
            return;
        }
        let end = match direction {
            SwipeDirection::Right => -SWIPE_DELTA,
            SwipeDirection::Left => SWIPE_DELTA,
            SwipeDirection::Up | SwipeDirection::Down => return,
        };
        self.snapshot_angles();
        self.swipe.set_range(0.0, end);
        self.swipe.start(now);
    }

    pub fn animating(&self) -> bool {
        self.swipe.running()
    }

    /// Advance the swipe animation. Returns true while items moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.swipe.tick(now) {
            Some(delta) => {
                self.move_items(delta);
                true
            }
            None => false,
        }
    }

    fn snapshot_angles(&mut self) {
        self.drag_angles.clear();
        self.drag_angles.extend(self.items.iter().map(|item| item.angle));
    }

    /// Apply a pixel delta to every item and recompute its position on
    /// the ellipse. Aborts silently when the snapshot is stale (length
    /// mismatch after a concurrent reload).
    fn move_items(&mut self, diff: f64) {
        if self.items.is_empty() || self.items.len() != self.drag_angles.len() {
            return;
        }
        let speed = self.window.w * ANGLE_SPEED_FACTOR;
        let ellipse = self.ellipse;
        for (item, base) in self.items.iter_mut().zip(&self.drag_angles) {
            item.set_angle(base - diff * speed);
            item.position = ellipse.point_at(item.angle);
        }
    }
}
