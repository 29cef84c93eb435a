//! Time-driven animation service
//!
//! Animations are plain values advanced by the frame tick: an [`Animator`]
//! interpolates between two endpoints over a fixed duration with an easing
//! curve, and the owner applies the interpolated value on every tick.
//! Cancellation is just [`Animator::stop`]. At most one layout animation
//! runs at a time; callers enforce that by checking [`Animator::running`]
//! or stopping the old one before starting a new one.

use std::time::{Duration, Instant};

/// Easing curves used by the layouts and the tagline ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Fast start, slow end (cubic).
    CubicOut,
    /// Fast start, slow end (circular) - used by the carousel swipe.
    CircularOut,
    /// Fast start, very long tail - used by the tagline slide-in.
    ExpoOut,
    /// Slow start, fast end (the exponential curve reversed) - used by
    /// the tagline slide-out.
    ExpoIn,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CircularOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::ExpoIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
        }
    }
}

/// Interpolates a scalar from `start` to `end` over `duration`.
///
/// Driven externally: the owner calls [`Animator::tick`] once per frame
/// with the current time and applies the returned value. The end value is
/// emitted exactly once, after which the animator reports not running.
#[derive(Debug, Clone)]
pub struct Animator {
    start: f64,
    end: f64,
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl Animator {
    pub fn new(start: f64, end: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            easing,
            started_at: None,
        }
    }

    /// Retarget the endpoints. Has no effect on an in-flight animation
    /// until it is restarted.
    pub fn set_range(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = end;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Cancel. A subsequent tick returns nothing.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn end_value(&self) -> f64 {
        self.end
    }

    /// Advance to `now`. Returns the interpolated value while running,
    /// the end value once when the duration elapses, and `None` after.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let started = self.started_at?;
        let elapsed = now.duration_since(started);
        if elapsed >= self.duration {
            self.started_at = None;
            return Some(self.end);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        Some(self.start + (self.end - self.start) * self.easing.apply(t))
    }
}
