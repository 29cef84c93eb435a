//! Tagline ticker
//!
//! Purely decorative: a strip of text slides in from the right edge, parks
//! mid-screen, slides out to the left (swapping to the next line as it
//! leaves), waits, and loops forever. Lines come from a plain text file,
//! one message per line, blanks skipped; an absent file simply disables
//! the ticker.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::anim::{Animator, Easing};

const SLIDE_DURATION: Duration = Duration::from_secs(3);
const HOLD_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SlideIn,
    HoldIn,
    SlideOut,
    HoldOut,
}

/// The four-phase looping tagline animation.
#[derive(Debug)]
pub struct Ticker {
    lines: Vec<String>,
    index: usize,
    phase: Phase,
    started: bool,
    hold_started: Instant,
    anim: Animator,
    x: f64,
    /// Fully off-screen to the left.
    min_x: f64,
    /// Fully off-screen to the right.
    max_x: f64,
    /// Parked mid-screen.
    half_x: f64,
}

impl Ticker {
    /// Returns `None` when the tagline file is absent or has no usable
    /// lines.
    pub fn from_file(path: &Path, window_w: f64, strip_w: f64) -> Option<Self> {
        let text = std::fs::read_to_string(path).ok()?;
        let lines: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            return None;
        }
        Some(Self::new(lines, window_w, strip_w))
    }

    fn new(lines: Vec<String>, window_w: f64, strip_w: f64) -> Self {
        debug_assert!(!lines.is_empty());
        let min_x = -strip_w;
        let max_x = window_w;
        let half_x = (window_w - strip_w) / 2.0;
        Self {
            lines,
            index: 0,
            phase: Phase::SlideIn,
            started: false,
            hold_started: Instant::now(),
            anim: Animator::new(max_x, half_x, SLIDE_DURATION, Easing::ExpoOut),
            x: max_x,
            min_x,
            max_x,
            half_x,
        }
    }

    /// The line currently shown on the strip.
    pub fn text(&self) -> &str {
        &self.lines[self.index]
    }

    /// Current x position of the strip's left edge.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Advance the four-phase cycle. Returns true when the strip moved
    /// and needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.started {
            self.started = true;
            self.enter(Phase::SlideIn, now);
        }
        match self.phase {
            Phase::SlideIn => {
                if let Some(value) = self.anim.tick(now) {
                    self.x = value;
                    if !self.anim.running() {
                        self.enter(Phase::HoldIn, now);
                    }
                    return true;
                }
                false
            }
            Phase::HoldIn => {
                if now.duration_since(self.hold_started) >= HOLD_DURATION {
                    self.enter(Phase::SlideOut, now);
                }
                false
            }
            Phase::SlideOut => {
                if let Some(value) = self.anim.tick(now) {
                    self.x = value;
                    if !self.anim.running() {
                        // swap to the next line while off-screen
                        self.index = (self.index + 1) % self.lines.len();
                        self.enter(Phase::HoldOut, now);
                    }
                    return true;
                }
                false
            }
            Phase::HoldOut => {
                if now.duration_since(self.hold_started) >= HOLD_DURATION {
                    self.enter(Phase::SlideIn, now);
                }
                false
            }
        }
    }

    fn enter(&mut self, phase: Phase, now: Instant) {
        match phase {
            Phase::SlideIn => {
                self.anim.set_range(self.max_x, self.half_x);
                self.anim.set_easing(Easing::ExpoOut);
                self.anim.start(now);
            }
            Phase::SlideOut => {
                // exit runs the entry curve in reverse
                self.anim.set_range(self.half_x, self.min_x);
                self.anim.set_easing(Easing::ExpoIn);
                self.anim.start(now);
            }
            Phase::HoldIn | Phase::HoldOut => {
                self.hold_started = now;
            }
        }
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker() -> Ticker {
        Ticker::new(
            vec!["first".into(), "second".into()],
            800.0,
            240.0,
        )
    }

    #[test]
    fn test_full_cycle() {
        let t0 = Instant::now();
        let mut t = ticker();
        assert_eq!(t.text(), "first");

        // slide in completes after 3s and parks mid-screen
        t.tick(t0);
        t.tick(t0 + Duration::from_secs(4));
        assert!((t.x() - 280.0).abs() < 1e-9);
        assert_eq!(t.phase, Phase::HoldIn);

        // hold for 2s, then slide out over 3s, swapping text at the end
        t.tick(t0 + Duration::from_secs(7));
        assert_eq!(t.phase, Phase::SlideOut);
        t.tick(t0 + Duration::from_secs(11));
        assert_eq!(t.phase, Phase::HoldOut);
        assert!((t.x() + 240.0).abs() < 1e-9);
        assert_eq!(t.text(), "second");

        // hold again, then the next slide-in begins
        t.tick(t0 + Duration::from_secs(14));
        assert_eq!(t.phase, Phase::SlideIn);
    }

    #[test]
    fn test_slide_out_accelerates() {
        let t0 = Instant::now();
        let mut t = ticker();
        t.tick(t0);
        t.tick(t0 + Duration::from_secs(4)); // parked at 280
        t.tick(t0 + Duration::from_secs(7)); // hold elapsed, slide out begins

        // halfway through the exit the strip has barely left its park
        // position, mirroring the eased entry
        t.tick(t0 + Duration::from_millis(8500));
        assert!(t.x() > 250.0, "x = {}", t.x());
        assert_eq!(t.phase, Phase::SlideOut);
    }

    #[test]
    fn test_lines_wrap_around() {
        let t0 = Instant::now();
        let mut t = ticker();
        // run two full slide-out swaps; index wraps back to the first line
        let mut now = t0;
        for _ in 0..2 {
            t.tick(now); // enter/advance slide in
            now += Duration::from_secs(4);
            t.tick(now); // finish slide in
            now += Duration::from_secs(3);
            t.tick(now); // hold elapsed, enter slide out
            now += Duration::from_secs(4);
            t.tick(now); // finish slide out, swap
            now += Duration::from_secs(3);
            t.tick(now); // hold elapsed, next cycle
        }
        assert_eq!(t.text(), "first");
    }

    #[test]
    fn test_from_file_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taglines.txt");
        std::fs::write(&path, "one\n\n  \ntwo\n").unwrap();
        let t = Ticker::from_file(&path, 800.0, 240.0).unwrap();
        assert_eq!(t.lines.len(), 2);
    }

    #[test]
    fn test_from_file_absent_disables() {
        assert!(Ticker::from_file(Path::new("/nonexistent/taglines.txt"), 800.0, 240.0).is_none());
    }

    #[test]
    fn test_from_file_empty_disables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taglines.txt");
        std::fs::write(&path, "\n\n").unwrap();
        assert!(Ticker::from_file(&path, 800.0, 240.0).is_none());
    }
}
