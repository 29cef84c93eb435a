//! Input handling - pointer events and swipe classification
//!
//! A frontend (compositor, toolkit shim, test harness) injects
//! [`PointerEvent`]s; the controller turns them into layout motion, paging,
//! or taps. Handlers report whether they consumed an event through
//! [`EventResponse`] rather than mutating shared event objects.

mod swipe;

pub use swipe::{SwipeConfig, SwipeDetector, SwipeDirection};

use std::time::Instant;

use crate::layout::Point;

/// Pointer events injected by a frontend.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down { pos: Point, time: Instant },
    /// Continuous drag motion; `start` is the position of the initiating
    /// down event.
    Drag { pos: Point, start: Point },
    Up { pos: Point, time: Instant },
}

/// Outcome of offering an event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The event was consumed and must not propagate further.
    Handled,
    /// The handler had no use for the event.
    Ignored,
}
