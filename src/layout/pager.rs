//! Paged grid layout with animated paging and snap-to-page
//!
//! Items fill fixed-capacity pages in insertion order; the pager scrolls
//! along one axis with an ease-out animation whose duration is
//! proportional to the distance traveled, and snaps to the nearest whole
//! page when a drag ends. Paging past either end clamps.

use std::time::{Duration, Instant};

use crate::anim::{Animator, Easing};

use super::{Point, Size};

/// Animation travel speed for page transitions.
const DEFAULT_PIXELS_PER_MS: f64 = 2.0;

/// Which axis the pager scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    /// Pages side by side (landscape).
    Horizontal,
    /// Pages stacked (portrait).
    Vertical,
}

/// A fixed-capacity bucket of item indices.
#[derive(Debug, Clone)]
pub struct Page {
    items: Vec<usize>,
    capacity: usize,
}

impl Page {
    fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn occupied(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// Radio-style page indicator row: one indicator per page, exactly one
/// checked at a time.
#[derive(Debug, Clone, Default)]
pub struct IndicatorRow {
    count: usize,
    checked: usize,
}

impl IndicatorRow {
    fn push(&mut self) {
        self.count += 1;
    }

    fn check(&mut self, index: usize) {
        if index < self.count {
            self.checked = index;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The checked indicator, or `None` when there are no pages yet.
    pub fn checked(&self) -> Option<usize> {
        (self.count > 0).then_some(self.checked)
    }
}

/// The paged grid: ordered pages plus the current scroll offset.
///
/// The offset is pixel-valued and non-positive; page `i` is fully visible
/// at offset `-i * page_length`.
#[derive(Debug)]
pub struct PagedGrid {
    pages: Vec<Page>,
    rows: usize,
    cols: usize,
    window: Size,
    axis: ScrollAxis,
    pixels_per_ms: f64,
    offset: f64,
    drag_origin: Option<f64>,
    anim: Animator,
    indicators: IndicatorRow,
}

impl PagedGrid {
    pub fn new(rows: usize, cols: usize, window: Size, axis: ScrollAxis) -> Self {
        Self {
            pages: Vec::new(),
            rows: rows.max(1),
            cols: cols.max(1),
            window,
            axis,
            pixels_per_ms: DEFAULT_PIXELS_PER_MS,
            offset: 0.0,
            drag_origin: None,
            anim: Animator::new(0.0, 0.0, Duration::ZERO, Easing::CubicOut),
            indicators: IndicatorRow::default(),
        }
    }

    pub fn set_pixels_per_ms(&mut self, value: f64) {
        self.pixels_per_ms = value.max(f64::MIN_POSITIVE);
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Pixel extent of one page along the scroll axis.
    pub fn page_length(&self) -> f64 {
        match self.axis {
            ScrollAxis::Horizontal => self.window.w,
            ScrollAxis::Vertical => self.window.h,
        }
    }

    fn page_capacity(&self) -> usize {
        self.rows * self.cols
    }

    fn max_page(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    /// Append an item to the first page with spare capacity; a new page
    /// (and its indicator) is created only when every page is full.
    pub fn add_item(&mut self, item: usize) {
        if let Some(page) = self.pages.iter_mut().find(|p| !p.is_full()) {
            page.items.push(item);
            return;
        }
        let mut page = Page::new(self.page_capacity());
        page.items.push(item);
        self.pages.push(page);
        self.indicators.push();
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn indicators(&self) -> &IndicatorRow {
        &self.indicators
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn current_page(&self) -> usize {
        (self.offset.abs() / self.page_length()).floor() as usize
    }

    pub fn animating(&self) -> bool {
        self.anim.running()
    }

    /// Jump to a page instantly (clamped into range), stopping any running
    /// animation. Returns the settled page.
    pub fn go_to_page(&mut self, index: usize) -> usize {
        self.anim.stop();
        let index = index.min(self.max_page());
        self.offset = -(index as f64) * self.page_length();
        self.indicators.check(index);
        index
    }

    /// Animate forward one page; clamps at the last page.
    pub fn next_page(&mut self, now: Instant) {
        let target = ((self.offset.abs() / self.page_length()).floor() as usize + 1)
            .min(self.max_page());
        self.animate_to(target, now);
    }

    /// Animate back one page; clamps at the first page.
    pub fn prev_page(&mut self, now: Instant) {
        let target = ((self.offset.abs() / self.page_length()).ceil() as usize).saturating_sub(1);
        self.animate_to(target, now);
    }

    /// Begin a drag: preempt any running animation and remember where the
    /// offset started.
    pub fn drag_start(&mut self) {
        self.anim.stop();
        self.drag_origin = Some(self.offset);
    }

    /// Scroll by a drag distance relative to the drag start, clamped to
    /// the content bounds.
    pub fn drag(&mut self, delta_px: f64) {
        let Some(origin) = self.drag_origin else {
            return;
        };
        let min = -(self.max_page() as f64) * self.page_length();
        self.offset = (origin + delta_px).clamp(min, 0.0);
    }

    /// End a drag: snap to the nearest whole page unless an animation is
    /// already running.
    pub fn drag_stop(&mut self, now: Instant) {
        self.drag_origin = None;
        if self.anim.running() {
            return;
        }
        let nearest = ((self.offset.abs() / self.page_length()).round() as usize)
            .min(self.max_page());
        self.animate_to(nearest, now);
    }

    /// Advance the paging animation; returns the settled page when a
    /// transition completes this tick.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let value = self.anim.tick(now)?;
        self.offset = value;
        if self.anim.running() {
            return None;
        }
        let page = self.current_page();
        self.indicators.check(page);
        Some(page)
    }

    fn animate_to(&mut self, target: usize, now: Instant) {
        self.anim.stop();
        let end = -(target as f64) * self.page_length();
        let distance = (end - self.offset).abs();
        if distance < f64::EPSILON {
            self.offset = end;
            self.indicators.check(target);
            return;
        }
        let duration = Duration::from_secs_f64(distance / self.pixels_per_ms / 1000.0);
        self.anim = Animator::new(self.offset, end, duration, Easing::CubicOut);
        self.anim.start(now);
    }

    /// The item under `pos`, if any, accounting for the current scroll
    /// offset.
    pub fn item_at(&self, pos: Point) -> Option<usize> {
        if self.pages.is_empty() {
            return None;
        }
        let length = self.page_length();
        let along = match self.axis {
            ScrollAxis::Horizontal => pos.x,
            ScrollAxis::Vertical => pos.y,
        } + self.offset.abs();
        if along < 0.0 {
            return None;
        }
        let page = (along / length).floor() as usize;
        let local = along - page as f64 * length;

        let cell_w = self.window.w / self.cols as f64;
        let cell_h = self.window.h / self.rows as f64;
        let (row, col) = match self.axis {
            ScrollAxis::Horizontal => ((pos.y / cell_h) as usize, (local / cell_w) as usize),
            ScrollAxis::Vertical => ((local / cell_h) as usize, (pos.x / cell_w) as usize),
        };
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let slot = row * self.cols + col;
        self.pages.get(page)?.items.get(slot).copied()
    }

    /// Screen-space center of an item's cell, or `None` when the item is
    /// not in the grid.
    pub fn position_of(&self, item: usize) -> Option<Point> {
        let (page, slot) = self.pages.iter().enumerate().find_map(|(p, pg)| {
            pg.items.iter().position(|&i| i == item).map(|s| (p, s))
        })?;
        let row = slot / self.cols;
        let col = slot % self.cols;
        let cell_w = self.window.w / self.cols as f64;
        let cell_h = self.window.h / self.rows as f64;
        let page_shift = page as f64 * self.page_length() + self.offset;
        Some(match self.axis {
            ScrollAxis::Horizontal => Point::new(
                page_shift + (col as f64 + 0.5) * cell_w,
                (row as f64 + 0.5) * cell_h,
            ),
            ScrollAxis::Vertical => Point::new(
                (col as f64 + 0.5) * cell_w,
                page_shift + (row as f64 + 0.5) * cell_h,
            ),
        })
    }
}
