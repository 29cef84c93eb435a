//! Launcher controller
//!
//! Owns the feed entries, the active layout, the swipe detector, and the
//! tagline ticker, and turns injected pointer events into layout motion,
//! paging, or an app launch. Handlers report Handled/Ignored instead of
//! mutating shared event state; a tap schedules a launch which the runtime
//! picks up after stopping the loop.

use std::time::Instant;

use crate::config::{LauncherConfig, LayoutMode};
use crate::feed::FeedEntry;
use crate::input::{EventResponse, PointerEvent, SwipeDetector, SwipeDirection};
use crate::layout::{Carousel, PagedGrid, Point, ScrollAxis, Size};
use crate::persist::CursorStore;
use crate::ticker::Ticker;

/// Maximum pointer travel between down and up for a tap.
const TAP_SLOP: f64 = 20.0;
/// Hit radius around a carousel item's center.
const ITEM_HIT_RADIUS: f64 = 64.0;
/// Tagline strip width as a fraction of the window width.
const TICKER_STRIP_FRACTION: f64 = 0.3;

/// The active home-screen layout.
#[derive(Debug)]
pub enum Layout {
    Carousel(Carousel),
    Grid(PagedGrid),
}

pub struct Controller {
    entries: Vec<FeedEntry>,
    layout: Layout,
    swipe: SwipeDetector,
    cursor: CursorStore,
    ticker: Option<Ticker>,
    down_pos: Option<Point>,
    dragging: bool,
    pending_launch: Option<String>,
}

impl Controller {
    pub fn new(config: &LauncherConfig, entries: Vec<FeedEntry>) -> Self {
        let window = Size::new(config.window.width, config.window.height);
        let cursor = CursorStore::new(config.cursor_path.clone());

        let layout = match config.layout {
            LayoutMode::Carousel => {
                let mut carousel = Carousel::new(window);
                carousel.load(entries.len(), cursor.load_angle());
                Layout::Carousel(carousel)
            }
            LayoutMode::Grid => {
                let mut grid =
                    PagedGrid::new(config.grid.rows, config.grid.cols, window, config.grid.axis());
                grid.set_pixels_per_ms(config.grid.pixels_per_ms);
                for index in 0..entries.len() {
                    grid.add_item(index);
                }
                grid.go_to_page(cursor.load_page());
                Layout::Grid(grid)
            }
        };

        let ticker = Ticker::from_file(
            &config.taglines_path,
            window.w,
            window.w * TICKER_STRIP_FRACTION,
        );
        if ticker.is_none() {
            tracing::debug!(path = %config.taglines_path.display(), "tagline ticker disabled");
        }

        Self {
            entries,
            layout,
            swipe: SwipeDetector::new((&config.gesture).into()),
            cursor,
            ticker,
            down_pos: None,
            dragging: false,
            pending_launch: None,
        }
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    /// Current screen positions of all items, for the rendering frontend.
    pub fn item_positions(&self) -> Vec<(usize, Point)> {
        match &self.layout {
            Layout::Carousel(c) => c
                .items()
                .iter()
                .map(|item| (item.index, item.position))
                .collect(),
            Layout::Grid(g) => (0..self.entries.len())
                .filter_map(|index| g.position_of(index).map(|pos| (index, pos)))
                .collect(),
        }
    }

    pub fn launch_pending(&self) -> bool {
        self.pending_launch.is_some()
    }

    /// The exec command scheduled by a tap, if any. The cursor has already
    /// been persisted by the time this returns something.
    pub fn take_pending_launch(&mut self) -> Option<String> {
        self.pending_launch.take()
    }

    /// Route one pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> EventResponse {
        match event {
            PointerEvent::Down { pos, time } => {
                self.swipe.pointer_down(pos, time);
                self.down_pos = Some(pos);
                self.dragging = false;
                EventResponse::Ignored
            }
            PointerEvent::Drag { pos, start } => {
                if !self.dragging {
                    self.dragging = true;
                    match &mut self.layout {
                        Layout::Carousel(c) => c.drag_start(),
                        Layout::Grid(g) => g.drag_start(),
                    }
                }
                match &mut self.layout {
                    Layout::Carousel(c) => c.drag(pos.x - start.x),
                    Layout::Grid(g) => {
                        let delta = match g.axis() {
                            ScrollAxis::Horizontal => pos.x - start.x,
                            ScrollAxis::Vertical => pos.y - start.y,
                        };
                        g.drag(delta);
                    }
                }
                EventResponse::Handled
            }
            PointerEvent::Up { pos, time } => {
                let direction = self.swipe.pointer_up(pos, time);
                let was_drag = self.dragging;
                self.dragging = false;

                if was_drag {
                    if let Layout::Grid(g) = &mut self.layout {
                        g.drag_stop(now);
                    }
                }

                if let Some(direction) = direction {
                    self.on_swipe(direction, now);
                    return EventResponse::Handled;
                }

                if !was_drag && self.is_tap(pos) {
                    return self.tap(pos);
                }
                EventResponse::Ignored
            }
        }
    }

    fn is_tap(&self, up_pos: Point) -> bool {
        self.down_pos
            .map(|down| down.distance(up_pos) <= TAP_SLOP)
            .unwrap_or(false)
    }

    /// Dispatch a swipe to the active layout. Direction names follow
    /// `dist = start - end`: a finger flicked leftwards classifies as
    /// `Right` and advances the content.
    fn on_swipe(&mut self, direction: SwipeDirection, now: Instant) {
        match &mut self.layout {
            Layout::Carousel(c) => c.swipe(direction, now),
            Layout::Grid(g) => match direction {
                SwipeDirection::Right | SwipeDirection::Down => g.next_page(now),
                SwipeDirection::Left | SwipeDirection::Up => g.prev_page(now),
            },
        }
    }

    /// Hit-test a tap and schedule the launch of the entry under it.
    fn tap(&mut self, pos: Point) -> EventResponse {
        let hit = match &self.layout {
            Layout::Carousel(c) => c
                .items()
                .iter()
                .find(|item| item.position.distance(pos) <= ITEM_HIT_RADIUS)
                .map(|item| item.index),
            Layout::Grid(g) => g.item_at(pos),
        };

        let Some(index) = hit else {
            return EventResponse::Ignored;
        };
        let Some(entry) = self.entries.get(index) else {
            return EventResponse::Ignored;
        };

        tracing::info!(title = %entry.title, "tapped");
        self.save_cursor();
        self.pending_launch = Some(entry.exec.clone());
        EventResponse::Handled
    }

    /// Persist the cursor; called just before handing off to the launched
    /// program.
    fn save_cursor(&self) {
        match &self.layout {
            Layout::Carousel(c) => {
                if let Some(angle) = c.base_angle() {
                    self.cursor.save_angle(angle);
                }
            }
            Layout::Grid(g) => self.cursor.save_page(g.current_page()),
        }
    }

    /// Step animations. Returns true when anything moved and the frontend
    /// should redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let moved = match &mut self.layout {
            Layout::Carousel(c) => c.tick(now),
            Layout::Grid(g) => {
                if let Some(page) = g.tick(now) {
                    tracing::debug!(page, "page settled");
                    true
                } else {
                    g.animating()
                }
            }
        };
        let ticker_moved = match &mut self.ticker {
            Some(ticker) => ticker.tick(now),
            None => false,
        };
        moved || ticker_moved
    }
}
