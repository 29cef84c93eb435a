//! Cursor persistence
//!
//! A single scalar survives across runs: the carousel's base angle or the
//! pager's page index, stored as one line of plain text in a well-known
//! file. It is read once at startup and written once just before handing
//! off to a launched program. Any read failure falls back to the default;
//! persistence is never fatal.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Base angle used when no cursor has been persisted yet.
pub const DEFAULT_ANGLE: f64 = 90.0;

/// Reads and writes the persisted cursor scalar.
#[derive(Debug, Clone)]
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_angle(&self) -> f64 {
        self.read().unwrap_or(DEFAULT_ANGLE)
    }

    pub fn load_page(&self) -> usize {
        self.read().unwrap_or(0)
    }

    pub fn save_angle(&self, angle: f64) {
        self.write(angle);
    }

    pub fn save_page(&self, page: usize) {
        self.write(page);
    }

    fn read<T: FromStr>(&self) -> Option<T> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        match text.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "unparseable cursor, using default");
                None
            }
        }
    }

    fn write<T: Display>(&self, value: T) {
        if let Err(err) = std::fs::write(&self.path, value.to_string()) {
            tracing::warn!(path = %self.path.display(), "failed to persist cursor: {}", err);
        }
    }
}
