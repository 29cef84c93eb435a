//! Launcher configuration
//!
//! Loaded from a TOML file with serde defaults on every field, so a
//! partial (or absent) file still yields a working launcher. A bad file is
//! logged and replaced by the defaults rather than aborting startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::input::SwipeConfig;
use crate::layout::ScrollAxis;

/// Which home-screen layout to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Carousel,
    Grid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub layout: LayoutMode,
    /// Feed directory scanned when no directories are given on the
    /// command line.
    pub data_dir: PathBuf,
    /// Script invoked with the tapped entry's exec command.
    pub launch_script: String,
    /// Well-known file holding the persisted cursor.
    pub cursor_path: PathBuf,
    pub taglines_path: PathBuf,
    pub window: WindowConfig,
    pub gesture: GestureConfig,
    pub grid: GridConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Carousel,
            data_dir: PathBuf::from("/usr/share/glide/feeds"),
            launch_script: "/usr/share/glide/launch.sh".to_string(),
            cursor_path: PathBuf::from("/tmp/glide-launcher-offset"),
            taglines_path: PathBuf::from("/usr/share/glide/taglines.txt"),
            window: WindowConfig::default(),
            gesture: GestureConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

/// Screen dimensions reported by the frontend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
        }
    }
}

/// Swipe classification thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub threshold: f64,
    pub restraint: f64,
    pub allowed_time_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: 150.0,
            restraint: 100.0,
            allowed_time_ms: 300,
        }
    }
}

impl From<&GestureConfig> for SwipeConfig {
    fn from(cfg: &GestureConfig) -> Self {
        SwipeConfig {
            threshold: cfg.threshold,
            restraint: cfg.restraint,
            allowed_time: std::time::Duration::from_millis(cfg.allowed_time_ms),
        }
    }
}

/// Paged-grid shape and feel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Landscape scrolls horizontally, portrait vertically.
    pub landscape: bool,
    /// Paging animation speed in pixels per millisecond.
    pub pixels_per_ms: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 3,
            landscape: true,
            pixels_per_ms: 2.0,
        }
    }
}

impl GridConfig {
    pub fn axis(&self) -> ScrollAxis {
        if self.landscape {
            ScrollAxis::Horizontal
        } else {
            ScrollAxis::Vertical
        }
    }
}

impl LauncherConfig {
    /// Load from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded config");
                    config
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), "bad config, using defaults: {}", err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Default config location: `$XDG_CONFIG_HOME/glide/config.toml`,
    /// or `~/.config/glide/config.toml`.
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .unwrap_or_else(|_| PathBuf::from("/etc"))
            .join("glide/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LauncherConfig::default();
        assert_eq!(cfg.layout, LayoutMode::Carousel);
        assert_eq!(cfg.gesture.threshold, 150.0);
        assert_eq!(cfg.grid.rows, 2);
        assert_eq!(cfg.grid.cols, 3);
        assert_eq!(cfg.grid.axis(), ScrollAxis::Horizontal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let toml = r#"
            layout = "grid"

            [grid]
            rows = 3
        "#;
        let cfg: LauncherConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.layout, LayoutMode::Grid);
        assert_eq!(cfg.grid.rows, 3);
        assert_eq!(cfg.grid.cols, 3); // default preserved
        assert_eq!(cfg.gesture.restraint, 100.0);
    }

    #[test]
    fn test_round_trip() {
        let cfg = LauncherConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: LauncherConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.layout, cfg.layout);
        assert_eq!(back.cursor_path, cfg.cursor_path);
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = LauncherConfig::load(Path::new("/nonexistent/config.toml"));
        assert_eq!(cfg.layout, LayoutMode::Carousel);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = [not toml").unwrap();
        let cfg = LauncherConfig::load(&path);
        assert_eq!(cfg.layout, LayoutMode::Carousel);
    }

    #[test]
    fn test_gesture_to_swipe_config() {
        let g = GestureConfig {
            threshold: 120.0,
            restraint: 80.0,
            allowed_time_ms: 250,
        };
        let s = SwipeConfig::from(&g);
        assert_eq!(s.threshold, 120.0);
        assert_eq!(s.allowed_time.as_millis(), 250);
    }
}
