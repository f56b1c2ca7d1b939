//! Integration test utilities for frameless-chrome
//!
//! This module provides common utilities for integration testing including:
//! - Scripted pointer input
//! - Temporary configuration files

use anyhow::Result;
use frameless_chrome::window::{Geometry, HeadlessSurface, Size};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Identity used for every test window
pub const WINDOW_ID: u64 = 7;

/// Create a headless window with a minimum size
pub fn headless_window(geometry: Geometry, minimum: Size) -> Arc<HeadlessSurface> {
    Arc::new(
        HeadlessSurface::new(WINDOW_ID, geometry)
            .with_title("Integration")
            .with_minimum_size(minimum),
    )
}

/// Temporary directory holding configuration files
pub struct ConfigFixture {
    pub temp_dir: TempDir,
}

impl ConfigFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write `contents` to `name` inside the fixture directory
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Builders for pointer input aimed at one window
pub mod mock_events {
    use frameless_chrome::window::{InputEvent, InputObserver, MouseButton, Point, SurfaceId};

    /// Produces events the way a window at `origin` would report them
    #[derive(Debug, Clone, Copy)]
    pub struct Pointer {
        pub origin: Point,
    }

    impl Pointer {
        pub fn at(x: i32, y: i32) -> Self {
            Self {
                origin: Point::new(x, y),
            }
        }

        pub fn press(&self, x: i32, y: i32) -> InputEvent {
            self.press_with(x, y, MouseButton::Left)
        }

        pub fn press_with(&self, x: i32, y: i32, button: MouseButton) -> InputEvent {
            let local = Point::new(x, y);
            InputEvent::ButtonPress {
                local,
                global: self.origin + local,
                button,
            }
        }

        pub fn hover(&self, x: i32, y: i32) -> InputEvent {
            let local = Point::new(x, y);
            InputEvent::HoverMove {
                local,
                global: self.origin + local,
            }
        }

        pub fn release(&self, x: i32, y: i32) -> InputEvent {
            let local = Point::new(x, y);
            InputEvent::ButtonRelease {
                local,
                global: self.origin + local,
                button: MouseButton::Left,
            }
        }

        /// Press at `from`, hover in `steps` equal steps to `to`, release
        pub fn drag(&self, from: Point, to: Point, steps: i32) -> Vec<InputEvent> {
            let steps = steps.max(1);
            let mut events = vec![self.press(from.x, from.y)];
            for step in 1..=steps {
                let x = from.x + (to.x - from.x) * step / steps;
                let y = from.y + (to.y - from.y) * step / steps;
                events.push(self.hover(x, y));
            }
            events.push(self.release(to.x, to.y));
            events
        }
    }

    pub fn resized(width: i32, height: i32) -> InputEvent {
        InputEvent::Resized { width, height }
    }

    /// Deliver `events` in order, returning how many were consumed
    pub fn feed(observer: &mut dyn InputObserver, target: SurfaceId, events: &[InputEvent]) -> usize {
        events
            .iter()
            .filter(|event| observer.on_input(target, event))
            .count()
    }
}
