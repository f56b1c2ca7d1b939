//! Winit window implementation of `InteractiveSurface`
//!
//! Creates an undecorated winit window and exposes it to the chrome.
//! winit has no getter for the minimum size, so it is cached here.

use crate::utils::config::WindowConfig;
use crate::utils::error::{IntoChromeError, Result};
use crate::window::{CursorShape, Geometry, InteractiveSurface, Point, Size, SurfaceId};
use log::{debug, trace};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{CursorIcon, Window as WinitWindow, WindowLevel},
};

/// Winit-backed window
pub struct WinitSurface {
    /// The underlying winit window
    window: Arc<WinitWindow>,

    /// Minimum inner size last applied to the window
    minimum: Mutex<Size>,

    /// winit always reports cursor motion; the flag only records the request
    hover_tracking: AtomicBool,
}

impl WinitSurface {
    /// Create a borderless window from configuration
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        let level = if config.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        let attributes = WinitWindow::default_attributes()
            .with_title(&config.title)
            .with_decorations(false) // Borderless window
            .with_resizable(true)
            .with_window_level(level)
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

        let window = event_loop
            .create_window(attributes)
            .window_err("Failed to create window")?;

        let surface = Self::from_window(Arc::new(window));
        surface.set_minimum_size(Size::new(
            i32::try_from(config.min_width).unwrap_or(i32::MAX),
            i32::try_from(config.min_height).unwrap_or(i32::MAX),
        ));
        Ok(surface)
    }

    /// Wrap an existing winit window
    pub fn from_window(window: Arc<WinitWindow>) -> Self {
        Self {
            window,
            minimum: Mutex::new(Size::default()),
            hover_tracking: AtomicBool::new(false),
        }
    }

    /// Apply and remember a minimum inner size
    ///
    /// The size is in logical pixels, the same unit the window was created with.
    pub fn set_minimum_size(&self, minimum: Size) {
        *self.minimum.lock() = minimum;
        self.window
            .set_min_inner_size(Some(to_logical_size(minimum)));
    }

    /// Get the winit window handle
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }

    /// Whether hover tracking was requested
    pub fn hover_tracking(&self) -> bool {
        self.hover_tracking.load(Ordering::Relaxed)
    }
}

impl InteractiveSurface for WinitSurface {
    fn id(&self) -> SurfaceId {
        SurfaceId(u64::from(self.window.id()))
    }

    fn title(&self) -> String {
        self.window.title()
    }

    fn geometry(&self) -> Geometry {
        // Wayland cannot report window positions; treat them as the origin
        let position = self
            .window
            .outer_position()
            .unwrap_or(PhysicalPosition::new(0, 0));
        let size = self.window.inner_size();
        Geometry::new(
            position.x,
            position.y,
            i32::try_from(size.width).unwrap_or(i32::MAX),
            i32::try_from(size.height).unwrap_or(i32::MAX),
        )
    }

    fn minimum_size(&self) -> Size {
        *self.minimum.lock()
    }

    fn set_geometry(&self, geometry: Geometry) {
        let size = PhysicalSize::new(geometry.width.max(0) as u32, geometry.height.max(0) as u32);
        // Some platforms apply the size later and report it through Resized
        if let Some(applied) = self.window.request_inner_size(size) {
            trace!("Inner size applied immediately: {:?}", applied);
        }
        self.window
            .set_outer_position(PhysicalPosition::new(geometry.x, geometry.y));
    }

    fn move_to(&self, position: Point) {
        self.window
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
    }

    fn set_cursor(&self, cursor: CursorShape) {
        self.window.set_cursor(to_cursor_icon(cursor));
    }

    fn set_hover_tracking(&self, enabled: bool) {
        debug!("Hover tracking {} for {:?}", if enabled { "on" } else { "off" }, self.id());
        self.hover_tracking.store(enabled, Ordering::Relaxed);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn show_maximized(&self) {
        self.window.set_minimized(false);
        self.window.set_maximized(true);
    }

    fn show_normal(&self) {
        self.window.set_minimized(false);
        self.window.set_maximized(false);
    }

    fn show_minimized(&self) {
        self.window.set_minimized(true);
    }
}

fn to_logical_size(size: Size) -> LogicalSize<f64> {
    LogicalSize::new(size.width.max(0) as f64, size.height.max(0) as f64)
}

/// Convert to winit cursor icon
fn to_cursor_icon(cursor: CursorShape) -> CursorIcon {
    match cursor {
        CursorShape::Arrow => CursorIcon::Default,
        CursorShape::HorizontalResize => CursorIcon::EwResize,
        CursorShape::VerticalResize => CursorIcon::NsResize,
        CursorShape::DiagonalNwSe => CursorIcon::NwseResize,
        CursorShape::DiagonalNeSw => CursorIcon::NeswResize,
    }
}
