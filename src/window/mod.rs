//! Window interaction module for frameless-chrome
//!
//! This module holds the toolkit-independent pieces: geometry value types,
//! the input events a host feeds in, and the two traits that decouple the
//! interaction logic from any concrete UI toolkit. The frameless controller
//! and the title bar are built on top of these; the winit adapters live in
//! `events` and `winit_surface`.

pub mod drag;
pub mod events;
pub mod frameless;
pub mod headless;
pub mod hotzone;
pub mod titlebar;
pub mod winit_surface;

pub use drag::DragState;
pub use frameless::FramelessController;
pub use headless::HeadlessSurface;
pub use hotzone::{HotZoneSet, ResizeEdge};
pub use titlebar::{
    Color, MenuAction, MenuEntry, StandardIcon, TitleBar, TitleBarButton, TitleBarButtons,
    TitleBarEvent, TitleBarLayout,
};
pub use winit_surface::WinitSurface;

use std::ops::{Add, Sub};

/// A point in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle with no positive area contains nothing
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.x.saturating_add(self.width)
            && point.y >= self.y
            && point.y < self.y.saturating_add(self.height)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x.saturating_add(other.width)
            && other.x < self.x.saturating_add(self.width)
            && self.y < other.y.saturating_add(other.height)
            && other.y < self.y.saturating_add(self.height)
    }
}

/// Window position and size in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, origin shifted by `offset`
    pub fn translated(&self, offset: Point) -> Geometry {
        Geometry::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// Identifies the window an input event was delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Cursor glyphs the chrome asks the window to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    HorizontalResize,
    VerticalResize,
    /// North-west to south-east diagonal
    DiagonalNwSe,
    /// North-east to south-west diagonal
    DiagonalNeSw,
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer and window notifications scoped to a single surface
///
/// `local` positions are relative to the window's top-left corner,
/// `global` positions are screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window now has the given size
    Resized { width: i32, height: i32 },

    /// Pointer moved over the window, with or without a button held
    HoverMove { local: Point, global: Point },

    /// Mouse button pressed
    ButtonPress {
        local: Point,
        global: Point,
        button: MouseButton,
    },

    /// Mouse button released
    ButtonRelease {
        local: Point,
        global: Point,
        button: MouseButton,
    },
}

/// The window the chrome manipulates
///
/// Implementations are owned by the host toolkit; the chrome only holds a
/// shared reference. All methods take `&self`, the way native window
/// handles expose their setters.
pub trait InteractiveSurface: Send + Sync {
    /// Stable identity used to scope input events
    fn id(&self) -> SurfaceId;

    /// Current window title
    fn title(&self) -> String;

    /// Current position and size
    fn geometry(&self) -> Geometry;

    /// Smallest size the window accepts
    fn minimum_size(&self) -> Size;

    /// Request a new position and size
    fn set_geometry(&self, geometry: Geometry);

    /// Move the window without resizing it
    fn move_to(&self, position: Point);

    /// Change the cursor shown over the window
    fn set_cursor(&self, cursor: CursorShape);

    /// Deliver pointer motion even when no button is held and the pointer
    /// is over a child widget
    fn set_hover_tracking(&self, enabled: bool);

    fn is_maximized(&self) -> bool;

    fn show_maximized(&self);

    /// Leave the maximized or minimized state, restoring the previous geometry
    fn show_normal(&self);

    fn show_minimized(&self);
}

/// Receives input events for the surfaces it cares about
pub trait InputObserver {
    /// Handle an event delivered to `target`
    ///
    /// # Returns
    ///
    /// `true` if the event was consumed and must not reach later observers
    fn on_input(&mut self, target: SurfaceId, event: &InputEvent) -> bool;
}
