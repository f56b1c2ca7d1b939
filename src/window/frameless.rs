//! Move and resize handling for frameless windows
//!
//! `FramelessController` watches the input stream of one window. Presses
//! inside the eight hot zones resize the window from that edge or corner;
//! presses anywhere else drag the whole window. Hover motion keeps the
//! cursor in sync with the zone under the pointer.

use crate::utils::config::FramelessConfig;
use crate::window::drag::{resize_geometry, DragState};
use crate::window::hotzone::{HotZoneSet, DEFAULT_PADDING, MAX_PADDING};
use crate::window::{
    CursorShape, Geometry, InputEvent, InputObserver, InteractiveSurface, MouseButton, Point,
    SurfaceId,
};
use log::{debug, trace, warn};
use std::sync::Arc;

/// Drag/resize controller for a single borderless window
pub struct FramelessController {
    /// Window being controlled, set once by `attach`
    surface: Option<Arc<dyn InteractiveSurface>>,

    /// Hot zone thickness in pixels
    padding: i32,

    move_enabled: bool,
    resize_enabled: bool,

    /// Edge and corner rectangles, stale until the first resize event
    zones: HotZoneSet,

    /// What the current press is manipulating
    drag: DragState,

    /// Window geometry captured at press time
    snapshot: Geometry,

    /// Pointer position of the previous press or hover event
    last_pos: Point,
}

impl Default for FramelessController {
    fn default() -> Self {
        Self::new()
    }
}

impl FramelessController {
    /// Create a detached controller with default settings
    pub fn new() -> Self {
        Self {
            surface: None,
            padding: DEFAULT_PADDING,
            move_enabled: true,
            resize_enabled: true,
            zones: HotZoneSet::default(),
            drag: DragState::Idle,
            snapshot: Geometry::default(),
            last_pos: Point::default(),
        }
    }

    /// Create a detached controller from configuration
    pub fn from_config(config: &FramelessConfig) -> Self {
        let mut controller = Self::new();
        controller.set_padding(config.padding);
        controller.set_move_enabled(config.move_enabled);
        controller.set_resize_enabled(config.resize_enabled);
        controller
    }

    /// Bind the controller to its window
    ///
    /// Turns on hover tracking so motion still arrives while the pointer is
    /// over child widgets. Only the first call has an effect.
    pub fn attach(&mut self, surface: Arc<dyn InteractiveSurface>) {
        if let Some(current) = &self.surface {
            warn!(
                "Frameless controller already attached to {:?}, ignoring {:?}",
                current.id(),
                surface.id()
            );
            return;
        }

        surface.set_hover_tracking(true);
        debug!("Frameless controller attached to {:?}", surface.id());
        self.surface = Some(surface);
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Set the hot zone thickness, applied on the next resize event
    pub fn set_padding(&mut self, padding: u32) {
        if padding == 0 {
            warn!("Ignoring zero frameless padding, keeping {}", self.padding);
            return;
        }
        let clamped = i32::try_from(padding).unwrap_or(i32::MAX).min(MAX_PADDING);
        if clamped as u32 != padding {
            warn!("Clamping frameless padding {} to {}", padding, clamped);
        }
        self.padding = clamped;
    }

    pub fn padding(&self) -> u32 {
        self.padding.unsigned_abs()
    }

    pub fn set_move_enabled(&mut self, enabled: bool) {
        self.move_enabled = enabled;
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    pub fn is_move_enabled(&self) -> bool {
        self.move_enabled
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn hot_zones(&self) -> &HotZoneSet {
        &self.zones
    }

    fn handle_resized(&mut self, width: i32, height: i32) {
        self.zones = HotZoneSet::compute(width, height, self.padding);
        trace!("Hot zones recomputed for {}x{} (padding {})", width, height, self.padding);
    }

    fn handle_hover(&mut self, surface: &dyn InteractiveSurface, point: Point) {
        if self.resize_enabled {
            surface.set_cursor(self.zones.cursor_at(point));
        }

        let offset = point - self.last_pos;

        match self.drag {
            DragState::Move if self.move_enabled => {
                surface.move_to(surface.geometry().translated(offset).position());
            }
            DragState::Resize(edge) if self.resize_enabled => {
                let next = resize_geometry(
                    edge,
                    offset,
                    self.snapshot,
                    surface.geometry(),
                    surface.minimum_size(),
                );
                if let Some(geometry) = next {
                    surface.set_geometry(geometry);
                }
            }
            _ => {}
        }

        self.last_pos = point;
    }

    fn handle_press(&mut self, surface: &dyn InteractiveSurface, point: Point) {
        self.snapshot = surface.geometry();
        self.last_pos = point;
        self.drag = DragState::from_press(self.zones.hit_test(point));
        debug!("Drag started: {:?} at {:?}", self.drag, point);
    }

    fn handle_release(&mut self, surface: &dyn InteractiveSurface) {
        if !self.drag.is_idle() {
            debug!("Drag finished: {:?}", self.drag);
        }
        self.drag = DragState::Idle;
        surface.set_cursor(CursorShape::Arrow);
    }
}

impl InputObserver for FramelessController {
    fn on_input(&mut self, target: SurfaceId, event: &InputEvent) -> bool {
        let surface = match &self.surface {
            Some(surface) if surface.id() == target => Arc::clone(surface),
            _ => return false,
        };

        match *event {
            InputEvent::Resized { width, height } => self.handle_resized(width, height),
            InputEvent::HoverMove { local, .. } => self.handle_hover(surface.as_ref(), local),
            InputEvent::ButtonPress {
                local,
                button: MouseButton::Left,
                ..
            } => self.handle_press(surface.as_ref(), local),
            InputEvent::ButtonPress { .. } => {}
            InputEvent::ButtonRelease { .. } => self.handle_release(surface.as_ref()),
        }

        // Observers never swallow events; the window still sees them
        false
    }
}
