//! In-memory window for driving the chrome without a display
//!
//! `HeadlessSurface` stores every request verbatim: it does not clamp to
//! the minimum size, so callers can observe exactly what the chrome asked
//! for. Maximize fills a configurable screen area and remembers the normal
//! geometry for restore.

use crate::window::{CursorShape, Geometry, InteractiveSurface, Point, Size, SurfaceId};
use parking_lot::Mutex;

/// Default screen area used when maximizing
const DEFAULT_SCREEN: Geometry = Geometry::new(0, 0, 1920, 1080);

#[derive(Debug)]
struct HeadlessState {
    title: String,
    geometry: Geometry,
    minimum: Size,
    screen: Geometry,
    cursor: CursorShape,
    hover_tracking: bool,
    maximized: bool,
    minimized: bool,
    normal_geometry: Option<Geometry>,
    geometry_requests: usize,
}

/// Window stand-in that keeps its state in memory
#[derive(Debug)]
pub struct HeadlessSurface {
    id: SurfaceId,
    state: Mutex<HeadlessState>,
}

impl HeadlessSurface {
    /// Create a surface with the given identity and initial geometry
    pub fn new(id: u64, geometry: Geometry) -> Self {
        Self {
            id: SurfaceId(id),
            state: Mutex::new(HeadlessState {
                title: String::new(),
                geometry,
                minimum: Size::default(),
                screen: DEFAULT_SCREEN,
                cursor: CursorShape::Arrow,
                hover_tracking: false,
                maximized: false,
                minimized: false,
                normal_geometry: None,
                geometry_requests: 0,
            }),
        }
    }

    pub fn with_title(self, title: &str) -> Self {
        self.state.lock().title = title.to_string();
        self
    }

    pub fn with_minimum_size(self, minimum: Size) -> Self {
        self.state.lock().minimum = minimum;
        self
    }

    /// Area the window fills when maximized
    pub fn with_screen(self, screen: Geometry) -> Self {
        self.state.lock().screen = screen;
        self
    }

    pub fn cursor(&self) -> CursorShape {
        self.state.lock().cursor
    }

    pub fn hover_tracking(&self) -> bool {
        self.state.lock().hover_tracking
    }

    pub fn is_minimized(&self) -> bool {
        self.state.lock().minimized
    }

    /// Number of `set_geometry`/`move_to` calls received so far
    pub fn geometry_requests(&self) -> usize {
        self.state.lock().geometry_requests
    }
}

impl InteractiveSurface for HeadlessSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn title(&self) -> String {
        self.state.lock().title.clone()
    }

    fn geometry(&self) -> Geometry {
        self.state.lock().geometry
    }

    fn minimum_size(&self) -> Size {
        self.state.lock().minimum
    }

    fn set_geometry(&self, geometry: Geometry) {
        let mut state = self.state.lock();
        state.geometry = geometry;
        state.geometry_requests += 1;
    }

    fn move_to(&self, position: Point) {
        let mut state = self.state.lock();
        state.geometry.x = position.x;
        state.geometry.y = position.y;
        state.geometry_requests += 1;
    }

    fn set_cursor(&self, cursor: CursorShape) {
        self.state.lock().cursor = cursor;
    }

    fn set_hover_tracking(&self, enabled: bool) {
        self.state.lock().hover_tracking = enabled;
    }

    fn is_maximized(&self) -> bool {
        self.state.lock().maximized
    }

    fn show_maximized(&self) {
        let mut state = self.state.lock();
        if !state.maximized {
            state.normal_geometry = Some(state.geometry);
            state.geometry = state.screen;
            state.maximized = true;
        }
        state.minimized = false;
    }

    fn show_normal(&self) {
        let mut state = self.state.lock();
        if state.maximized {
            if let Some(normal) = state.normal_geometry.take() {
                state.geometry = normal;
            }
            state.maximized = false;
        }
        state.minimized = false;
    }

    fn show_minimized(&self) {
        self.state.lock().minimized = true;
    }
}
