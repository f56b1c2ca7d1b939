//! Edge and corner hot zones for borderless windows
//!
//! The eight zones form a ring of thickness `padding` just inside the
//! window bounds. They are recomputed from the window size on every resize
//! and used both for cursor feedback and for deciding what a press grabs.

use crate::window::{CursorShape, Point, Rect};

/// Default hot zone thickness in pixels
pub const DEFAULT_PADDING: i32 = 8;

/// Thickest hot zone a controller accepts; larger paddings are clamped
pub const MAX_PADDING: i32 = 4096;

/// Resize edge enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl ResizeEdge {
    /// Order in which a press point is tested against the zones
    pub const PRESS_ORDER: [ResizeEdge; 8] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
    ];

    /// Convert to cursor shape
    pub fn to_cursor_shape(&self) -> CursorShape {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => CursorShape::HorizontalResize,
            ResizeEdge::Top | ResizeEdge::Bottom => CursorShape::VerticalResize,
            ResizeEdge::TopLeft | ResizeEdge::BottomRight => CursorShape::DiagonalNwSe,
            ResizeEdge::TopRight | ResizeEdge::BottomLeft => CursorShape::DiagonalNeSw,
        }
    }
}

/// The eight hot zone rectangles in window-local coordinates
///
/// Corners are `padding`×`padding` squares. Edges run between the corners,
/// so no two zones overlap. A freshly created set is empty until
/// [`HotZoneSet::compute`] runs with a real window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HotZoneSet {
    pub left: Rect,
    pub right: Rect,
    pub top: Rect,
    pub bottom: Rect,
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_left: Rect,
    pub bottom_right: Rect,
}

impl HotZoneSet {
    /// Build the zones for a window of `width`×`height`
    pub fn compute(width: i32, height: i32, padding: i32) -> Self {
        let p = padding;
        let inner_width = width.saturating_sub(p.saturating_mul(2));
        let inner_height = height.saturating_sub(p.saturating_mul(2));
        let right = width.saturating_sub(p);
        let bottom = height.saturating_sub(p);

        Self {
            left: Rect::new(0, p, p, inner_height),
            top: Rect::new(p, 0, inner_width, p),
            right: Rect::new(right, p, p, inner_height),
            bottom: Rect::new(p, bottom, inner_width, p),

            top_left: Rect::new(0, 0, p, p),
            top_right: Rect::new(right, 0, p, p),
            bottom_left: Rect::new(0, bottom, p, p),
            bottom_right: Rect::new(right, bottom, p, p),
        }
    }

    /// Rectangle for a single edge or corner
    pub fn zone(&self, edge: ResizeEdge) -> Rect {
        match edge {
            ResizeEdge::Left => self.left,
            ResizeEdge::Right => self.right,
            ResizeEdge::Top => self.top,
            ResizeEdge::Bottom => self.bottom,
            ResizeEdge::TopLeft => self.top_left,
            ResizeEdge::TopRight => self.top_right,
            ResizeEdge::BottomLeft => self.bottom_left,
            ResizeEdge::BottomRight => self.bottom_right,
        }
    }

    /// Classify a press point; `None` means the press starts a move
    pub fn hit_test(&self, point: Point) -> Option<ResizeEdge> {
        ResizeEdge::PRESS_ORDER
            .into_iter()
            .find(|edge| self.zone(*edge).contains(point))
    }

    /// Cursor to show while hovering over `point`
    pub fn cursor_at(&self, point: Point) -> CursorShape {
        self.hit_test(point)
            .map_or(CursorShape::Arrow, |edge| edge.to_cursor_shape())
    }
}
