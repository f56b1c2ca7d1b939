//! Drag state and resize geometry for borderless windows
//!
//! A press selects exactly one [`DragState`]; hover moves then turn
//! pointer deltas into window geometry through [`resize_geometry`].
//!
//! The minimum-size guards are uneven: edges that move the origin (left,
//! top, and the corners touching them) check the minimum per axis, while
//! right, bottom and bottom-right apply no check at all and leave clamping
//! to the window. The tests below pin this asymmetry.

use crate::window::hotzone::ResizeEdge;
use crate::window::{Geometry, Point, Size};

/// What the current press is manipulating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button held
    #[default]
    Idle,

    /// Press landed outside every hot zone; pointer motion moves the window
    Move,

    /// Press landed in a hot zone; pointer motion resizes from that edge
    Resize(ResizeEdge),
}

impl DragState {
    /// State selected by a press, given the hot zone it hit
    pub fn from_press(hit: Option<ResizeEdge>) -> Self {
        match hit {
            Some(edge) => DragState::Resize(edge),
            None => DragState::Move,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// Compute the geometry a resize step should apply
///
/// # Arguments
///
/// * `edge` - Edge or corner grabbed at press time
/// * `offset` - Pointer delta since the previous hover event
/// * `snapshot` - Window geometry captured at press time
/// * `current` - Window geometry right now
/// * `minimum` - Smallest size the window accepts
///
/// # Returns
///
/// The geometry to apply, or `None` when every guarded axis rejected the
/// step and the window must be left alone.
pub fn resize_geometry(
    edge: ResizeEdge,
    offset: Point,
    snapshot: Geometry,
    current: Geometry,
    minimum: Size,
) -> Option<Geometry> {
    let shrunk_width = current.width - offset.x;
    let shrunk_height = current.height - offset.y;
    let width_ok = minimum.width <= shrunk_width;
    let height_ok = minimum.height <= shrunk_height;

    match edge {
        ResizeEdge::Left => width_ok.then(|| Geometry {
            x: current.x + offset.x,
            width: shrunk_width,
            ..current
        }),

        ResizeEdge::Right => Some(Geometry {
            x: snapshot.x,
            width: snapshot.width + offset.x,
            ..current
        }),

        ResizeEdge::Top => height_ok.then(|| Geometry {
            y: current.y + offset.y,
            height: shrunk_height,
            ..current
        }),

        ResizeEdge::Bottom => Some(Geometry {
            y: snapshot.y,
            height: snapshot.height + offset.y,
            ..current
        }),

        ResizeEdge::TopLeft => {
            if !width_ok && !height_ok {
                return None;
            }
            let mut next = current;
            if width_ok {
                next.x += offset.x;
                next.width = shrunk_width;
            }
            if height_ok {
                next.y += offset.y;
                next.height = shrunk_height;
            }
            Some(next)
        }

        ResizeEdge::TopRight => {
            let mut next = Geometry {
                x: snapshot.x,
                width: snapshot.width + offset.x,
                ..current
            };
            if height_ok {
                next.y += offset.y;
                next.height = shrunk_height;
            }
            Some(next)
        }

        ResizeEdge::BottomLeft => {
            let mut next = Geometry {
                y: snapshot.y,
                height: snapshot.height + offset.y,
                ..current
            };
            if width_ok {
                next.x += offset.x;
                next.width = shrunk_width;
            }
            Some(next)
        }

        ResizeEdge::BottomRight => Some(Geometry {
            width: snapshot.width + offset.x,
            height: snapshot.height + offset.y,
            ..snapshot
        }),
    }
}
