//! Event handling for the winit window
//!
//! This module converts winit events to the chrome's `InputEvent` type.
//! winit reports cursor positions relative to the window only, so the
//! handler remembers the last position (button events carry none) and
//! derives global coordinates from the window origin.

use crate::window::{InputEvent, MouseButton, Point};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent as WinitWindowEvent};

/// Event handler for converting winit events to chrome input events
pub struct EventHandler {
    /// Last known cursor position, window-local
    mouse_position: Point,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self {
            mouse_position: Point::default(),
        }
    }

    /// Handle a winit window event and convert it to an input event
    ///
    /// # Arguments
    ///
    /// * `event` - Event delivered by winit
    /// * `origin` - Screen position of the window's top-left corner
    pub fn handle_event(&mut self, event: &WinitWindowEvent, origin: Point) -> Option<InputEvent> {
        match event {
            WinitWindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: clamp_to_i32(size.width),
                height: clamp_to_i32(size.height),
            }),

            WinitWindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = to_point(*position);
                Some(InputEvent::HoverMove {
                    local: self.mouse_position,
                    global: origin + self.mouse_position,
                })
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(*button)?;
                let local = self.mouse_position;
                let global = origin + local;
                Some(match state {
                    ElementState::Pressed => InputEvent::ButtonPress { local, global, button },
                    ElementState::Released => InputEvent::ButtonRelease { local, global, button },
                })
            }

            _ => None,
        }
    }

    /// Get current mouse position
    pub fn mouse_position(&self) -> Point {
        self.mouse_position
    }
}

/// Round a fractional physical position to whole pixels
fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.round() as i32, position.y.round() as i32)
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Convert winit mouse button to chrome mouse button
fn convert_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
