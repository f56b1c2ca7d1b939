//! frameless-chrome - move, resize and title bar handling for borderless windows
//!
//! The crate has no widget toolkit of its own. It talks to windows through
//! [`window::InteractiveSurface`] and consumes input through
//! [`window::InputObserver`], so the same logic drives a winit window or an
//! in-memory [`window::HeadlessSurface`].

pub mod utils;
pub mod window;

pub use utils::{ChromeError, Config, Result};
pub use window::{
    DragState, FramelessController, InputEvent, InputObserver, InteractiveSurface, TitleBar,
    TitleBarButtons, TitleBarEvent,
};
