//! Custom title bar for frameless windows
//!
//! The bar is a fixed-height strip pinned to the top of its parent window.
//! It holds an icon button (opens the window menu), the title text and the
//! minimize/maximize/close buttons. Dragging the bar can move the parent.
//!
//! Painting is left to the host: [`TitleBar::paint`] returns a
//! [`TitleBarLayout`] describing what goes where, and closing or opening
//! the menu are reported through [`TitleBarEvent`]s rather than acted on
//! directly.

use crate::utils::config::TitleBarConfig;
use crate::utils::error::{ChromeError, Result};
use crate::window::{InputEvent, InputObserver, InteractiveSurface, MouseButton, Point, Rect, SurfaceId};
use bitflags::bitflags;
use log::debug;
use std::sync::Arc;

/// Default bar height in pixels
pub const DEFAULT_HEIGHT: i32 = 40;

bitflags! {
    /// Which control buttons the bar shows
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TitleBarButtons: u32 {
        const MAX = 0x01;
        const MIN = 0x02;
        const CLOSE = 0x04;
        const ALL = Self::MAX.bits() | Self::MIN.bits() | Self::CLOSE.bits();
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| (d.len() == 6 || d.len() == 8) && d.is_ascii())
            .ok_or_else(|| ChromeError::InvalidInput(format!("expected #RRGGBB[AA], got '{}'", hex)))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ChromeError::InvalidInput(format!("bad hex digits in '{}'", hex)))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 0xFF },
        })
    }

    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Icons the host looks up from its theme by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardIcon {
    Close,
    Maximize,
    Restore,
    Minimize,
}

/// Clickable parts of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarButton {
    Icon,
    Minimize,
    Maximize,
    Close,
}

/// Window menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Restore,
    Minimize,
    Maximize,
    Close,
}

/// One row of the window menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        action: MenuAction,
        label: &'static str,
        icon: StandardIcon,
    },
    Separator,
}

/// Notifications for the hosting application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleBarEvent {
    /// The user asked to close the window
    CloseRequested,

    /// The icon button was clicked; show `entries` at the screen `position`
    /// and report the choice through [`TitleBar::activate`]
    MenuRequested {
        position: Point,
        entries: Vec<MenuEntry>,
    },
}

/// A visible control button and where it sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlot {
    pub button: TitleBarButton,
    pub rect: Rect,
    pub icon: StandardIcon,
}

/// Render model produced by [`TitleBar::paint`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarLayout {
    /// Bar bounds in parent-local coordinates
    pub bounds: Rect,
    pub background: Color,
    pub title: String,
    /// Icon button, when shown
    pub icon: Option<Rect>,
    /// Visible control buttons, left to right
    pub buttons: Vec<ButtonSlot>,
}

type Subscriber = Box<dyn Fn(&TitleBarEvent) + Send + Sync>;

/// Title bar attached to a frameless window
pub struct TitleBar {
    /// Window the bar belongs to
    parent: Arc<dyn InteractiveSurface>,

    height: i32,

    /// Last width pinned by `paint`
    width: i32,

    background: Color,

    /// Whether dragging the bar moves the parent
    parent_movable: bool,

    icon_visible: bool,
    buttons: TitleBarButtons,

    /// Icon currently shown on the maximize button
    maximize_icon: StandardIcon,

    /// A drag started on the bar itself
    pressed: bool,

    /// Global pointer position the last drag step was measured from
    last_global: Point,

    /// Most recent global pointer position, used to place the menu
    pointer: Point,

    /// Button under the current press, clicked if the release lands on it too
    armed: Option<TitleBarButton>,

    subscribers: Vec<Subscriber>,
}

impl TitleBar {
    /// Create a bar with default settings for `parent`
    pub fn new(parent: Arc<dyn InteractiveSurface>) -> Self {
        let width = parent.geometry().width;
        let maximize_icon = if parent.is_maximized() {
            StandardIcon::Restore
        } else {
            StandardIcon::Maximize
        };

        Self {
            parent,
            height: DEFAULT_HEIGHT,
            width,
            background: Color::WHITE,
            parent_movable: false,
            icon_visible: true,
            buttons: TitleBarButtons::ALL,
            maximize_icon,
            pressed: false,
            last_global: Point::default(),
            pointer: Point::default(),
            armed: None,
            subscribers: Vec::new(),
        }
    }

    /// Create a bar from configuration
    pub fn from_config(parent: Arc<dyn InteractiveSurface>, config: &TitleBarConfig) -> Result<Self> {
        let buttons = TitleBarButtons::from_bits(config.buttons).ok_or_else(|| {
            ChromeError::InvalidInput(format!("unknown title bar button bits {:#x}", config.buttons))
        })?;
        let height = i32::try_from(config.height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| ChromeError::InvalidInput(format!("bad title bar height {}", config.height)))?;

        let mut bar = Self::new(parent);
        bar.height = height;
        bar.set_background_color(Color::from_hex(&config.background)?);
        bar.set_parent_movable(config.parent_movable);
        bar.show_icon(config.show_icon);
        bar.set_button_visibility(buttons);
        Ok(bar)
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    /// Let dragging the bar move the parent window
    ///
    /// Leave this off when the parent already moves itself (for example
    /// through a [`FramelessController`](crate::window::FramelessController)),
    /// otherwise the window moves twice per step.
    pub fn set_parent_movable(&mut self, movable: bool) {
        self.parent_movable = movable;
    }

    pub fn show_icon(&mut self, visible: bool) {
        self.icon_visible = visible;
    }

    pub fn set_button_visibility(&mut self, buttons: TitleBarButtons) {
        self.buttons = buttons;
    }

    /// Register a callback for close and menu requests
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&TitleBarEvent) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn maximize_icon(&self) -> StandardIcon {
        self.maximize_icon
    }

    /// Pin the bar to the parent's current width and describe it for drawing
    pub fn paint(&mut self) -> TitleBarLayout {
        self.width = self.parent.geometry().width;
        self.layout()
    }

    /// Describe the bar at its last pinned width
    pub fn layout(&self) -> TitleBarLayout {
        let side = self.height;
        let mut right = self.width;
        let mut buttons = Vec::new();

        for (button, flag, icon) in [
            (TitleBarButton::Close, TitleBarButtons::CLOSE, StandardIcon::Close),
            (TitleBarButton::Maximize, TitleBarButtons::MAX, self.maximize_icon),
            (TitleBarButton::Minimize, TitleBarButtons::MIN, StandardIcon::Minimize),
        ] {
            if self.buttons.contains(flag) {
                right -= side;
                buttons.push(ButtonSlot {
                    button,
                    rect: Rect::new(right, 0, side, side),
                    icon,
                });
            }
        }
        buttons.reverse();

        TitleBarLayout {
            bounds: Rect::new(0, 0, self.width, self.height),
            background: self.background,
            title: self.parent.title(),
            icon: self.icon_visible.then(|| Rect::new(0, 0, side, side)),
            buttons,
        }
    }

    /// Button under a parent-local point
    pub fn button_at(&self, point: Point) -> Option<TitleBarButton> {
        let layout = self.layout();
        if layout.icon.is_some_and(|icon| icon.contains(point)) {
            return Some(TitleBarButton::Icon);
        }
        layout
            .buttons
            .iter()
            .find(|slot| slot.rect.contains(point))
            .map(|slot| slot.button)
    }

    /// Perform a button's action
    pub fn click(&mut self, button: TitleBarButton) {
        match button {
            TitleBarButton::Close => self.emit(&TitleBarEvent::CloseRequested),
            TitleBarButton::Maximize => self.toggle_maximized(),
            TitleBarButton::Minimize => self.minimize(),
            TitleBarButton::Icon => {
                debug!("Window menu requested at {:?}", self.pointer);
                self.emit(&TitleBarEvent::MenuRequested {
                    position: self.pointer,
                    entries: Self::menu_entries(),
                });
            }
        }
    }

    /// Perform a window menu action
    pub fn activate(&mut self, action: MenuAction) {
        match action {
            MenuAction::Restore => self.restore(),
            MenuAction::Minimize => self.minimize(),
            MenuAction::Maximize => self.maximize(),
            MenuAction::Close => self.emit(&TitleBarEvent::CloseRequested),
        }
    }

    /// Entries of the window menu, in display order
    pub fn menu_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::Action {
                action: MenuAction::Restore,
                label: "Restore",
                icon: StandardIcon::Restore,
            },
            MenuEntry::Action {
                action: MenuAction::Minimize,
                label: "Minimize",
                icon: StandardIcon::Minimize,
            },
            MenuEntry::Action {
                action: MenuAction::Maximize,
                label: "Maximize",
                icon: StandardIcon::Maximize,
            },
            MenuEntry::Separator,
            MenuEntry::Action {
                action: MenuAction::Close,
                label: "Close",
                icon: StandardIcon::Close,
            },
        ]
    }

    fn toggle_maximized(&mut self) {
        if self.parent.is_maximized() {
            self.restore();
        } else {
            self.maximize();
        }
    }

    fn maximize(&mut self) {
        debug!("Maximizing {:?}", self.parent.id());
        self.parent.show_maximized();
        self.maximize_icon = StandardIcon::Restore;
    }

    fn restore(&mut self) {
        debug!("Restoring {:?}", self.parent.id());
        self.parent.show_normal();
        self.maximize_icon = StandardIcon::Maximize;
    }

    fn minimize(&mut self) {
        debug!("Minimizing {:?}", self.parent.id());
        self.parent.show_minimized();
    }

    fn emit(&self, event: &TitleBarEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

impl InputObserver for TitleBar {
    fn on_input(&mut self, target: SurfaceId, event: &InputEvent) -> bool {
        if target != self.parent.id() {
            return false;
        }

        match *event {
            InputEvent::ButtonPress { local, global, button } => {
                self.pointer = global;
                let bounds = Rect::new(0, 0, self.width, self.height);
                if button != MouseButton::Left || !bounds.contains(local) {
                    return false;
                }
                if let Some(hit) = self.button_at(local) {
                    self.armed = Some(hit);
                    return true;
                }
                self.pressed = true;
                self.last_global = global;
                false
            }

            InputEvent::HoverMove { global, .. } => {
                self.pointer = global;
                if self.pressed && self.parent_movable {
                    let delta = global - self.last_global;
                    self.last_global = global;
                    self.parent
                        .move_to(self.parent.geometry().translated(delta).position());
                }
                false
            }

            InputEvent::ButtonRelease { local, global, button } => {
                self.pointer = global;
                self.pressed = false;
                match self.armed.take() {
                    Some(armed) => {
                        if button == MouseButton::Left && self.button_at(local) == Some(armed) {
                            self.click(armed);
                        }
                        true
                    }
                    None => false,
                }
            }

            InputEvent::Resized { .. } => false,
        }
    }
}
