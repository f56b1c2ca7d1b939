use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::Key,
    window::WindowId,
};

use frameless_chrome::utils::{self, Config};
use frameless_chrome::window::events::EventHandler;
use frameless_chrome::window::{
    FramelessController, InputObserver, InteractiveSurface, MenuAction, MenuEntry, TitleBar,
    TitleBarEvent, WinitSurface,
};

/// frameless-chrome - a borderless window with a custom title bar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Resize hot zone thickness in pixels
    #[arg(long, value_name = "PIXELS")]
    padding: Option<u32>,

    /// Disable dragging the window by its body
    #[arg(long)]
    no_move: bool,

    /// Disable resizing from edges and corners
    #[arg(long)]
    no_resize: bool,

    /// Let the title bar move the window
    #[arg(long)]
    parent_movable: bool,

    /// Hide the icon button
    #[arg(long)]
    hide_icon: bool,

    /// Visible title bar buttons (1 = maximize, 2 = minimize, 4 = close)
    #[arg(long, value_name = "MASK")]
    buttons: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Apply command line values on top of the loaded configuration
    fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(padding) = self.padding {
            config.frameless.padding = padding;
        }
        if self.no_move {
            config.frameless.move_enabled = false;
        }
        if self.no_resize {
            config.frameless.resize_enabled = false;
        }
        if self.parent_movable {
            config.titlebar.parent_movable = true;
        }
        if self.hide_icon {
            config.titlebar.show_icon = false;
        }
        if let Some(buttons) = self.buttons {
            config.titlebar.buttons = buttons;
        }
    }
}

/// Everything that exists once the window is up
struct Chrome {
    surface: Arc<WinitSurface>,
    controller: FramelessController,
    titlebar: TitleBar,
    events: EventHandler,
    close_requested: Arc<AtomicBool>,
}

impl Chrome {
    fn create(event_loop: &ActiveEventLoop, config: &Config) -> utils::Result<Self> {
        let surface = Arc::new(WinitSurface::create(event_loop, &config.window)?);

        let mut controller = FramelessController::from_config(&config.frameless);
        controller.attach(surface.clone());

        let mut titlebar = TitleBar::from_config(surface.clone(), &config.titlebar)?;
        let close_requested = Arc::new(AtomicBool::new(false));
        let flag = close_requested.clone();
        titlebar.subscribe(move |event| match event {
            TitleBarEvent::CloseRequested => flag.store(true, Ordering::SeqCst),
            TitleBarEvent::MenuRequested { position, entries } => {
                info!("Menu requested at {:?}", position);
                for entry in entries {
                    match entry {
                        MenuEntry::Action { label, action, .. } => {
                            info!("  {} ({:?})", label, action)
                        }
                        MenuEntry::Separator => info!("  ----"),
                    }
                }
            }
        });

        Ok(Self {
            surface,
            controller,
            titlebar,
            events: EventHandler::new(),
            close_requested,
        })
    }

    /// Offer an input event to the title bar first, then to the controller
    fn dispatch(&mut self, event: &WindowEvent) {
        let origin = self.surface.geometry().position();
        let Some(input) = self.events.handle_event(event, origin) else {
            return;
        };

        let target = self.surface.id();
        if !self.titlebar.on_input(target, &input) {
            self.controller.on_input(target, &input);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        let action = match &event.logical_key {
            Key::Character(c) => match c.to_lowercase().as_str() {
                "r" => MenuAction::Restore,
                "n" => MenuAction::Minimize,
                "x" => MenuAction::Maximize,
                "q" => MenuAction::Close,
                _ => return,
            },
            _ => return,
        };

        debug!("Keyboard menu action: {:?}", action);
        self.titlebar.activate(action);
    }
}

/// Winit application driving one frameless window
struct App {
    config: Config,
    chrome: Option<Chrome>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            chrome: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.chrome.is_some() {
            return;
        }

        match Chrome::create(event_loop, &self.config) {
            Ok(chrome) => {
                info!("Window created: {:?}", chrome.surface.id());
                chrome.surface.winit_window().request_redraw();
                self.chrome = Some(chrome);
            }
            Err(e) => self.fail(event_loop, e.into()),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(chrome) = self.chrome.as_mut() else {
            warn!("Window event {:?} before the window exists, ignoring", event);
            return;
        };
        if chrome.surface.winit_window().id() != window_id {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                let layout = chrome.titlebar.paint();
                trace!("Title bar layout: {:?}", layout);
            }
            WindowEvent::Resized(_) => chrome.surface.winit_window().request_redraw(),
            WindowEvent::KeyboardInput { event: key, .. } => chrome.handle_key(key),
            _ => {}
        }

        chrome.dispatch(&event);

        if chrome.close_requested.load(Ordering::SeqCst) {
            info!("Close button pressed, exiting");
            event_loop.exit();
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before logging so its level can be used
    let config_result = utils::load_config();
    let mut config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    args.apply(&mut config);

    // Initialize logging
    let log_level = if args.debug {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting frameless-chrome v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = config_result {
        error!("Failed to load configuration, using defaults: {}", e);
    }

    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => {
            info!("frameless-chrome shut down successfully");
            Ok(())
        }
    }
}
