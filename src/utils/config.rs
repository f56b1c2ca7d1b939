//! Configuration management for frameless-chrome
//!
//! This module handles loading and managing the chrome configuration
//! from config files and environment variables.

use crate::utils::error::{ChromeError, IntoChromeError, Result};
use crate::window::hotzone::MAX_PADDING;
use crate::window::titlebar::{Color, TitleBarButtons};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Move/resize controller configuration
    pub frameless: FramelessConfig,

    /// Title bar configuration
    pub titlebar: TitleBarConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,

    /// Initial window height
    pub height: u32,

    /// Minimum window width
    pub min_width: u32,

    /// Minimum window height
    pub min_height: u32,

    /// Window title
    pub title: String,

    /// Always on top
    pub always_on_top: bool,
}

/// Frameless controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramelessConfig {
    /// Thickness of the resize hot zones in pixels
    pub padding: u32,

    /// Allow dragging the window from anywhere outside the hot zones
    pub move_enabled: bool,

    /// Allow resizing from the edges and corners
    pub resize_enabled: bool,
}

/// Title bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBarConfig {
    /// Bar height in pixels
    pub height: u32,

    /// Background color (hex)
    pub background: String,

    /// Whether dragging the bar moves the parent window
    pub parent_movable: bool,

    /// Show the icon button on the left
    pub show_icon: bool,

    /// Visible control buttons (1 = maximize, 2 = minimize, 4 = close)
    pub buttons: u32,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            min_width: 200,
            min_height: 120,
            title: "Frameless".to_string(),
            always_on_top: false,
        }
    }
}

impl Default for FramelessConfig {
    fn default() -> Self {
        Self {
            padding: 8,
            move_enabled: true,
            resize_enabled: true,
        }
    }
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            height: 40,
            background: "#FFFFFF".to_string(),
            parent_movable: false,
            show_icon: true,
            buttons: TitleBarButtons::ALL.bits(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/frameless-chrome/config.toml on Linux)
    /// 3. User config file (~/.config/frameless-chrome/config.toml on Linux)
    /// 4. Environment variables (FRAMELESS_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config = Self::read_file(&system_path)?;
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config = Self::read_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| ChromeError::Config("Cannot determine user config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;
        std::fs::write(path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    /// Parse a TOML file; missing keys fall back to their defaults
    fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;
        toml::from_str(&contents).config_err("Failed to parse config file")
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(padding) = std::env::var("FRAMELESS_PADDING") {
            self.frameless.padding = padding
                .parse()
                .map_err(|_| ChromeError::Config("Invalid FRAMELESS_PADDING".to_string()))?;
        }

        if let Ok(width) = std::env::var("FRAMELESS_WINDOW_WIDTH") {
            self.window.width = width
                .parse()
                .map_err(|_| ChromeError::Config("Invalid FRAMELESS_WINDOW_WIDTH".to_string()))?;
        }

        if let Ok(height) = std::env::var("FRAMELESS_WINDOW_HEIGHT") {
            self.window.height = height
                .parse()
                .map_err(|_| ChromeError::Config("Invalid FRAMELESS_WINDOW_HEIGHT".to_string()))?;
        }

        if let Ok(height) = std::env::var("FRAMELESS_TITLEBAR_HEIGHT") {
            self.titlebar.height = height
                .parse()
                .map_err(|_| ChromeError::Config("Invalid FRAMELESS_TITLEBAR_HEIGHT".to_string()))?;
        }

        if let Ok(log_level) = std::env::var("FRAMELESS_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ChromeError::Config("Window dimensions must be non-zero".to_string()));
        }

        if self.window.min_width > self.window.width || self.window.min_height > self.window.height {
            return Err(ChromeError::Config(format!(
                "Minimum size {}x{} exceeds initial size {}x{}",
                self.window.min_width, self.window.min_height, self.window.width, self.window.height
            )));
        }

        if self.frameless.padding == 0 {
            return Err(ChromeError::Config("Frameless padding must be non-zero".to_string()));
        }

        if self.frameless.padding > MAX_PADDING as u32 {
            return Err(ChromeError::Config(format!(
                "Frameless padding {} exceeds {}",
                self.frameless.padding, MAX_PADDING
            )));
        }

        if self.titlebar.height == 0 {
            return Err(ChromeError::Config("Title bar height must be non-zero".to_string()));
        }

        Color::from_hex(&self.titlebar.background)
            .map_err(|e| ChromeError::Config(format!("Invalid title bar background: {}", e)))?;

        if TitleBarButtons::from_bits(self.titlebar.buttons).is_none() {
            return Err(ChromeError::Config(format!(
                "Invalid title bar button mask {:#x}, must be within {:#x}",
                self.titlebar.buttons,
                TitleBarButtons::ALL.bits()
            )));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ChromeError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/frameless-chrome/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("FramelessChrome").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from(
            "/Library/Application Support/FramelessChrome/config.toml",
        ));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("frameless-chrome").join("config.toml"))
    }
}
