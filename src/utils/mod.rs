//! Utility module for frameless-chrome
//!
//! - Error handling with custom error types
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, FramelessConfig, GeneralConfig, TitleBarConfig, WindowConfig};
pub use error::{ChromeError, IntoChromeError, Result};

/// Initialize the application configuration
///
/// Loads configuration from:
/// 1. Default values
/// 2. System configuration file
/// 3. User configuration file
/// 4. Environment variables
pub fn load_config() -> Result<Config> {
    Config::load()
}
