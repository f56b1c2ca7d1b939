//! Error types for frameless-chrome
//!
//! The interaction logic itself never fails; errors only come from the
//! edges of the crate (configuration files, color parsing, creating the
//! platform window). We use thiserror for the library error type and
//! anyhow in the demo binary.

use thiserror::Error;

/// Main error type for frameless-chrome
#[derive(Error, Debug)]
pub enum ChromeError {
    /// Platform window errors
    #[error("Window error: {0}")]
    Window(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for unexpected situations
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in frameless-chrome
pub type Result<T> = std::result::Result<T, ChromeError>;

/// Extension trait for converting other errors to ChromeError
pub trait IntoChromeError<T> {
    /// Convert this error into a `ChromeError::Window` with the given context
    fn window_err(self, context: &str) -> Result<T>;
    /// Convert this error into a `ChromeError::Config` with the given context
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoChromeError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromeError::Window(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromeError::Config(format!("{}: {}", context, e)))
    }
}
