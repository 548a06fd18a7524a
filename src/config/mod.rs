//! Configuration module - Application settings and user preferences
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.button-kit/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, WindowConfig, etc.)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

// Re-export defaults that are used externally
pub use defaults::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

// Re-export types that are used externally
pub use types::{Config, ShellButtonConfig, WindowConfig};

// Re-export loader
pub use loader::{config_path, load_config, try_load_config};

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_SHELL_BUTTON_LABEL, DEFAULT_SHELL_BUTTON_LOGGER_TEXT, DEFAULT_SHELL_BUTTON_TEST_ID,
    DEFAULT_WINDOW_TITLE,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
