//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

use crate::components::ButtonColor;

/// Default shell window size in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 360.0;

/// Default shell window title
pub const DEFAULT_WINDOW_TITLE: &str = "Button Kit";

/// Default configuration of the single button the shell composes
pub const DEFAULT_SHELL_BUTTON_LABEL: &str = "Confirm";
pub const DEFAULT_SHELL_BUTTON_COLOR: ButtonColor = ButtonColor::Warn;
pub const DEFAULT_SHELL_BUTTON_LOGGER_TEXT: &str = "Confirm pressed";
pub const DEFAULT_SHELL_BUTTON_TEST_ID: &str = "confirmBtn";
