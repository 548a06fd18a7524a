//! Configuration type definitions
//!
//! This module contains all the struct and enum definitions for configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults::*;
use crate::components::{ButtonColor, ButtonProps};

/// Shell window settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Window width in pixels (default: 480)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Window height in pixels (default: 360)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Window title (default: "Button Kit")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Configuration of the single button the shell composes.
///
/// Every field is optional; absent fields resolve to the shell defaults.
/// `color` is a variant name ("primary", "accent", "warn"); anything else
/// resolves to the default variant with a logged warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellButtonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_button: Option<ShellButtonConfig>,
}

impl Config {
    pub fn window_width(&self) -> f32 {
        self.window
            .as_ref()
            .and_then(|w| w.width)
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    pub fn window_height(&self) -> f32 {
        self.window
            .as_ref()
            .and_then(|w| w.height)
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }

    pub fn window_title(&self) -> String {
        self.window
            .as_ref()
            .and_then(|w| w.title.clone())
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string())
    }

    /// Resolve the shell button configuration to concrete props.
    pub fn shell_button_props(&self) -> ButtonProps {
        let button = self.shell_button.clone().unwrap_or_default();

        let color = match button.color {
            None => DEFAULT_SHELL_BUTTON_COLOR,
            Some(name) => ButtonColor::from_name(&name).unwrap_or_else(|| {
                warn!(color = %name, "Unknown button color in config, using default variant");
                ButtonColor::default()
            }),
        };

        ButtonProps {
            label: button
                .label
                .unwrap_or_else(|| DEFAULT_SHELL_BUTTON_LABEL.to_string())
                .into(),
            color,
            test_id: button
                .test_id
                .unwrap_or_else(|| DEFAULT_SHELL_BUTTON_TEST_ID.to_string())
                .into(),
            logger_text: button
                .logger_text
                .unwrap_or_else(|| DEFAULT_SHELL_BUTTON_LOGGER_TEXT.to_string())
                .into(),
        }
    }
}
