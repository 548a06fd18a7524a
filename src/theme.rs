//! Theme definitions and loading for Button Kit.
//!
//! A theme is a serde-deserializable bundle of hex colors. The palette
//! section carries the three semantic variants the Button component can be
//! styled with (primary / accent / warn); the rest is chrome for the shell
//! and storybook windows.
//!
//! Themes load from ~/.button-kit/theme.json; any failure falls back to the
//! defaults for the detected system appearance and is logged, never raised.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::error::UiKitError;

/// Hex color representation (u32)
pub type HexColor = u32;

/// Background color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Main window background
    pub main: HexColor,
    /// Title bar background
    pub title_bar: HexColor,
    /// Panel background (activation log, storybook sidebar)
    pub panel: HexColor,
}

/// Text color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary text color
    pub primary: HexColor,
    /// Secondary text color
    pub secondary: HexColor,
    /// Muted text color (labels, captions)
    pub muted: HexColor,
    /// Text rendered on top of filled palette colors
    pub on_fill: HexColor,
}

/// Semantic palette colors backing the button variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteColors {
    /// Primary variant fill (0x3f51b5 - indigo)
    pub primary: HexColor,
    /// Primary variant fill on hover
    #[serde(default = "default_primary_hover")]
    pub primary_hover: HexColor,
    /// Accent variant fill (0xff4081 - pink)
    pub accent: HexColor,
    /// Accent variant fill on hover
    #[serde(default = "default_accent_hover")]
    pub accent_hover: HexColor,
    /// Warn variant fill (0xf44336 - red)
    pub warn: HexColor,
    /// Warn variant fill on hover
    #[serde(default = "default_warn_hover")]
    pub warn_hover: HexColor,
}

fn default_primary_hover() -> HexColor {
    0x4d61c5
}
fn default_accent_hover() -> HexColor {
    0xff5a92
}
fn default_warn_hover() -> HexColor {
    0xf6574b
}

/// Border and UI element colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIColors {
    /// Border color
    pub border: HexColor,
    /// Divider color between panels
    pub divider: HexColor,
}

/// Complete color scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub palette: PaletteColors,
    pub ui: UIColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark_default()
    }
}

impl ColorScheme {
    pub fn dark_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0x1e1e1e,
                title_bar: 0x2d2d30,
                panel: 0x252525,
            },
            text: TextColors {
                primary: 0xffffff,
                secondary: 0xcccccc,
                muted: 0x888888,
                on_fill: 0xffffff,
            },
            palette: PaletteColors {
                primary: 0x3f51b5,
                primary_hover: 0x4d61c5,
                accent: 0xff4081,
                accent_hover: 0xff5a92,
                warn: 0xf44336,
                warn_hover: 0xf6574b,
            },
            ui: UIColors {
                border: 0x464647,
                divider: 0x3d3d3d,
            },
        }
    }

    pub fn light_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0xffffff,
                title_bar: 0xf3f3f3,
                panel: 0xf7f7f7,
            },
            text: TextColors {
                primary: 0x000000,
                secondary: 0x333333,
                muted: 0x777777,
                on_fill: 0xffffff,
            },
            palette: PaletteColors {
                primary: 0x3f51b5,
                primary_hover: 0x35459b,
                accent: 0xff4081,
                accent_hover: 0xe53670,
                warn: 0xf44336,
                warn_hover: 0xd8382d,
            },
            ui: UIColors {
                border: 0xd0d0d0,
                divider: 0xe0e0e0,
            },
        }
    }
}

/// Theme wraps the color scheme; loaded from disk or defaulted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: ColorScheme::dark_default(),
        }
    }
}

impl Theme {
    /// Theme for the detected system appearance
    pub fn system_default() -> Self {
        let colors = if detect_system_appearance() {
            ColorScheme::dark_default()
        } else {
            ColorScheme::light_default()
        };
        Theme { colors }
    }
}

/// Detect whether the system is in dark appearance.
///
/// Queries `defaults read -g AppleInterfaceStyle` on macOS; the key only
/// exists in dark mode. Any failure (including non-macOS hosts) is treated
/// as dark.
pub fn detect_system_appearance() -> bool {
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            String::from_utf8_lossy(&out.stdout).trim() == "Dark"
        }
        _ => true,
    }
}

/// Path of the user theme file (~/.button-kit/theme.json)
pub fn theme_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.button-kit/theme.json").as_ref())
}

/// Read and parse a theme file.
pub fn try_load_theme(path: &Path) -> crate::error::Result<Theme> {
    let contents = std::fs::read_to_string(path).map_err(|source| UiKitError::ThemeLoad {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str::<Theme>(&contents).map_err(|source| UiKitError::ThemeParse {
        path: path.display().to_string(),
        source,
    })
}

/// Load the user theme, falling back to system-appearance defaults.
///
/// Missing file is expected on first run and logged at info; read/parse
/// failures are logged as warnings. No error is raised to the caller.
pub fn load_theme() -> Theme {
    let path = theme_path();

    if !path.exists() {
        info!(path = %path.display(), "Theme file not found, using defaults based on system appearance");
        let theme = Theme::system_default();
        log_theme_config(&theme);
        return theme;
    }

    match try_load_theme(&path) {
        Ok(theme) => {
            info!(path = %path.display(), "Successfully loaded theme");
            log_theme_config(&theme);
            theme
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Falling back to default theme");
            let theme = Theme::system_default();
            log_theme_config(&theme);
            theme
        }
    }
}

fn log_theme_config(theme: &Theme) {
    debug!(
        background = format!("#{:06x}", theme.colors.background.main),
        primary = format!("#{:06x}", theme.colors.palette.primary),
        accent = format!("#{:06x}", theme.colors.palette.accent),
        warn = format!("#{:06x}", theme.colors.palette.warn),
        "Theme palette"
    );
}
