//! Reusable Button component for Button Kit
//!
//! This module provides a theme-aware button component with semantic color
//! variants, hover states, harness-visible test ids, and an activation
//! event channel that delivers a caller-supplied payload on each click.

use gpui::*;
use std::rc::Rc;

/// Semantic color variant, selects visual styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    /// Primary variant (indigo fill)
    #[default]
    Primary,
    /// Accent variant (pink fill)
    Accent,
    /// Warn variant (red fill)
    Warn,
}

impl ButtonColor {
    /// Resolve a variant from its lowercase name ("primary", "accent", "warn").
    /// Matching is case-insensitive; unknown names yield None.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "accent" => Some(Self::Accent),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Warn => "warn",
        }
    }
}

/// Pre-computed colors for Button rendering
///
/// Holds the palette slice needed for button rendering, allowing efficient
/// use in closures without cloning the full theme. Which pair applies is
/// decided at render time by the button's [`ButtonColor`].
#[derive(Clone, Copy, Debug)]
pub struct ButtonColors {
    pub primary: u32,
    pub primary_hover: u32,
    pub accent: u32,
    pub accent_hover: u32,
    pub warn: u32,
    pub warn_hover: u32,
    /// Label text color on top of any variant fill
    pub text: u32,
}

impl ButtonColors {
    /// Create ButtonColors from theme reference
    pub fn from_theme(theme: &crate::theme::Theme) -> Self {
        let palette = &theme.colors.palette;
        Self {
            primary: palette.primary,
            primary_hover: palette.primary_hover,
            accent: palette.accent,
            accent_hover: palette.accent_hover,
            warn: palette.warn,
            warn_hover: palette.warn_hover,
            text: theme.colors.text.on_fill,
        }
    }

    /// The (fill, hover fill) pair for a variant
    pub fn fill_for(&self, color: ButtonColor) -> (u32, u32) {
        match color {
            ButtonColor::Primary => (self.primary, self.primary_hover),
            ButtonColor::Accent => (self.accent, self.accent_hover),
            ButtonColor::Warn => (self.warn, self.warn_hover),
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_theme(&crate::theme::Theme::default())
    }
}

/// Configuration inputs of a [`Button`], owned by the instantiating parent.
///
/// Every field has a default; the button only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visible label text (default: "Button")
    pub label: SharedString,
    /// Styling selector (default: Primary)
    pub color: ButtonColor,
    /// Harness-visible identifier; empty means none supplied
    pub test_id: SharedString,
    /// Payload delivered on each activation (default: empty)
    pub logger_text: SharedString,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: "Button".into(),
            color: ButtonColor::default(),
            test_id: "".into(),
            logger_text: "".into(),
        }
    }
}

/// The single value delivered per activation: the button's current
/// `logger_text`. Created at activation, never buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    pub payload: SharedString,
}

impl ActivationEvent {
    pub fn new(payload: impl Into<SharedString>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Callback type for the `activated` channel
pub type ActivationHandler = Box<dyn Fn(&ActivationEvent, &mut Window, &mut App) + 'static>;

/// A reusable button component for interactive actions
///
/// Supports:
/// - Label text (default "Button")
/// - Three semantic color variants: Primary, Accent, Warn
/// - A test id exposed as the element id for automated harnesses
/// - An activation handler receiving `logger_text` once per click
///
/// A button without a registered handler is the display-only
/// configuration: it renders identically but activation delivers nothing.
///
/// # Example
/// ```ignore
/// let colors = ButtonColors::from_theme(&theme);
/// Button::new(colors)
///     .label("Primary")
///     .color(ButtonColor::Primary)
///     .test_id("primaryBtn")
///     .logger_text("This is a primary button")
///     .on_activate(Box::new(|event, _, _| println!("{}", event.payload)))
/// ```
#[derive(IntoElement)]
pub struct Button {
    props: ButtonProps,
    colors: ButtonColors,
    on_activate: Option<Rc<ActivationHandler>>,
}

impl Button {
    /// Create a button with default props and pre-computed colors
    pub fn new(colors: ButtonColors) -> Self {
        Self {
            props: ButtonProps::default(),
            colors,
            on_activate: None,
        }
    }

    /// Create a button from an already-resolved props bundle
    pub fn from_props(props: ButtonProps, colors: ButtonColors) -> Self {
        Self {
            props,
            colors,
            on_activate: None,
        }
    }

    /// Set the label text
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.props.label = label.into();
        self
    }

    /// Set the color variant
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.props.color = color;
        self
    }

    /// Set the harness-visible test id
    pub fn test_id(mut self, test_id: impl Into<SharedString>) -> Self {
        self.props.test_id = test_id.into();
        self
    }

    /// Set the payload delivered on activation
    pub fn logger_text(mut self, logger_text: impl Into<SharedString>) -> Self {
        self.props.logger_text = logger_text.into();
        self
    }

    /// Register the activation handler
    pub fn on_activate(mut self, handler: ActivationHandler) -> Self {
        self.on_activate = Some(Rc::new(handler));
        self
    }

    /// The props bundle as currently configured
    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// The identifier automated harnesses locate this control by:
    /// the test id when supplied, the label otherwise.
    pub fn control_id(&self) -> SharedString {
        if self.props.test_id.is_empty() {
            self.props.label.clone()
        } else {
            self.props.test_id.clone()
        }
    }

    /// The rendered element's id. Interactive gpui elements require an
    /// identity, so an empty test id falls back to a label-derived id.
    pub fn element_id(&self) -> ElementId {
        ElementId::Name(self.control_id())
    }

    /// The event one activation delivers
    pub fn activation_event(&self) -> ActivationEvent {
        ActivationEvent::new(self.props.logger_text.clone())
    }

    /// Simulate a single user activation without a window.
    ///
    /// Returns the event the registered handler would receive, or None for
    /// a display-only button. Each call models exactly one activation.
    pub fn simulate_activation(&self) -> Option<ActivationEvent> {
        self.on_activate.as_ref().map(|_| self.activation_event())
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (fill, fill_hover) = self.colors.fill_for(self.props.color);
        let text_color = self.colors.text;
        let event = self.activation_event();
        let id = self.element_id();
        let on_activate = self.on_activate;

        let mut button = div()
            .id(id)
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .px(px(16.))
            .py(px(6.))
            .rounded(px(4.))
            .bg(rgb(fill))
            .text_color(rgb(text_color))
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .child(self.props.label.clone())
            .hover(move |s| s.bg(rgb(fill_hover)));

        // One synchronous emission per click; no handler means display-only
        if let Some(handler) = on_activate {
            button = button.on_click(move |_click, window, cx| {
                handler(&event, window, cx);
            });
        }

        button
    }
}

// Note: render-path tests are omitted for this module; click wiring is
// exercised through the storybook binary. The prop/event contract is unit
// tested in button_tests.rs via the simulation seam.
