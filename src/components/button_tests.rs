//! Unit tests for the Button prop/event contract.
//!
//! Separated from button.rs; render-path behavior is exercised via the
//! storybook binary, these tests cover the pure configuration and
//! activation seams.

use gpui::ElementId;

use super::button::{Button, ButtonColor, ButtonColors, ButtonProps};
use crate::theme::{ColorScheme, Theme};

#[test]
fn test_props_defaults() {
    let props = ButtonProps::default();
    assert_eq!(props.label.as_ref(), "Button");
    assert_eq!(props.color, ButtonColor::Primary);
    assert_eq!(props.test_id.as_ref(), "");
    assert_eq!(props.logger_text.as_ref(), "");
}

#[test]
fn test_builder_overrides() {
    let button = Button::new(ButtonColors::default())
        .label("Accent")
        .color(ButtonColor::Accent)
        .test_id("accentBtn")
        .logger_text("This is a accent button");

    let props = button.props();
    assert_eq!(props.label.as_ref(), "Accent");
    assert_eq!(props.color, ButtonColor::Accent);
    assert_eq!(props.test_id.as_ref(), "accentBtn");
    assert_eq!(props.logger_text.as_ref(), "This is a accent button");
}

#[test]
fn test_color_from_name() {
    assert_eq!(ButtonColor::from_name("primary"), Some(ButtonColor::Primary));
    assert_eq!(ButtonColor::from_name("Accent"), Some(ButtonColor::Accent));
    assert_eq!(ButtonColor::from_name("WARN"), Some(ButtonColor::Warn));
    assert_eq!(ButtonColor::from_name("danger"), None);
    assert_eq!(ButtonColor::from_name(""), None);
}

#[test]
fn test_color_name_roundtrip() {
    for color in [ButtonColor::Primary, ButtonColor::Accent, ButtonColor::Warn] {
        assert_eq!(ButtonColor::from_name(color.name()), Some(color));
    }
}

#[test]
fn test_fill_selection_matches_palette() {
    let theme = Theme {
        colors: ColorScheme::dark_default(),
    };
    let colors = ButtonColors::from_theme(&theme);
    let palette = &theme.colors.palette;

    assert_eq!(
        colors.fill_for(ButtonColor::Primary),
        (palette.primary, palette.primary_hover)
    );
    assert_eq!(
        colors.fill_for(ButtonColor::Accent),
        (palette.accent, palette.accent_hover)
    );
    assert_eq!(
        colors.fill_for(ButtonColor::Warn),
        (palette.warn, palette.warn_hover)
    );
}

#[test]
fn test_element_id_uses_test_id() {
    let button = Button::new(ButtonColors::default())
        .label("Primary")
        .test_id("primaryBtn");
    assert_eq!(button.element_id(), ElementId::Name("primaryBtn".into()));
    assert_eq!(button.control_id().as_ref(), "primaryBtn");
}

#[test]
fn test_element_id_falls_back_to_label() {
    let button = Button::new(ButtonColors::default()).label("Submit");
    assert_eq!(button.element_id(), ElementId::Name("Submit".into()));
    assert_eq!(button.control_id().as_ref(), "Submit");
}

#[test]
fn test_activation_event_carries_logger_text() {
    let button = Button::new(ButtonColors::default()).logger_text("hello");
    assert_eq!(button.activation_event().payload.as_ref(), "hello");
}

#[test]
fn test_display_only_button_delivers_nothing() {
    let button = Button::new(ButtonColors::default()).logger_text("unseen");
    assert_eq!(button.simulate_activation(), None);
}

#[test]
fn test_one_event_per_activation() {
    let button = Button::new(ButtonColors::default())
        .logger_text("tick")
        .on_activate(Box::new(|_, _, _| {}));

    let first = button.simulate_activation().expect("handler registered");
    let second = button.simulate_activation().expect("handler registered");
    assert_eq!(first.payload.as_ref(), "tick");
    assert_eq!(second.payload.as_ref(), "tick");
}

#[test]
fn test_primary_scenario() {
    let button = Button::new(ButtonColors::default())
        .label("Primary")
        .color(ButtonColor::Primary)
        .logger_text("This is a primary button")
        .test_id("primaryBtn")
        .on_activate(Box::new(|_, _, _| {}));

    assert_eq!(button.element_id(), ElementId::Name("primaryBtn".into()));
    let event = button.simulate_activation().expect("handler registered");
    assert_eq!(event.payload.as_ref(), "This is a primary button");
}

#[test]
fn test_defaults_scenario() {
    let button = Button::new(ButtonColors::default());
    assert_eq!(button.props().label.as_ref(), "Button");
    assert_eq!(button.props().color, ButtonColor::Primary);
    // No handler registered, no events prior to (or upon) activation
    assert_eq!(button.simulate_activation(), None);
}
