//! Button component stories for the storybook

use gpui::*;
use std::collections::HashMap;

use crate::components::{ActivationHandler, Button, ButtonColor, ButtonColors};
use crate::logging;
use crate::storybook::{
    code_block, story_container, story_divider, story_item, story_section, PlayOutcome, Story,
    StoryVariant,
};
use crate::theme::Theme;

/// Story showcasing the Button component
pub struct ButtonStory;

/// The three color-variant controls this story exercises, with the same
/// labels, logger texts and test ids its play step activates.
const VARIANT_ARGS: [(&str, ButtonColor, &str, &str); 3] = [
    (
        "Primary",
        ButtonColor::Primary,
        "This is a primary button",
        "primaryBtn",
    ),
    (
        "Accent",
        ButtonColor::Accent,
        "This is a accent button",
        "accentBtn",
    ),
    (
        "Warn",
        ButtonColor::Warn,
        "This is a warn button",
        "warnBtn",
    ),
];

/// Handler that feeds delivered payloads into the actions panel.
fn activation_logger(control: SharedString) -> ActivationHandler {
    Box::new(move |event, window, _cx| {
        logging::log_activation(&control, &event.payload);
        window.refresh();
    })
}

/// Build the interactive variant gallery.
pub(crate) fn variant_gallery(colors: ButtonColors) -> Vec<Button> {
    VARIANT_ARGS
        .into_iter()
        .map(|(label, color, logger_text, test_id)| {
            Button::new(colors)
                .label(label)
                .color(color)
                .logger_text(logger_text)
                .test_id(test_id)
                .on_activate(activation_logger(test_id.into()))
        })
        .collect()
}

impl Story for ButtonStory {
    fn id(&self) -> &'static str {
        "button"
    }

    fn name(&self) -> &'static str {
        "Button"
    }

    fn category(&self) -> &'static str {
        "Components"
    }

    fn render(&self, theme: &Theme) -> AnyElement {
        let colors = &theme.colors;
        let button_colors = ButtonColors::from_theme(theme);

        let mut variants = story_section(colors, "Color Variants");
        for button in variant_gallery(button_colors) {
            let label = button.props().label.to_string();
            variants = variants.child(story_item(colors, &label, button));
        }

        story_container(colors)
            .child(variants)
            .child(story_divider(colors))
            .child(
                story_section(colors, "Defaults")
                    .child(story_item(colors, "Untouched", Button::new(button_colors))),
            )
            .child(story_divider(colors))
            .child(story_section(colors, "Display Only").child(story_item(
                colors,
                "No handler",
                Button::new(button_colors)
                    .label("Display only")
                    .color(ButtonColor::Accent),
            )))
            .child(story_divider(colors))
            .child(story_section(colors, "Usage").child(code_block(
                colors,
                r#"
use crate::components::{Button, ButtonColor, ButtonColors};

let colors = ButtonColors::from_theme(&theme);

Button::new(colors)
    .label("Primary")
    .color(ButtonColor::Primary)
    .test_id("primaryBtn")
    .logger_text("This is a primary button")
    .on_activate(Box::new(|event, _, _| {
        println!("{}", event.payload);
    }))
"#,
            )))
            .into_any_element()
    }

    fn variants(&self) -> Vec<StoryVariant> {
        let mut variants: Vec<StoryVariant> = VARIANT_ARGS
            .into_iter()
            .map(|(label, color, logger_text, test_id)| StoryVariant {
                name: color.name().into(),
                description: Some(format!("{} filled button", label)),
                props: HashMap::from([
                    ("label".to_string(), label.to_string()),
                    ("color".to_string(), color.name().to_string()),
                    ("loggerText".to_string(), logger_text.to_string()),
                    ("testId".to_string(), test_id.to_string()),
                ]),
            })
            .collect();
        variants.push(StoryVariant {
            name: "default".into(),
            description: Some("Untouched defaults".into()),
            ..Default::default()
        });
        variants
    }

    fn play(&self) -> Vec<PlayOutcome> {
        let gallery = variant_gallery(ButtonColors::default());

        // Locate each control by its test id and activate it exactly once
        ["primaryBtn", "accentBtn", "warnBtn"]
            .into_iter()
            .filter_map(|test_id| {
                let button = gallery.iter().find(|b| b.control_id().as_ref() == test_id)?;
                let event = button.simulate_activation()?;
                Some(PlayOutcome {
                    control: button.control_id(),
                    payload: event.payload,
                })
            })
            .collect()
    }
}
