//! Tests for the Button story registration and its play step.

use crate::components::ButtonColors;
use crate::stories::button_stories::variant_gallery;
use crate::storybook::{all_categories, find_story, Story};

use super::ButtonStory;

#[test]
fn test_story_is_registered() {
    let entry = find_story("button").expect("button story registered");
    assert_eq!(entry.story.name(), "Button");
    assert_eq!(entry.story.category(), "Components");
}

#[test]
fn test_unknown_story_is_absent() {
    assert!(find_story("carousel").is_none());
}

#[test]
fn test_categories_include_components() {
    assert!(all_categories().contains(&"Components"));
}

#[test]
fn test_variants_cover_color_set() {
    let names: Vec<String> = ButtonStory
        .variants()
        .into_iter()
        .map(|v| v.name)
        .collect();
    for expected in ["primary", "accent", "warn", "default"] {
        assert!(names.iter().any(|n| n == expected), "{} missing", expected);
    }
}

#[test]
fn test_variant_props_carry_story_args() {
    let variants = ButtonStory.variants();
    let primary = variants
        .iter()
        .find(|v| v.name == "primary")
        .expect("primary variant");
    assert_eq!(primary.props.get("label").unwrap(), "Primary");
    assert_eq!(
        primary.props.get("loggerText").unwrap(),
        "This is a primary button"
    );
    assert_eq!(primary.props.get("testId").unwrap(), "primaryBtn");
}

#[test]
fn test_play_activates_each_variant_once() {
    let outcomes = ButtonStory.play();
    assert_eq!(outcomes.len(), 3);

    assert_eq!(outcomes[0].control.as_ref(), "primaryBtn");
    assert_eq!(outcomes[0].payload.as_ref(), "This is a primary button");
    assert_eq!(outcomes[1].control.as_ref(), "accentBtn");
    assert_eq!(outcomes[1].payload.as_ref(), "This is a accent button");
    assert_eq!(outcomes[2].control.as_ref(), "warnBtn");
    assert_eq!(outcomes[2].payload.as_ref(), "This is a warn button");
}

#[test]
fn test_gallery_controls_locatable_by_test_id() {
    let gallery = variant_gallery(ButtonColors::default());
    assert_eq!(gallery.len(), 3);
    for test_id in ["primaryBtn", "accentBtn", "warnBtn"] {
        assert!(
            gallery.iter().any(|b| b.control_id().as_ref() == test_id),
            "{} not locatable",
            test_id
        );
    }
}
