use super::*;
use crate::components::ButtonColor;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.window.is_none());
    assert!(config.shell_button.is_none());
    assert_eq!(config.window_width(), DEFAULT_WINDOW_WIDTH);
    assert_eq!(config.window_height(), DEFAULT_WINDOW_HEIGHT);
    assert_eq!(config.window_title(), DEFAULT_WINDOW_TITLE);
}

#[test]
fn test_default_shell_button_props() {
    let props = Config::default().shell_button_props();
    assert_eq!(props.label.as_ref(), DEFAULT_SHELL_BUTTON_LABEL);
    assert_eq!(props.color, ButtonColor::Warn);
    assert_eq!(props.logger_text.as_ref(), DEFAULT_SHELL_BUTTON_LOGGER_TEXT);
    assert_eq!(props.test_id.as_ref(), DEFAULT_SHELL_BUTTON_TEST_ID);
}

#[test]
fn test_config_serialization() {
    let config = Config {
        window: Some(WindowConfig {
            width: Some(640.0),
            height: Some(400.0),
            title: Some("Demo".to_string()),
        }),
        shell_button: Some(ShellButtonConfig {
            label: Some("Go".to_string()),
            color: Some("accent".to_string()),
            logger_text: Some("go pressed".to_string()),
            test_id: Some("goBtn".to_string()),
        }),
    };

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.window_width(), 640.0);
    assert_eq!(deserialized.window_title(), "Demo");
    let props = deserialized.shell_button_props();
    assert_eq!(props.label.as_ref(), "Go");
    assert_eq!(props.color, ButtonColor::Accent);
    assert_eq!(props.test_id.as_ref(), "goBtn");
}

#[test]
fn test_camel_case_field_names() {
    let json = r#"{
        "window": {"width": 500.0},
        "shellButton": {"loggerText": "hi", "testId": "btn"}
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.window_width(), 500.0);
    // Unspecified fields fall through to defaults
    assert_eq!(config.window_height(), DEFAULT_WINDOW_HEIGHT);

    let props = config.shell_button_props();
    assert_eq!(props.logger_text.as_ref(), "hi");
    assert_eq!(props.test_id.as_ref(), "btn");
    assert_eq!(props.label.as_ref(), DEFAULT_SHELL_BUTTON_LABEL);
}

#[test]
fn test_color_name_resolution() {
    for (name, expected) in [
        ("primary", ButtonColor::Primary),
        ("accent", ButtonColor::Accent),
        ("warn", ButtonColor::Warn),
        ("WARN", ButtonColor::Warn),
    ] {
        let config = Config {
            window: None,
            shell_button: Some(ShellButtonConfig {
                color: Some(name.to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(config.shell_button_props().color, expected, "{}", name);
    }
}

#[test]
fn test_unknown_color_falls_back_to_default_variant() {
    let config = Config {
        window: None,
        shell_button: Some(ShellButtonConfig {
            color: Some("chartreuse".to_string()),
            ..Default::default()
        }),
    };
    assert_eq!(config.shell_button_props().color, ButtonColor::Primary);
}

#[test]
fn test_try_load_config_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"shellButton": {"label": "Run"}}"#)
        .unwrap();

    let config = try_load_config(file.path()).unwrap();
    assert_eq!(config.shell_button_props().label.as_ref(), "Run");
}

#[test]
fn test_try_load_config_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json at all").unwrap();

    assert!(try_load_config(file.path()).is_err());
}

#[test]
fn test_try_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(try_load_config(&dir.path().join("missing.json")).is_err());
}
