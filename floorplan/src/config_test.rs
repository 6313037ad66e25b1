#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_values() {
    let config = EditorConfig::default();
    assert_eq!(config.grid_size, 20.0);
    assert_eq!(config.angle_step_deg, 45.0);
    assert_eq!(config.default_thickness.get(), 2.0);
    assert_eq!(config.default_style, WallStyle::Solid);
    assert_eq!((config.min_guests, config.max_guests), (1, 20));
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    let config = EditorConfig::from_json("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = EditorConfig::from_json(r#"{ "grid_size": 25, "default_style": "dashed" }"#).unwrap();
    assert_eq!(config.grid_size, 25.0);
    assert_eq!(config.default_style, WallStyle::Dashed);
    assert_eq!(config.angle_step_deg, 45.0);
}

#[test]
fn from_json_clamps_thickness() {
    let config = EditorConfig::from_json(r#"{ "default_thickness": 20 }"#).unwrap();
    assert_eq!(config.default_thickness.get(), 8.0);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(EditorConfig::from_json("{ grid"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_zero_grid() {
    assert!(matches!(EditorConfig::from_json(r#"{ "grid_size": 0 }"#), Err(ConfigError::GridSize(_))));
}

#[test]
fn from_json_rejects_bad_angle_step() {
    assert!(matches!(EditorConfig::from_json(r#"{ "angle_step_deg": 0 }"#), Err(ConfigError::AngleStep(_))));
    assert!(matches!(EditorConfig::from_json(r#"{ "angle_step_deg": 270 }"#), Err(ConfigError::AngleStep(_))));
}

#[test]
fn from_json_rejects_inverted_guest_bounds() {
    let err = EditorConfig::from_json(r#"{ "min_guests": 10, "max_guests": 2 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::GuestBounds { min: 10, max: 2 }));
}
