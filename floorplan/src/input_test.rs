use super::*;

// =============================================================
// DrawingMode
// =============================================================

#[test]
fn drawing_mode_default_is_select() {
    assert_eq!(DrawingMode::default(), DrawingMode::Select);
}

#[test]
fn drawing_mode_variants_are_distinct() {
    assert_ne!(DrawingMode::Select, DrawingMode::Wall);
}

#[test]
fn drawing_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_value(DrawingMode::Wall).unwrap(), serde_json::json!("wall"));
    let parsed: DrawingMode = serde_json::from_value(serde_json::json!("select")).unwrap();
    assert_eq!(parsed, DrawingMode::Select);
}

#[test]
fn drawing_mode_rejects_unknown_string() {
    let parsed = serde_json::from_value::<DrawingMode>(serde_json::json!("walls"));
    assert!(parsed.is_err());
}

#[test]
fn drawing_mode_labels() {
    assert_eq!(DrawingMode::Select.label(), "Select");
    assert_eq!(DrawingMode::Wall.label(), "Draw Wall");
}

// =============================================================
// Modifiers / Key
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
}

#[test]
fn key_is_matches_exact_name() {
    let key = Key("Escape".to_owned());
    assert!(key.is("Escape"));
    assert!(!key.is("escape"));
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_default_is_select_without_selection() {
    let ui = UiState::default();
    assert_eq!(ui.mode, DrawingMode::Select);
    assert!(ui.selected_id.is_none());
    assert_eq!(ui.wall_style, WallStyle::Solid);
}

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(matches!(state, InputState::Idle));
    assert!(!state.is_drawing_wall());
    assert!(state.wall_path().is_none());
}

#[test]
fn input_state_drawing_wall_exposes_path() {
    let mut path = WallPath::default();
    path.push(Point::new(1.0, 2.0));
    let state = InputState::DrawingWall { path };
    assert!(state.is_drawing_wall());
    assert_eq!(state.wall_path().map(WallPath::len), Some(1));
}
