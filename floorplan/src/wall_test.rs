#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn path_of(points: &[(f64, f64)]) -> WallPath {
    let mut path = WallPath::default();
    for &(x, y) in points {
        path.push(pt(x, y));
    }
    path
}

// =============================================================
// WallStyle
// =============================================================

#[test]
fn wall_style_default_is_solid() {
    assert_eq!(WallStyle::default(), WallStyle::Solid);
}

#[test]
fn wall_style_serializes_lowercase() {
    assert_eq!(serde_json::to_value(WallStyle::Dashed).unwrap(), serde_json::json!("dashed"));
    let parsed: WallStyle = serde_json::from_value(serde_json::json!("dotted")).unwrap();
    assert_eq!(parsed, WallStyle::Dotted);
}

#[test]
fn wall_style_rejects_typos() {
    assert!(serde_json::from_value::<WallStyle>(serde_json::json!("dashd")).is_err());
}

#[test]
fn wall_style_dash_patterns() {
    assert!(WallStyle::Solid.dash_pattern(2.0).is_empty());
    assert_eq!(WallStyle::Dotted.dash_pattern(2.0), vec![2.0, 4.0]);
    assert_eq!(WallStyle::Dashed.dash_pattern(2.0), vec![8.0, 4.0]);
}

#[test]
fn wall_style_all_in_toolbar_order() {
    let labels: Vec<_> = WallStyle::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Solid", "Dotted", "Dashed"]);
}

// =============================================================
// WallThickness
// =============================================================

#[test]
fn thickness_default_is_two() {
    assert_eq!(WallThickness::default().get(), 2.0);
}

#[test]
fn thickness_clamps_to_bounds() {
    assert_eq!(WallThickness::new(0.0).get(), 0.5);
    assert_eq!(WallThickness::new(-3.0).get(), 0.5);
    assert_eq!(WallThickness::new(100.0).get(), 8.0);
}

#[test]
fn thickness_rounds_to_half_steps() {
    assert_eq!(WallThickness::new(2.2).get(), 2.0);
    assert_eq!(WallThickness::new(2.3).get(), 2.5);
    assert_eq!(WallThickness::new(7.9).get(), 8.0);
}

#[test]
fn thickness_non_finite_falls_back_to_default() {
    assert_eq!(WallThickness::new(f64::NAN).get(), 2.0);
    assert_eq!(WallThickness::new(f64::INFINITY).get(), 2.0);
}

#[test]
fn thickness_deserializes_through_clamp() {
    let t: WallThickness = serde_json::from_value(serde_json::json!(12.0)).unwrap();
    assert_eq!(t.get(), 8.0);
    assert_eq!(serde_json::to_value(WallThickness::new(3.5)).unwrap(), serde_json::json!(3.5));
}

// =============================================================
// WallPath
// =============================================================

#[test]
fn path_push_ignores_consecutive_duplicates() {
    let mut path = WallPath::default();
    assert!(path.push(pt(0.0, 0.0)));
    assert!(!path.push(pt(0.0, 0.0)));
    assert!(path.push(pt(10.0, 0.0)));
    assert!(path.push(pt(0.0, 0.0)));
    assert_eq!(path.len(), 3);
}

#[test]
fn path_pop_removes_last_point() {
    let mut path = path_of(&[(0.0, 0.0), (5.0, 5.0)]);
    assert_eq!(path.pop(), Some(pt(5.0, 5.0)));
    assert_eq!(path.last(), Some(pt(0.0, 0.0)));
    assert_eq!(path.pop(), Some(pt(0.0, 0.0)));
    assert_eq!(path.pop(), None);
    assert!(path.is_empty());
}

#[test]
fn path_preview_is_not_a_point() {
    let mut path = path_of(&[(0.0, 0.0)]);
    path.set_preview(Some(pt(3.0, 3.0)));
    assert_eq!(path.len(), 1);
    assert_eq!(path.preview(), Some(pt(3.0, 3.0)));
}

#[test]
fn to_wall_open_with_one_point_is_rejected() {
    let path = path_of(&[(0.0, 0.0)]);
    let err = path.to_wall(WallShape::Open, WallThickness::default(), WallStyle::Solid).unwrap_err();
    assert_eq!(err, EditorError::InsufficientPoints { needed: 2, got: 1 });
    assert_eq!(path.len(), 1);
}

#[test]
fn to_wall_open_keeps_exact_points_and_attributes() {
    let path = path_of(&[(0.0, 0.0), (10.0, 0.0)]);
    let wall = path.to_wall(WallShape::Open, WallThickness::new(2.0), WallStyle::Dashed).unwrap();
    assert_eq!(wall.points, vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
    assert_eq!(wall.thickness.get(), 2.0);
    assert_eq!(wall.style, WallStyle::Dashed);
    assert_eq!(wall.shape, WallShape::Open);
}

#[test]
fn to_wall_closed_needs_three_points() {
    let path = path_of(&[(0.0, 0.0), (10.0, 0.0)]);
    let err = path.to_wall(WallShape::Closed, WallThickness::default(), WallStyle::Solid).unwrap_err();
    assert_eq!(err, EditorError::InsufficientPoints { needed: 3, got: 2 });
}

// =============================================================
// Wall geometry
// =============================================================

#[test]
fn open_wall_segments_and_length() {
    let wall = path_of(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)])
        .to_wall(WallShape::Open, WallThickness::default(), WallStyle::Solid)
        .unwrap();
    assert_eq!(wall.segments().len(), 2);
    assert!((wall.length() - 11.0).abs() < 1e-9);
}

#[test]
fn closed_wall_includes_closing_segment() {
    let wall = path_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
        .to_wall(WallShape::Closed, WallThickness::default(), WallStyle::Solid)
        .unwrap();
    let segments = wall.segments();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[3], (pt(0.0, 10.0), pt(0.0, 0.0)));
    assert!((wall.length() - 40.0).abs() < 1e-9);
}

#[test]
fn wall_json_roundtrip_defaults_shape_to_open() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "points": [{ "x": 0.0, "y": 0.0 }, { "x": 5.0, "y": 0.0 }],
        "thickness": 1.5,
        "style": "solid",
    });
    let wall: Wall = serde_json::from_value(json).unwrap();
    assert_eq!(wall.shape, WallShape::Open);
    assert_eq!(wall.thickness.get(), 1.5);
}
