#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::wall::{WallPath, WallShape, WallStyle, WallThickness};

// =============================================================
// Helpers
// =============================================================

fn make_table(status: TableStatus) -> FloorElement {
    FloorElement {
        id: Uuid::new_v4(),
        name: "T1".to_owned(),
        category: "vip".to_owned(),
        capacity: 6,
        price: 250.0,
        status,
        special_features: None,
        x: 0.0,
        y: 0.0,
        width: 60.0,
        height: 40.0,
    }
}

fn make_wall() -> Wall {
    let mut path = WallPath::default();
    path.push(Point::new(0.0, 0.0));
    path.push(Point::new(10.0, 0.0));
    path.to_wall(WallShape::Open, WallThickness::default(), WallStyle::Solid)
        .unwrap()
}

// =============================================================
// TableStatus
// =============================================================

#[test]
fn status_only_available_is_available() {
    assert!(TableStatus::Available.is_available());
    assert!(!TableStatus::Booked.is_available());
    assert!(!TableStatus::Reserved.is_available());
    assert!(!TableStatus::Unavailable.is_available());
}

#[test]
fn status_parses_lowercase_strings() {
    let s: TableStatus = serde_json::from_value(json!("booked")).unwrap();
    assert_eq!(s, TableStatus::Booked);
    assert_eq!(serde_json::to_value(TableStatus::Available).unwrap(), json!("available"));
}

#[test]
fn status_unknown_string_is_unavailable() {
    let s: TableStatus = serde_json::from_value(json!("maintenance")).unwrap();
    assert_eq!(s, TableStatus::Unavailable);
    let s: TableStatus = serde_json::from_value(json!("Available")).unwrap();
    assert_eq!(s, TableStatus::Unavailable);
}

// =============================================================
// FloorElement
// =============================================================

#[test]
fn element_parses_camel_case_wire_format() {
    let value = json!({
        "id": "00000000-0000-0000-0000-00000000000a",
        "name": "Booth 3",
        "category": "booth",
        "capacity": 8,
        "price": 400.0,
        "status": "available",
        "specialFeatures": "Bottle service",
    });
    let el: FloorElement = serde_json::from_value(value).unwrap();
    assert_eq!(el.name, "Booth 3");
    assert_eq!(el.special_features.as_deref(), Some("Bottle service"));
    assert_eq!(el.width, 60.0);
    assert_eq!(el.x, 0.0);
}

#[test]
fn element_contains_respects_slop() {
    let el = make_table(TableStatus::Available);
    assert!(el.contains(Point::new(30.0, 20.0), 0.0));
    assert!(!el.contains(Point::new(62.0, 20.0), 0.0));
    assert!(el.contains(Point::new(62.0, 20.0), 4.0));
}

#[test]
fn element_center() {
    let el = make_table(TableStatus::Available);
    assert_eq!(el.center(), Point::new(30.0, 20.0));
}

// =============================================================
// Floor
// =============================================================

#[test]
fn floor_default_is_empty() {
    let floor = Floor::default();
    assert!(floor.tables.is_empty());
    assert!(floor.walls.is_empty());
    assert_eq!(floor.available_count(), 0);
}

#[test]
fn floor_table_lookup_by_id() {
    let mut floor = Floor::default();
    let t = make_table(TableStatus::Available);
    let id = t.id;
    floor.replace_tables(vec![t]);
    assert_eq!(floor.table(&id).map(|t| t.capacity), Some(6));
    assert!(floor.table(&Uuid::new_v4()).is_none());
}

#[test]
fn floor_available_count_tracks_status() {
    let mut floor = Floor::default();
    let a = make_table(TableStatus::Available);
    let b = make_table(TableStatus::Available);
    let c = make_table(TableStatus::Booked);
    let a_id = a.id;
    floor.replace_tables(vec![a, b, c]);
    assert_eq!(floor.available_count(), 2);
    assert!(floor.set_status(&a_id, TableStatus::Booked));
    assert_eq!(floor.available_count(), 1);
}

#[test]
fn floor_set_status_unknown_id_returns_false() {
    let mut floor = Floor::default();
    assert!(!floor.set_status(&Uuid::new_v4(), TableStatus::Booked));
}

#[test]
fn floor_move_table() {
    let mut floor = Floor::default();
    let t = make_table(TableStatus::Available);
    let id = t.id;
    floor.replace_tables(vec![t]);
    assert!(floor.move_table(&id, 100.0, 50.0));
    let moved = floor.table(&id).unwrap();
    assert_eq!((moved.x, moved.y), (100.0, 50.0));
    assert!(!floor.move_table(&Uuid::new_v4(), 0.0, 0.0));
}

#[test]
fn floor_replace_tables_drops_old_entries() {
    let mut floor = Floor::default();
    let old = make_table(TableStatus::Available);
    let old_id = old.id;
    floor.replace_tables(vec![old]);
    floor.replace_tables(vec![make_table(TableStatus::Booked)]);
    assert!(floor.table(&old_id).is_none());
    assert_eq!(floor.tables.len(), 1);
}

#[test]
fn floor_add_wall_keeps_existing_walls() {
    let mut floor = Floor::default();
    floor.add_wall(make_wall());
    floor.add_wall(make_wall());
    assert_eq!(floor.walls.len(), 2);
}

#[test]
fn floor_parses_without_walls() {
    let value = json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "name": "Main Floor",
        "tables": [],
    });
    let floor: Floor = serde_json::from_value(value).unwrap();
    assert_eq!(floor.name, "Main Floor");
    assert!(floor.walls.is_empty());
}
