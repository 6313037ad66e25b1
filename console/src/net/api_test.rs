use super::*;

use uuid::Uuid;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn floor_endpoint_embeds_id() {
    let id = Uuid::nil();
    assert_eq!(floor_endpoint(id), "/api/floors/00000000-0000-0000-0000-000000000000");
}

#[test]
fn walls_endpoint_nests_under_floor() {
    let id = Uuid::new_v4();
    assert_eq!(walls_endpoint(id), format!("/api/floors/{id}/walls"));
}

#[test]
fn table_endpoint_nests_under_floor() {
    let floor = Uuid::new_v4();
    let table = Uuid::new_v4();
    assert_eq!(table_endpoint(floor, table), format!("/api/floors/{floor}/tables/{table}"));
}

#[test]
fn bookings_endpoint_is_top_level() {
    assert_eq!(BOOKINGS_ENDPOINT, "/api/bookings");
}

// =============================================================
// Messages and bodies
// =============================================================

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message("save wall", 500), "save wall failed: 500");
}

#[test]
fn move_body_serializes_coordinates_only() {
    let json = serde_json::to_value(MoveTableBody { x: 12.5, y: -3.0 }).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 12.5, "y": -3.0 }));
}

// =============================================================
// Server stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_floor_is_unavailable_off_browser() {
    let result = block_on(fetch_floor(Uuid::new_v4()));
    assert_eq!(result.unwrap_err(), "not available on server");
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
