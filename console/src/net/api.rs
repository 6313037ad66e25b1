//! REST API helpers for the floor and booking endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed save
//! or booking degrades into a notice without crashing the editor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use floorplan::booking::BookingRequest;
use floorplan::doc::{ElementId, Floor, FloorId};
use floorplan::wall::Wall;

#[cfg(any(test, feature = "hydrate"))]
const BOOKINGS_ENDPOINT: &str = "/api/bookings";

#[cfg(any(test, feature = "hydrate"))]
fn floor_endpoint(floor_id: FloorId) -> String {
    format!("/api/floors/{floor_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn walls_endpoint(floor_id: FloorId) -> String {
    format!("/api/floors/{floor_id}/walls")
}

#[cfg(any(test, feature = "hydrate"))]
fn table_endpoint(floor_id: FloorId, table_id: ElementId) -> String {
    format!("/api/floors/{floor_id}/tables/{table_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Body of a table move.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Serialize)]
struct MoveTableBody {
    x: f64,
    y: f64,
}

/// Fetch a floor with its tables and walls from `/api/floors/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_floor(floor_id: FloorId) -> Result<Floor, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&floor_endpoint(floor_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch floor", resp.status()));
        }
        resp.json::<Floor>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = floor_id;
        Err("not available on server".to_owned())
    }
}

/// Persist a committed wall via `POST /api/floors/{id}/walls`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn save_wall(floor_id: FloorId, wall: &Wall) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&walls_endpoint(floor_id))
            .json(wall)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("save wall", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (floor_id, wall);
        Err("not available on server".to_owned())
    }
}

/// Persist a table's new position via `PATCH /api/floors/{id}/tables/{table_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn move_table(floor_id: FloorId, table_id: ElementId, x: f64, y: f64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&table_endpoint(floor_id, table_id))
            .json(&MoveTableBody { x, y })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("move table", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (floor_id, table_id, x, y);
        Err("not available on server".to_owned())
    }
}

/// Submit a booking via `POST /api/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the table was taken meanwhile.
pub async fn book_table(request: &BookingRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(BOOKINGS_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("booking", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
