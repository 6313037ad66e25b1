//! Bottom status bar showing save status and canvas telemetry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders low-frequency editor telemetry so staff can see whether their
//! changes reached the server without opening additional panels.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use floorplan::camera::Point;
use floorplan::engine::EditorCore;

use crate::state::canvas_view::CanvasViewState;
use crate::state::session::SessionState;

/// Status bar at the bottom of the editor page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let status = move || session.with(SessionState::status_label);
    let cursor = move || format_cursor(canvas_view.with(|v| v.cursor_world));
    let zoom = move || format_zoom(editor.with(|core| core.camera.zoom));
    let counts = move || editor.with(|core| format_counts(core.floor.tables.len(), core.floor.walls.len()));

    view! {
        <div class="status-bar">
            <span class="status-bar__item">{status}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__item">{counts}</span>
            <span class="status-bar__item">{cursor}</span>
            <span class="status-bar__item">{zoom}</span>
        </div>
    }
}

fn format_cursor(point: Option<Point>) -> String {
    point.map_or_else(|| "(-, -)".to_owned(), |p| format!("({}, {})", round_coord(p.x), round_coord(p.y)))
}

#[allow(clippy::cast_possible_truncation)]
fn format_zoom(zoom: f64) -> String {
    format!("{}%", (zoom * 100.0).round() as i64)
}

fn format_counts(tables: usize, walls: usize) -> String {
    format!("{tables} tables · {walls} walls")
}

#[allow(clippy::cast_possible_truncation)]
fn round_coord(value: f64) -> i64 {
    value.round() as i64
}
