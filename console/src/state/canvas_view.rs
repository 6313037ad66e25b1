//! Canvas telemetry used by non-canvas UI surfaces.
//!
//! ARCHITECTURE
//! ============
//! `FloorCanvas` publishes the cursor and pointer position here so the status
//! bar can render them without touching the canvas element.

use floorplan::camera::Point;

/// Live canvas telemetry consumed by the status bar.
#[derive(Clone, Debug)]
pub struct CanvasViewState {
    /// CSS cursor requested by the editor core.
    pub cursor: String,
    /// Pointer position in floor coordinates, while over the canvas.
    pub cursor_world: Option<Point>,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self { cursor: "default".to_owned(), cursor_world: None }
    }
}
