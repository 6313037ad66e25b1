//! Rendering: draws the floor plan onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads editor state and produces pixels; it never mutates state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::doc::{FloorElement, TableStatus};
use crate::engine::EditorCore;
use crate::input::DrawingMode;
use crate::wall::{Wall, WallPath, WallShape};

/// Wall stroke color.
const WALL_COLOR: &str = "#2B2B2B";
/// Grid line color shown while drawing walls.
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.06)";
/// In-progress path color.
const DRAFT_COLOR: &str = "#1E90FF";
/// Selection outline dash length in screen pixels.
const SELECTION_DASH_PX: f64 = 4.0;
/// Radius of the vertex markers on the in-progress path, in screen pixels.
const VERTEX_RADIUS_PX: f64 = 3.0;

/// Draw the full scene: grid, walls, tables, selection, and the wall being drawn.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EditorCore) -> Result<(), JsValue> {
    let camera = core.camera;

    // Layer 1: clear and set up transforms.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: snapping grid, only while drawing walls.
    if core.ui.mode == DrawingMode::Wall {
        draw_grid(ctx, core)?;
    }

    // Layer 3: committed walls beneath tables.
    for wall in &core.floor.walls {
        draw_wall(ctx, wall)?;
    }

    // Layer 4: tables in list order (last on top).
    for table in &core.floor.tables {
        draw_table(ctx, table)?;
    }

    // Layer 5: selection outline.
    if let Some(table) = core.selected_element() {
        draw_selection(ctx, table, camera.zoom)?;
    }

    // Layer 6: wall being drawn.
    if let Some(path) = core.wall_path() {
        draw_draft(ctx, path, core)?;
    }

    Ok(())
}

// =============================================================
// Layers
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, core: &EditorCore) -> Result<(), JsValue> {
    let spacing = core.config.grid_size;
    if spacing <= 0.0 || core.viewport_width <= 0.0 || core.viewport_height <= 0.0 {
        return Ok(());
    }
    let top_left = core.camera.screen_to_world(Point::new(0.0, 0.0));
    let bottom_right = core
        .camera
        .screen_to_world(Point::new(core.viewport_width, core.viewport_height));

    ctx.save();
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0 / core.camera.zoom);
    ctx.begin_path();
    let mut x = (top_left.x / spacing).floor() * spacing;
    while x <= bottom_right.x {
        ctx.move_to(x, top_left.y);
        ctx.line_to(x, bottom_right.y);
        x += spacing;
    }
    let mut y = (top_left.y / spacing).floor() * spacing;
    while y <= bottom_right.y {
        ctx.move_to(top_left.x, y);
        ctx.line_to(bottom_right.x, y);
        y += spacing;
    }
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn draw_wall(ctx: &CanvasRenderingContext2d, wall: &Wall) -> Result<(), JsValue> {
    let Some((first, rest)) = wall.points.split_first() else {
        return Ok(());
    };
    ctx.save();
    ctx.set_stroke_style_str(WALL_COLOR);
    ctx.set_line_width(wall.thickness.get());
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    set_dash(ctx, &wall.style.dash_pattern(wall.thickness.get()))?;

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    if wall.shape == WallShape::Closed {
        ctx.close_path();
    }
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn draw_table(ctx: &CanvasRenderingContext2d, table: &FloorElement) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(status_fill(table.status));
    ctx.fill_rect(table.x, table.y, table.width, table.height);
    ctx.set_stroke_style_str(WALL_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(table.x, table.y, table.width, table.height);

    let center = table.center();
    ctx.set_fill_style_str("#1F1A17");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("12px sans-serif");
    ctx.fill_text(&table.name, center.x, center.y)?;
    ctx.restore();
    Ok(())
}

fn draw_selection(ctx: &CanvasRenderingContext2d, table: &FloorElement, zoom: f64) -> Result<(), JsValue> {
    ctx.save();
    let dash_world = SELECTION_DASH_PX / zoom;
    ctx.set_stroke_style_str(DRAFT_COLOR);
    ctx.set_line_width(2.0 / zoom);
    set_dash(ctx, &[dash_world, dash_world])?;
    let pad = 3.0 / zoom;
    ctx.stroke_rect(table.x - pad, table.y - pad, table.width + pad * 2.0, table.height + pad * 2.0);
    ctx.restore();
    Ok(())
}

fn draw_draft(ctx: &CanvasRenderingContext2d, path: &WallPath, core: &EditorCore) -> Result<(), JsValue> {
    let Some((first, rest)) = path.points().split_first() else {
        return Ok(());
    };
    let thickness = core.ui.wall_thickness.get();
    let zoom = core.camera.zoom;

    ctx.save();
    ctx.set_stroke_style_str(DRAFT_COLOR);
    ctx.set_line_width(thickness);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    set_dash(ctx, &core.ui.wall_style.dash_pattern(thickness))?;
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();

    // Rubber-band segment to the pointer.
    if let (Some(last), Some(preview)) = (path.last(), path.preview()) {
        let dash = SELECTION_DASH_PX / zoom;
        set_dash(ctx, &[dash, dash])?;
        ctx.set_line_width(1.0 / zoom);
        ctx.begin_path();
        ctx.move_to(last.x, last.y);
        ctx.line_to(preview.x, preview.y);
        ctx.stroke();
    }

    ctx.set_fill_style_str(DRAFT_COLOR);
    let r = VERTEX_RADIUS_PX / zoom;
    for p in path.points() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, r, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
    }
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn status_fill(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Available => "#CDEFD4",
        TableStatus::Booked => "#F4C7C3",
        TableStatus::Reserved => "#FCE8B2",
        TableStatus::Unavailable => "#E0E0E0",
    }
}

fn set_dash(ctx: &CanvasRenderingContext2d, segments: &[f64]) -> Result<(), JsValue> {
    let dash_array = js_sys::Array::new();
    for s in segments {
        dash_array.push(&(*s).into());
    }
    ctx.set_line_dash(&dash_array)
}
