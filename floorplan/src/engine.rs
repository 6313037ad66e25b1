use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::booking::{BookingForm, BookingFormError, BookingRequest};
use crate::camera::{Camera, Point};
use crate::config::EditorConfig;
use crate::consts::MOVE_EPSILON;
use crate::doc::{ElementId, Floor, FloorElement, FloorId, TableStatus};
use crate::error::EditorError;
use crate::hit;
use crate::input::{Button, DrawingMode, InputState, Key, Modifiers, UiState, WheelDelta};
use crate::render;
use crate::snap::{SnapMode, snap_point};
use crate::wall::{Wall, WallPath, WallShape, WallStyle, WallThickness};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A wall was committed on `floor_id` and should be persisted there.
    WallCommitted { floor_id: FloorId, wall: Wall },
    /// The selection changed; `None` means nothing is selected.
    ElementSelected(Option<ElementId>),
    /// A table on `floor_id` was dragged to a new top-left corner and should be persisted.
    ElementMoved { floor_id: FloorId, id: ElementId, x: f64, y: f64 },
    /// A message for the user, e.g. a rejected wall commit.
    Notice(String),
    SetCursor(String),
    RenderNeeded,
}

/// The floor editor: mode, wall path, selection, and the floor being edited.
///
/// Holds no browser handles, so it runs under native unit tests; [`Engine`]
/// draws it onto a canvas.
pub struct EditorCore {
    pub floor: Floor,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    notice: Option<String>,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor whose wall defaults and snapping come from `config`.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        let ui = UiState {
            wall_thickness: config.default_thickness,
            wall_style: config.default_style,
            ..UiState::default()
        };
        Self {
            floor: Floor::default(),
            camera: Camera::default(),
            ui,
            input: InputState::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            notice: None,
        }
    }

    // --- Data inputs ---

    /// Replace the whole floor, e.g. after switching floors or a full reload.
    pub fn load_floor(&mut self, floor: Floor) {
        self.floor = floor;
        self.input = InputState::Idle;
        self.reconcile_selection();
    }

    /// Replace the table list from a refresh of the data source.
    ///
    /// A table being dragged keeps its local position; the drop commits it.
    pub fn replace_tables(&mut self, tables: Vec<FloorElement>) -> Vec<Action> {
        let dragged = match self.input {
            InputState::DraggingElement { id, .. } => self.floor.table(&id).map(|t| (id, t.x, t.y)),
            _ => None,
        };
        self.floor.replace_tables(tables);
        if let Some((id, x, y)) = dragged {
            if !self.floor.move_table(&id, x, y) {
                self.input = InputState::Idle;
            }
        }
        let before = self.ui.selected_id;
        self.reconcile_selection();
        let mut actions = vec![Action::RenderNeeded];
        if before != self.ui.selected_id {
            actions.push(Action::ElementSelected(None));
        }
        actions
    }

    /// Reset to a fresh session: select mode, nothing selected, no path, no notice.
    pub fn reset(&mut self) {
        self.input = InputState::Idle;
        self.ui.mode = DrawingMode::Select;
        self.ui.selected_id = None;
        self.notice = None;
    }

    /// Clear a selection whose table is no longer on the floor.
    fn reconcile_selection(&mut self) {
        if let Some(id) = self.ui.selected_id {
            if self.floor.table(&id).is_none() {
                tracing::debug!(%id, "selected table vanished; clearing selection");
                self.ui.selected_id = None;
            }
        }
    }

    // --- Drawing mode ---

    #[must_use]
    pub fn drawing_mode(&self) -> DrawingMode {
        self.ui.mode
    }

    /// Switch drawing mode. Leaving wall mode discards any unfinished path;
    /// entering it clears the table selection.
    pub fn set_drawing_mode(&mut self, mode: DrawingMode) -> Vec<Action> {
        if mode == self.ui.mode {
            return Vec::new();
        }
        tracing::debug!(from = ?self.ui.mode, to = ?mode, "drawing mode changed");
        let mut actions = Vec::new();
        match mode {
            DrawingMode::Select => {
                if let Some(path) = self.input.wall_path() {
                    tracing::debug!(points = path.len(), "discarding unfinished wall on mode switch");
                }
                self.input = InputState::Idle;
                actions.push(Action::SetCursor("default".to_owned()));
            }
            DrawingMode::Wall => {
                self.input = InputState::Idle;
                if self.ui.selected_id.take().is_some() {
                    actions.push(Action::ElementSelected(None));
                }
                actions.push(Action::SetCursor("crosshair".to_owned()));
            }
        }
        self.ui.mode = mode;
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn set_wall_thickness(&mut self, thickness: f64) {
        self.ui.wall_thickness = WallThickness::new(thickness);
    }

    pub fn set_wall_style(&mut self, style: WallStyle) {
        self.ui.wall_style = style;
    }

    // --- Wall path ---

    /// Whether a wall is actively being drawn.
    #[must_use]
    pub fn is_drawing_wall(&self) -> bool {
        self.input.is_drawing_wall()
    }

    /// The in-progress wall path, if any.
    #[must_use]
    pub fn wall_path(&self) -> Option<&WallPath> {
        self.input.wall_path()
    }

    /// Number of points in the in-progress wall path.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.wall_path().map_or(0, WallPath::len)
    }

    /// Append a floor-space point to the wall path, snapping by modifier.
    ///
    /// Starts a new path if none is in progress. Ignored outside wall mode.
    pub fn add_point(&mut self, world_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if self.ui.mode != DrawingMode::Wall {
            return Vec::new();
        }
        if !self.input.is_drawing_wall() {
            self.input = InputState::DrawingWall { path: WallPath::default() };
        }
        let mode = SnapMode::from_modifiers(modifiers);
        let InputState::DrawingWall { path } = &mut self.input else {
            return Vec::new();
        };
        let snapped = snap_point(world_pt, path.last(), mode, &self.config);
        if !path.push(snapped) {
            return Vec::new();
        }
        path.set_preview(None);
        self.notice = None;
        vec![Action::RenderNeeded]
    }

    /// Move the live preview point; nothing is committed.
    pub fn update_preview(&mut self, world_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let mode = SnapMode::from_modifiers(modifiers);
        let InputState::DrawingWall { path } = &mut self.input else {
            return Vec::new();
        };
        let snapped = snap_point(world_pt, path.last(), mode, &self.config);
        path.set_preview(Some(snapped));
        vec![Action::RenderNeeded]
    }

    /// Remove the last point. Removing the only point ends the draw.
    pub fn undo_point(&mut self) -> Vec<Action> {
        let InputState::DrawingWall { path } = &mut self.input else {
            return Vec::new();
        };
        path.pop();
        if path.is_empty() {
            self.input = InputState::Idle;
        }
        vec![Action::RenderNeeded]
    }

    /// Commit the path as an open wall.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InsufficientPoints`] with fewer than two points,
    /// or [`EditorError::NotDrawing`] outside wall mode. The path is unchanged
    /// on error and the message is kept as the current notice.
    pub fn finish_wall(&mut self) -> Result<Vec<Action>, EditorError> {
        self.commit_wall(WallShape::Open)
    }

    /// Commit the path as a closed room polygon.
    ///
    /// # Errors
    ///
    /// As [`EditorCore::finish_wall`], but three points are required.
    pub fn close_wall(&mut self) -> Result<Vec<Action>, EditorError> {
        self.commit_wall(WallShape::Closed)
    }

    fn commit_wall(&mut self, shape: WallShape) -> Result<Vec<Action>, EditorError> {
        let result = if self.ui.mode == DrawingMode::Wall {
            let empty = WallPath::default();
            let path = self.input.wall_path().unwrap_or(&empty);
            path.to_wall(shape, self.ui.wall_thickness, self.ui.wall_style)
        } else {
            Err(EditorError::NotDrawing)
        };

        match result {
            Ok(wall) => {
                tracing::debug!(id = %wall.id, points = wall.points.len(), ?shape, "wall committed");
                self.floor.add_wall(wall.clone());
                self.input = InputState::Idle;
                self.notice = None;
                Ok(vec![Action::WallCommitted { floor_id: self.floor.id, wall }, Action::RenderNeeded])
            }
            Err(e) => {
                tracing::warn!(error = %e, "wall commit rejected");
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Discard the in-progress path, however long. Safe to call when idle.
    pub fn cancel_wall(&mut self) -> Vec<Action> {
        if !self.input.is_drawing_wall() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Selection ---

    /// Select a table. An id that is not on the floor clears the selection.
    pub fn select_element(&mut self, id: ElementId) -> Vec<Action> {
        let next = self.floor.table(&id).map(|t| t.id);
        self.set_selection(next)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        self.set_selection(None)
    }

    fn set_selection(&mut self, next: Option<ElementId>) -> Vec<Action> {
        if self.ui.selected_id == next {
            return Vec::new();
        }
        self.ui.selected_id = next;
        vec![Action::ElementSelected(next), Action::RenderNeeded]
    }

    /// The currently selected table id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// The selected table, or `None` if nothing is selected or it has vanished.
    #[must_use]
    pub fn selected_element(&self) -> Option<&FloorElement> {
        self.ui.selected_id.and_then(|id| self.floor.table(&id))
    }

    // --- Booking ---

    /// Build a booking request for `id`, re-checking the booking gate.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ElementNotFound`] for an unknown table, whatever
    /// [`BookingRequest::build`] rejects, then [`EditorError::IncompleteBooking`]
    /// while the date or time slot is unset.
    pub fn request_booking(&mut self, id: ElementId, form: &BookingForm) -> Result<BookingRequest, EditorError> {
        let result = match self.floor.table(&id) {
            Some(table) => BookingRequest::build(table, form).and_then(|request| {
                if request.date.is_none() {
                    Err(EditorError::IncompleteBooking(BookingFormError::MissingDate))
                } else if request.time_slot.is_none() {
                    Err(EditorError::IncompleteBooking(BookingFormError::MissingTimeSlot))
                } else {
                    Ok(request)
                }
            }),
            None => Err(EditorError::ElementNotFound(id)),
        };
        if let Err(e) = &result {
            tracing::warn!(error = %e, "booking refused");
            self.notice = Some(e.to_string());
        }
        result
    }

    /// Reflect a booking the collaborator confirmed. Returns false for an unknown table.
    pub fn apply_booking_confirmed(&mut self, id: ElementId) -> bool {
        self.floor.set_status(&id, TableStatus::Booked)
    }

    // --- Notice ---

    /// The last user-facing message, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- Viewport ---

    /// Record viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        match self.ui.mode {
            DrawingMode::Wall => self.add_point(world, modifiers),
            DrawingMode::Select => match hit::hit_test(world, &self.floor, &self.camera) {
                Some(id) => {
                    let mut actions = self.select_element(id);
                    if let Some(table) = self.floor.table(&id) {
                        self.input = InputState::DraggingElement {
                            id,
                            last_world: world,
                            orig_x: table.x,
                            orig_y: table.y,
                        };
                        actions.push(Action::SetCursor("grabbing".to_owned()));
                    }
                    actions
                }
                None => self.clear_selection(),
            },
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        if self.input.is_drawing_wall() {
            return self.update_preview(world, modifiers);
        }
        let InputState::DraggingElement { id, last_world, .. } = &mut self.input else {
            return Vec::new();
        };
        let dx = world.x - last_world.x;
        let dy = world.y - last_world.y;
        *last_world = world;
        let id = *id;
        let Some((x, y)) = self.floor.table(&id).map(|t| (t.x + dx, t.y + dy)) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        self.floor.move_table(&id, x, y);
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let InputState::DraggingElement { id, orig_x, orig_y, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let mut actions = vec![Action::SetCursor("default".to_owned())];
        if let Some(table) = self.floor.table(&id) {
            let moved = (table.x - orig_x).abs() > MOVE_EPSILON || (table.y - orig_y).abs() > MOVE_EPSILON;
            if moved {
                actions.push(Action::ElementMoved { floor_id: self.floor.id, id, x: table.x, y: table.y });
            }
        }
        actions
    }

    /// Double-click finishes the wall being drawn.
    pub fn on_double_click(&mut self, _screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_drawing_wall() {
            return Vec::new();
        }
        self.finish_or_notice()
    }

    /// Enter finishes, Escape cancels (or clears the selection), Backspace undoes a point.
    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        let drawing = self.input.is_drawing_wall();
        if key.is("Escape") {
            return if drawing { self.cancel_wall() } else { self.clear_selection() };
        }
        if !drawing {
            return Vec::new();
        }
        if key.is("Enter") {
            self.finish_or_notice()
        } else if key.is("Backspace") {
            self.undo_point()
        } else {
            Vec::new()
        }
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        self.camera.zoom_at(screen_pt, delta.dy);
        vec![Action::RenderNeeded]
    }

    fn finish_or_notice(&mut self) -> Vec<Action> {
        match self.finish_wall() {
            Ok(actions) => actions,
            Err(e) => vec![Action::Notice(e.to_string())],
        }
    }
}

/// Canvas binding for an [`EditorCore`] owned elsewhere, e.g. by a reactive signal.
///
/// The engine never holds editor state; the host passes the core in on every call.
pub struct Engine {
    canvas: HtmlCanvasElement,
}

impl Engine {
    /// Bind to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    /// Record viewport dimensions on `core` and resize the backing store to match the device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&self, core: &mut EditorCore, width_css: f64, height_css: f64, dpr: f64) {
        core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((core.viewport_width * core.dpr).round() as u32);
        self.canvas.set_height((core.viewport_height * core.dpr).round() as u32);
    }

    /// Set the CSS cursor shown over the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be written.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), JsValue> {
        self.canvas.style().set_property("cursor", cursor)
    }

    /// Draw `core` to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context cannot be obtained or a draw call fails.
    pub fn render(&self, core: &EditorCore) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Ok(());
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, core)
    }
}
