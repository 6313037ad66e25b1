//! Floor-session state for the open editor page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tracks which floor is loaded and the REST calls in flight for it, so the
//! page can show loading and save status and surface network failures.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use floorplan::doc::{ElementId, FloorId};

/// Lifecycle of the floor fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No floor requested yet.
    #[default]
    Idle,
    /// `GET /api/floors/{id}` is in flight.
    Loading,
    /// The floor is loaded into the editor core.
    Loaded,
    /// The fetch failed with the given message.
    Failed(String),
}

/// Host-side session state for the floor editor page.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Floor currently open in the editor.
    pub floor_id: Option<FloorId>,
    pub load: LoadStatus,
    /// Wall and table-move saves not yet acknowledged.
    pub pending_saves: usize,
    /// Table whose booking request is in flight, if any.
    pub booking_in_flight: Option<ElementId>,
    /// Last network failure, shown until dismissed.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Start loading `floor_id`. Returns false if that floor is already loading or loaded.
    pub fn start_loading(&mut self, floor_id: FloorId) -> bool {
        if self.floor_id == Some(floor_id) && matches!(self.load, LoadStatus::Loading | LoadStatus::Loaded) {
            return false;
        }
        self.floor_id = Some(floor_id);
        self.load = LoadStatus::Loading;
        self.pending_saves = 0;
        self.booking_in_flight = None;
        self.last_error = None;
        true
    }

    /// Record the outcome of a floor fetch for `floor_id`.
    ///
    /// Responses for a floor the user already navigated away from are ignored;
    /// returns whether the result applies to the open floor.
    pub fn finish_loading(&mut self, floor_id: FloorId, result: Result<(), String>) -> bool {
        if self.floor_id != Some(floor_id) {
            return false;
        }
        match result {
            Ok(()) => self.load = LoadStatus::Loaded,
            Err(message) => {
                self.last_error = Some(message.clone());
                self.load = LoadStatus::Failed(message);
            }
        }
        true
    }

    pub fn begin_save(&mut self) {
        self.pending_saves += 1;
    }

    pub fn end_save(&mut self, result: Result<(), String>) {
        self.pending_saves = self.pending_saves.saturating_sub(1);
        if let Err(message) = result {
            self.last_error = Some(message);
        }
    }

    /// Claim the booking slot for `id`. Only one booking may be in flight.
    pub fn begin_booking(&mut self, id: ElementId) -> bool {
        if self.booking_in_flight.is_some() {
            return false;
        }
        self.booking_in_flight = Some(id);
        true
    }

    pub fn end_booking(&mut self, result: Result<(), String>) {
        self.booking_in_flight = None;
        if let Err(message) = result {
            self.last_error = Some(message);
        }
    }

    /// Whether the floor is ready for editing.
    pub fn is_ready(&self) -> bool {
        self.load == LoadStatus::Loaded
    }

    /// Short status line for the page header.
    pub fn status_label(&self) -> String {
        match &self.load {
            LoadStatus::Idle => "No floor".to_owned(),
            LoadStatus::Loading => "Loading…".to_owned(),
            LoadStatus::Failed(_) => "Load failed".to_owned(),
            LoadStatus::Loaded if self.pending_saves > 0 => format!("Saving ({})…", self.pending_saves),
            LoadStatus::Loaded => "Saved".to_owned(),
        }
    }
}
