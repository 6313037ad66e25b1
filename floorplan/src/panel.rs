//! View models for the toolbar, the element detail panel, and the booking panel.
//!
//! Each model is a pure function of editor state. The host UI renders them
//! directly and routes clicks back to [`crate::engine::EditorCore`]; the
//! models carry no state of their own and issue no network calls.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use chrono::NaiveDate;

use crate::booking::{BookingForm, BookingFormError, BookingGate, CustomerInfo, TimeSlot, booking_gate};
use crate::config::EditorConfig;
use crate::consts::{WALL_THICKNESS_MAX, WALL_THICKNESS_MIN, WALL_THICKNESS_STEP};
use crate::doc::{ElementId, Floor, TableStatus};
use crate::engine::EditorCore;
use crate::input::DrawingMode;
use crate::wall::{WallShape, WallStyle};

// =============================================================
// Toolbar
// =============================================================

/// One of the mutually exclusive mode buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButton {
    pub mode: DrawingMode,
    pub label: &'static str,
    pub active: bool,
}

/// The thickness slider shown in wall mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

/// One entry of the 3-way wall style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    pub style: WallStyle,
    pub label: &'static str,
    pub active: bool,
}

/// Controls that only exist in wall mode.
#[derive(Debug, Clone, PartialEq)]
pub struct WallControls {
    pub thickness: ThicknessControl,
    pub styles: Vec<StyleOption>,
}

/// Controls that only exist while a wall is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawControls {
    pub point_count: usize,
    pub can_finish: bool,
    pub can_close: bool,
}

/// Everything the toolbar shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarModel {
    pub modes: Vec<ModeButton>,
    pub wall: Option<WallControls>,
    pub drawing: Option<DrawControls>,
}

impl ToolbarModel {
    #[must_use]
    pub fn from_core(core: &EditorCore) -> Self {
        let current = core.drawing_mode();
        let modes = [DrawingMode::Select, DrawingMode::Wall]
            .into_iter()
            .map(|mode| ModeButton { mode, label: mode.label(), active: mode == current })
            .collect();

        let wall = (current == DrawingMode::Wall).then(|| WallControls {
            thickness: ThicknessControl {
                min: WALL_THICKNESS_MIN,
                max: WALL_THICKNESS_MAX,
                step: WALL_THICKNESS_STEP,
                value: core.ui.wall_thickness.get(),
            },
            styles: WallStyle::ALL
                .into_iter()
                .map(|style| StyleOption { style, label: style.label(), active: style == core.ui.wall_style })
                .collect(),
        });

        let drawing = core.wall_path().map(|path| DrawControls {
            point_count: path.len(),
            can_finish: path.len() >= WallShape::Open.min_points(),
            can_close: path.len() >= WallShape::Closed.min_points(),
        });

        Self { modes, wall, drawing }
    }
}

// =============================================================
// Detail panel
// =============================================================

/// The selected table as the detail panel shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanelModel {
    pub id: ElementId,
    pub name: String,
    pub category: String,
    pub capacity: u32,
    pub price: f64,
    pub status: TableStatus,
    pub special_features: Option<String>,
    pub gate: BookingGate,
}

impl DetailPanelModel {
    #[must_use]
    pub fn book_enabled(&self) -> bool {
        self.gate.is_open()
    }

    #[must_use]
    pub fn book_label(&self) -> &'static str {
        self.gate.label()
    }
}

/// Build the detail panel for `selected`, or `None` when nothing is selected
/// or the selected table is no longer on the floor.
#[must_use]
pub fn detail_panel(floor: &Floor, selected: Option<ElementId>, customer: &CustomerInfo) -> Option<DetailPanelModel> {
    let table = floor.table(&selected?)?;
    Some(DetailPanelModel {
        id: table.id,
        name: table.name.clone(),
        category: table.category.clone(),
        capacity: table.capacity,
        price: table.price,
        status: table.status,
        special_features: table
            .special_features
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .cloned(),
        gate: booking_gate(table, customer),
    })
}

/// Format a price for display, e.g. `"$250.00"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

// =============================================================
// Booking panel
// =============================================================

/// Derived, read-only values the booking form shows alongside its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPanelModel {
    /// Earliest selectable date.
    pub min_date: NaiveDate,
    pub min_guests: u32,
    pub max_guests: u32,
    /// Tables on the active floor that are currently available.
    pub available_tables: usize,
    pub time_slots: Vec<TimeSlot>,
    /// Field problems, for inline hints; never used to gate booking.
    pub errors: Vec<BookingFormError>,
}

/// Build the booking panel model; recomputed on every render.
#[must_use]
pub fn booking_panel(floor: &Floor, form: &BookingForm, today: NaiveDate, config: &EditorConfig) -> BookingPanelModel {
    BookingPanelModel {
        min_date: today,
        min_guests: config.min_guests,
        max_guests: config.max_guests,
        available_tables: floor.available_count(),
        time_slots: TimeSlot::evening_slots(),
        errors: form.validate(today, config).err().unwrap_or_default(),
    }
}
