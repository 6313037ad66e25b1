//! Shared numeric constants for the floorplan crate.

// ── Snapping ────────────────────────────────────────────────────

/// Default grid spacing in floor units used by Shift-snapping.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default angle increment in degrees used by Ctrl-snapping.
pub const DEFAULT_ANGLE_STEP_DEG: f64 = 45.0;

// ── Walls ───────────────────────────────────────────────────────

/// Thinnest wall the toolbar slider allows.
pub const WALL_THICKNESS_MIN: f64 = 0.5;

/// Thickest wall the toolbar slider allows.
pub const WALL_THICKNESS_MAX: f64 = 8.0;

/// Slider step for wall thickness.
pub const WALL_THICKNESS_STEP: f64 = 0.5;

/// Thickness applied when the editor opens.
pub const WALL_THICKNESS_DEFAULT: f64 = 2.0;

/// Minimum points for an open wall (polyline).
pub const MIN_OPEN_WALL_POINTS: usize = 2;

/// Minimum points for a closed wall (room polygon).
pub const MIN_CLOSED_WALL_POINTS: usize = 3;

// ── Booking ─────────────────────────────────────────────────────

/// Fewest guests a booking may carry.
pub const MIN_GUESTS: u32 = 1;

/// Most guests a booking may carry.
pub const MAX_GUESTS: u32 = 20;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space slop in pixels around a table's edge that still counts as a hit.
pub const HIT_SLOP_PX: f64 = 4.0;

/// Drag distance in world units below which a table move is ignored.
pub const MOVE_EPSILON: f64 = 0.01;
