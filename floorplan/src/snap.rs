//! Pure snapping math for wall drawing.
//!
//! Snapping never looks at editor state: it takes the candidate point, the
//! previous committed point (if any), and the active [`SnapMode`], and returns
//! the point that should be used instead.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::camera::Point;
use crate::config::EditorConfig;
use crate::input::Modifiers;

/// Residual below which a trigonometric component is treated as zero.
const TRIG_EPSILON: f64 = 1e-9;

/// Which snapping rule applies to an incoming point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// Use the point as given.
    #[default]
    Free,
    /// Snap to the nearest grid intersection (Shift).
    Grid,
    /// Snap the segment from the previous point to the nearest angle increment (Ctrl).
    Angle,
}

impl SnapMode {
    /// Derive the snap mode from held modifier keys. Shift wins over Ctrl.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::Grid
        } else if modifiers.ctrl {
            Self::Angle
        } else {
            Self::Free
        }
    }
}

/// Snap `p` to the nearest intersection of a grid with the given spacing.
///
/// A non-positive spacing leaves the point unchanged.
#[must_use]
pub fn snap_to_grid(p: Point, spacing: f64) -> Point {
    if spacing <= 0.0 {
        return p;
    }
    Point::new(round_to_multiple(p.x, spacing), round_to_multiple(p.y, spacing))
}

/// Rotate `candidate` around `previous` so the segment direction is the
/// nearest multiple of `step_deg`, keeping the segment length.
///
/// A zero-length segment or a non-positive step leaves the candidate unchanged.
#[must_use]
pub fn snap_to_angle(candidate: Point, previous: Point, step_deg: f64) -> Point {
    let dx = candidate.x - previous.x;
    let dy = candidate.y - previous.y;
    let len = dx.hypot(dy);
    if len == 0.0 || step_deg <= 0.0 {
        return candidate;
    }

    let step = step_deg.to_radians();
    let snapped = (dy.atan2(dx) / step).round() * step;
    let (sin, cos) = snapped.sin_cos();
    Point::new(previous.x + len * clean(cos), previous.y + len * clean(sin))
}

/// Apply the snapping rule for `mode` using the grid and angle settings in `config`.
///
/// Angle snapping needs a previous point; without one the candidate is returned as is.
#[must_use]
pub fn snap_point(candidate: Point, previous: Option<Point>, mode: SnapMode, config: &EditorConfig) -> Point {
    match (mode, previous) {
        (SnapMode::Grid, _) => snap_to_grid(candidate, config.grid_size),
        (SnapMode::Angle, Some(prev)) => snap_to_angle(candidate, prev, config.angle_step_deg),
        (SnapMode::Angle, None) | (SnapMode::Free, _) => candidate,
    }
}

fn round_to_multiple(v: f64, spacing: f64) -> f64 {
    let snapped = (v / spacing).round() * spacing;
    // Normalise -0.0 so serialized geometry stays clean.
    if snapped == 0.0 { 0.0 } else { snapped }
}

fn clean(v: f64) -> f64 {
    if v.abs() < TRIG_EPSILON { 0.0 } else { v }
}
