//! Input model: drawing modes, modifier keys, mouse buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the input engine. `DrawingMode`
//! and `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the active gesture being tracked between events. The wall
//! path only exists inside [`InputState::DrawingWall`], so a partial wall can
//! never outlive wall mode.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::ElementId;
use crate::wall::{WallPath, WallStyle, WallThickness};

/// Which drawing mode is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// Pointer selects and moves tables (default).
    #[default]
    Select,
    /// Pointer clicks add points to a wall path.
    Wall,
}

impl DrawingMode {
    /// Label shown on the toolbar button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Wall => "Draw Wall",
        }
    }
}

/// Modifier keys that change how a wall point snaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held: grid snap.
    pub shift: bool,
    /// Ctrl key is held: angle snap.
    pub ctrl: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Enter"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer and the toolbar.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active drawing mode.
    pub mode: DrawingMode,
    /// The id of the currently selected table, if any.
    pub selected_id: Option<ElementId>,
    /// Thickness applied to the next committed wall.
    pub wall_thickness: WallThickness,
    /// Line style applied to the next committed wall.
    pub wall_style: WallStyle,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is placing wall points. Only reachable in wall mode.
    DrawingWall {
        /// Points committed so far plus the live preview.
        path: WallPath,
    },
    /// The user is moving a table across the floor.
    DraggingElement {
        /// Id of the table being dragged.
        id: ElementId,
        /// Floor-space position of the pointer at the previous event.
        last_world: Point,
        /// Table x at the start of the drag.
        orig_x: f64,
        /// Table y at the start of the drag.
        orig_y: f64,
    },
}

impl InputState {
    /// The in-progress wall path, if a wall is being drawn.
    #[must_use]
    pub fn wall_path(&self) -> Option<&WallPath> {
        match self {
            Self::DrawingWall { path } => Some(path),
            _ => None,
        }
    }

    /// Whether a wall is actively being drawn.
    #[must_use]
    pub fn is_drawing_wall(&self) -> bool {
        matches!(self, Self::DrawingWall { .. })
    }
}
