//! Editor configuration.
//!
//! Every field has a default, so a host can pass a partial JSON object (or
//! nothing at all) and only override what it cares about.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ANGLE_STEP_DEG, DEFAULT_GRID_SIZE, MAX_GUESTS, MIN_GUESTS, WALL_THICKNESS_DEFAULT};
use crate::wall::{WallStyle, WallThickness};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid_size must be positive, got {0}")]
    GridSize(f64),
    #[error("angle_step_deg must be in (0, 180], got {0}")]
    AngleStep(f64),
    #[error("guest bounds are inverted: min {min} > max {max}")]
    GuestBounds { min: u32, max: u32 },
}

/// Tunables for snapping, wall defaults, and booking bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing for Shift-snapping, in floor units.
    pub grid_size: f64,
    /// Angle increment for Ctrl-snapping, in degrees.
    pub angle_step_deg: f64,
    /// Wall thickness selected when the editor opens.
    pub default_thickness: WallThickness,
    /// Wall style selected when the editor opens.
    pub default_style: WallStyle,
    /// Fewest guests a booking may carry.
    pub min_guests: u32,
    /// Most guests a booking may carry.
    pub max_guests: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            angle_step_deg: DEFAULT_ANGLE_STEP_DEG,
            default_thickness: WallThickness::new(WALL_THICKNESS_DEFAULT),
            default_style: WallStyle::Solid,
            min_guests: MIN_GUESTS,
            max_guests: MAX_GUESTS,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable by the snapping and booking code.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if !(self.angle_step_deg.is_finite() && self.angle_step_deg > 0.0 && self.angle_step_deg <= 180.0) {
            return Err(ConfigError::AngleStep(self.angle_step_deg));
        }
        if self.min_guests > self.max_guests {
            return Err(ConfigError::GuestBounds { min: self.min_guests, max: self.max_guests });
        }
        Ok(())
    }
}
