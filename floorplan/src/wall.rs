//! Walls: line styles, bounded thickness, committed wall geometry, and the
//! in-progress wall path.
//!
//! A [`WallPath`] accumulates clicked points while the user draws. Committing
//! it produces a [`Wall`] in one step: either the whole path becomes a wall or
//! nothing does. Whether the result is an open polyline or a closed room
//! polygon is chosen by the caller through [`WallShape`]; it is never inferred
//! from the geometry.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{
    MIN_CLOSED_WALL_POINTS, MIN_OPEN_WALL_POINTS, WALL_THICKNESS_DEFAULT, WALL_THICKNESS_MAX, WALL_THICKNESS_MIN,
    WALL_THICKNESS_STEP,
};
use crate::error::EditorError;

/// Unique identifier for a committed wall.
pub type WallId = Uuid;

/// Stroke pattern of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

impl WallStyle {
    /// Every style, in toolbar order.
    pub const ALL: [WallStyle; 3] = [Self::Solid, Self::Dotted, Self::Dashed];

    /// Label shown on the toolbar selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Dotted => "Dotted",
            Self::Dashed => "Dashed",
        }
    }

    /// Canvas line-dash segments for a wall of the given thickness. Empty means solid.
    #[must_use]
    pub fn dash_pattern(self, thickness: f64) -> Vec<f64> {
        match self {
            Self::Solid => Vec::new(),
            Self::Dotted => vec![thickness, thickness * 2.0],
            Self::Dashed => vec![thickness * 4.0, thickness * 2.0],
        }
    }
}

/// Wall thickness in floor units, clamped to `0.5..=8.0` in `0.5` steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct WallThickness(f64);

impl WallThickness {
    /// Clamp and step-round `value`. Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let stepped = (value / WALL_THICKNESS_STEP).round() * WALL_THICKNESS_STEP;
        Self(stepped.clamp(WALL_THICKNESS_MIN, WALL_THICKNESS_MAX))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for WallThickness {
    fn default() -> Self {
        Self(WALL_THICKNESS_DEFAULT)
    }
}

impl From<f64> for WallThickness {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<WallThickness> for f64 {
    fn from(value: WallThickness) -> Self {
        value.0
    }
}

/// Whether a committed wall is an open polyline or a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallShape {
    /// Polyline: a run of wall.
    #[default]
    Open,
    /// Polygon: the last point connects back to the first, enclosing a room.
    Closed,
}

impl WallShape {
    /// Fewest points needed to commit this shape.
    #[must_use]
    pub fn min_points(self) -> usize {
        match self {
            Self::Open => MIN_OPEN_WALL_POINTS,
            Self::Closed => MIN_CLOSED_WALL_POINTS,
        }
    }
}

/// A committed wall on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub points: Vec<Point>,
    pub thickness: WallThickness,
    pub style: WallStyle,
    #[serde(default)]
    pub shape: WallShape,
}

impl Wall {
    /// Line segments making up the wall, including the closing edge of a polygon.
    #[must_use]
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut out: Vec<(Point, Point)> = self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if self.shape == WallShape::Closed {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                out.push((*last, *first));
            }
        }
        out
    }

    /// Total drawn length of the wall.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().iter().map(|(a, b)| a.distance(*b)).sum()
    }
}

/// Points clicked so far for the wall being drawn, plus a live preview point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallPath {
    points: Vec<Point>,
    preview: Option<Point>,
}

impl WallPath {
    /// Append a point. A point identical to the last one is ignored; returns
    /// whether the path grew.
    pub fn push(&mut self, p: Point) -> bool {
        if self.points.last() == Some(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Remove and return the last point.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Where the next segment would end if the pointer were clicked now.
    #[must_use]
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    pub fn set_preview(&mut self, p: Option<Point>) {
        self.preview = p;
    }

    /// Build a wall from the whole path. The path itself is left untouched;
    /// the caller discards it once the wall is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InsufficientPoints`] when the path is shorter
    /// than `shape` requires.
    pub fn to_wall(&self, shape: WallShape, thickness: WallThickness, style: WallStyle) -> Result<Wall, EditorError> {
        let needed = shape.min_points();
        if self.points.len() < needed {
            return Err(EditorError::InsufficientPoints { needed, got: self.points.len() });
        }
        Ok(Wall {
            id: Uuid::new_v4(),
            points: self.points.clone(),
            thickness,
            style,
            shape,
        })
    }
}
