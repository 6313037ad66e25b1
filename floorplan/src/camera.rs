#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// Smallest zoom factor the wheel can reach.
const MIN_ZOOM: f64 = 0.25;
/// Largest zoom factor the wheel can reach.
const MAX_ZOOM: f64 = 4.0;
/// Zoom change per wheel pixel.
const WHEEL_ZOOM_RATE: f64 = 0.001;

/// A point in either screen or floor-plan space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Camera state for pan/zoom over the floor plan.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to floor coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a floor-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to floor-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Zoom by a wheel delta while keeping the floor point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: Point, wheel_dy: f64) {
        let anchor = self.screen_to_world(screen);
        let next = (self.zoom * (1.0 - wheel_dy * WHEEL_ZOOM_RATE)).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = next;
        self.pan_x = screen.x - anchor.x * next;
        self.pan_y = screen.y - anchor.y * next;
    }
}
