//! Floor document: tables, walls, and the floor that owns them.
//!
//! Data flows into this layer from the REST collaborator (JSON
//! deserialization) and from the input engine (wall commits, table moves,
//! confirmed bookings). Tables are never deleted by the editor. Lookups are
//! linear; a floor holds tens of tables, not thousands.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::wall::Wall;

/// Unique identifier for a bookable floor element.
pub type ElementId = Uuid;

/// Unique identifier for a floor.
pub type FloorId = Uuid;

/// Availability of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Booked,
    Reserved,
    /// Also used for any status string this client does not recognise.
    #[serde(other)]
    Unavailable,
}

impl TableStatus {
    #[must_use]
    pub fn is_available(self) -> bool {
        self == Self::Available
    }

    /// Human-readable status for the detail panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Reserved => "Reserved",
            Self::Unavailable => "Unavailable",
        }
    }
}

/// A bookable table placed on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorElement {
    pub id: ElementId,
    pub name: String,
    /// Free-form category such as `"vip"`, `"booth"`, `"standing"`.
    pub category: String,
    pub capacity: u32,
    pub price: f64,
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
    /// Left edge in floor coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top edge in floor coordinates.
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_element_size")]
    pub width: f64,
    #[serde(default = "default_element_size")]
    pub height: f64,
}

fn default_element_size() -> f64 {
    60.0
}

impl FloorElement {
    /// Whether `p` lies inside the element's bounds grown by `slop` on every side.
    #[must_use]
    pub fn contains(&self, p: Point, slop: f64) -> bool {
        p.x >= self.x - slop
            && p.x <= self.x + self.width + slop
            && p.y >= self.y - slop
            && p.y <= self.y + self.height + slop
    }

    /// Center of the element in floor coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A floor: its tables and its committed walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<FloorElement>,
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Default for Floor {
    fn default() -> Self {
        Self::new(Uuid::nil(), String::new())
    }
}

impl Floor {
    /// Create an empty floor.
    #[must_use]
    pub fn new(id: FloorId, name: String) -> Self {
        Self { id, name, tables: Vec::new(), walls: Vec::new() }
    }

    /// Look up a table by id.
    #[must_use]
    pub fn table(&self, id: &ElementId) -> Option<&FloorElement> {
        self.tables.iter().find(|t| &t.id == id)
    }

    fn table_mut(&mut self, id: &ElementId) -> Option<&mut FloorElement> {
        self.tables.iter_mut().find(|t| &t.id == id)
    }

    /// Number of tables currently available for booking.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.tables.iter().filter(|t| t.status.is_available()).count()
    }

    /// Replace the table list with a fresh snapshot from the data source.
    pub fn replace_tables(&mut self, tables: Vec<FloorElement>) {
        self.tables = tables;
    }

    /// Append a committed wall.
    pub fn add_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    /// Move a table's top-left corner. Returns false if the table doesn't exist.
    pub fn move_table(&mut self, id: &ElementId, x: f64, y: f64) -> bool {
        let Some(table) = self.table_mut(id) else {
            return false;
        };
        table.x = x;
        table.y = y;
        true
    }

    /// Set a table's status. Returns false if the table doesn't exist.
    pub fn set_status(&mut self, id: &ElementId, status: TableStatus) -> bool {
        let Some(table) = self.table_mut(id) else {
            return false;
        };
        table.status = status;
        true
    }
}
