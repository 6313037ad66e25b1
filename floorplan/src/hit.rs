#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HIT_SLOP_PX;
use crate::doc::{ElementId, Floor};

/// Test which table (if any) is under `world_pt`.
///
/// Tables later in the floor's list are drawn on top, so they are checked
/// first. The edge slop is fixed in screen pixels and shrinks as the camera
/// zooms in.
#[must_use]
pub fn hit_test(world_pt: Point, floor: &Floor, camera: &Camera) -> Option<ElementId> {
    let slop = camera.screen_dist_to_world(HIT_SLOP_PX);
    floor
        .tables
        .iter()
        .rev()
        .find(|t| t.contains(world_pt, slop))
        .map(|t| t.id)
}
