use serde::{Deserialize, Serialize};

use super::{advance_rotation, local_box_contains, EntityId, Point};

/// A built-in closet with a fixed footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Closet {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Closet {
    pub fn new(id: EntityId, anchor: Point) -> Self {
        Self {
            id,
            x: anchor.x,
            y: anchor.y,
            rotation: 0.0,
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn move_to(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    /// Turns by [`ROTATION_STEP_DEG`](super::ROTATION_STEP_DEG).
    pub fn rotate(&mut self, normalize: bool) {
        self.rotation = advance_rotation(self.rotation, normalize);
    }

    /// Hit test against the `width x depth` footprint hanging off the anchor.
    pub fn contains_point(&self, p: Point, width_px: f64, depth_px: f64, tolerance: f64) -> bool {
        local_box_contains(
            self.anchor(),
            self.rotation,
            p,
            (0.0, 0.0, width_px, depth_px),
            tolerance,
        )
    }
}
