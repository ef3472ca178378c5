use serde::{Deserialize, Serialize};

use super::{advance_rotation, local_box_contains, EntityId, Point};
use moodlet_core::cm_to_px;

/// A door glyph anchored at its hinge.
///
/// Doors are free-standing: they are not bound to a wall when placed. The
/// room profile attaches each one to its nearest wall on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub width_cm: f64,
}

impl Door {
    pub fn new(id: EntityId, anchor: Point, width_cm: f64) -> Self {
        Self {
            id,
            x: anchor.x,
            y: anchor.y,
            rotation: 0.0,
            width_cm,
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

    pub fn width_px(&self) -> f64 {
        cm_to_px(self.width_cm)
    }

    /// Hit test against the door leaf and its swing quadrant.
    ///
    /// In the door's own frame the leaf runs from the hinge along +x and the
    /// swing arc sweeps up towards -y, so the glyph fills
    /// `[0, w] x [-w, 0]`.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let w = self.width_px();
        local_box_contains(self.anchor(), self.rotation, p, (0.0, -w, w, 0.0), tolerance)
    }
}
