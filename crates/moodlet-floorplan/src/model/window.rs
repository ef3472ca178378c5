use serde::{Deserialize, Serialize};

use super::{EntityId, Point, Segment, Wall};
use moodlet_core::{cm_to_px, point_at};

/// Half thickness of the three-line window glyph, in drawing units.
const GLYPH_HALF_THICKNESS_PX: f64 = 4.0;

/// A window bound to a host wall.
///
/// The position is a parameter along the host wall rather than a free
/// point, so the window always lies on its wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: EntityId,
    pub wall_id: EntityId,
    pub pos_t: f64,
    pub width_cm: f64,
}

impl Window {
    pub fn new(id: EntityId, wall_id: EntityId, pos_t: f64, width_cm: f64) -> Self {
        Self {
            id,
            wall_id,
            pos_t,
            width_cm,
        }
    }

    /// Center of the window on `host`.
    pub fn center_on(&self, host: &Wall) -> Point {
        point_at(host, self.pos_t)
    }

    pub fn width_px(&self) -> f64 {
        cm_to_px(self.width_cm)
    }

    /// Hit test against the glyph laid along `host`.
    pub fn contains_point(&self, host: &Wall, p: Point, tolerance: f64) -> bool {
        let half = self.width_px() / 2.0;
        super::local_box_contains(
            self.center_on(host),
            host.angle_degrees(),
            p,
            (
                -half,
                -GLYPH_HALF_THICKNESS_PX,
                half,
                GLYPH_HALF_THICKNESS_PX,
            ),
            tolerance,
        )
    }
}
