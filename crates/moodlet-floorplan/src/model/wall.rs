use serde::{Deserialize, Serialize};

use super::{EntityId, Point, Segment};
use moodlet_core::geometry::project_point_on_wall;

/// A straight wall segment in drawing units.
///
/// Serialized flat (`x1, y1, x2, y2`) to match the web client's raw drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: EntityId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Wall {
    pub fn new(id: EntityId, start: Point, end: Point) -> Self {
        Self {
            id,
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    /// Moves the end point, leaving the start anchored.
    pub fn set_end(&mut self, end: Point) {
        self.x2 = end.x;
        self.y2 = end.y;
    }

    /// Scales the wall about its start point so its length becomes
    /// `target_px`.
    ///
    /// Returns `false` without touching the wall when the target is not a
    /// positive finite number or the wall has no length to scale.
    pub fn rescale_to_length(&mut self, target_px: f64) -> bool {
        let current = self.length();
        if !(target_px.is_finite() && target_px > 0.0) || current == 0.0 {
            return false;
        }

        let scale = target_px / current;
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        self.x2 = self.x1 + dx * scale;
        self.y2 = self.y1 + dy * scale;
        true
    }

    /// Distance from `p` to the closest point of the wall.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        project_point_on_wall(p, self).point.distance_to(&p)
    }

    pub fn is_finite(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Segment for Wall {
    fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}
