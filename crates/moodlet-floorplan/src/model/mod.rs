use serde::{Deserialize, Serialize};
use std::fmt;

mod closet;
mod door;
mod wall;
mod window;

pub use closet::Closet;
pub use door::Door;
pub use wall::Wall;
pub use window::Window;

pub use moodlet_core::geometry::{Point, Segment};

/// Identifier shared by every entity kind.
///
/// Handed out by a monotonic counter in [`crate::store::EntityStore`], so
/// ids are never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Wall,
    Door,
    Window,
    Closet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "wall"),
            Self::Door => write!(f, "door"),
            Self::Window => write!(f, "window"),
            Self::Closet => write!(f, "closet"),
        }
    }
}

/// Degrees added per rotate activation on a door or closet.
pub const ROTATION_STEP_DEG: f64 = 90.0;

/// Adds one rotation step, optionally wrapping into `[0, 360)`.
pub(crate) fn advance_rotation(current: f64, normalize: bool) -> f64 {
    let next = current + ROTATION_STEP_DEG;
    if normalize {
        next.rem_euclid(360.0)
    } else {
        next
    }
}

/// Tests `p` against an axis-aligned box in the glyph's own frame.
///
/// The glyph sits at `anchor` and is turned by `rotation_deg`; the point is
/// rotated back into that frame before the box test.
pub(crate) fn local_box_contains(
    anchor: Point,
    rotation_deg: f64,
    p: Point,
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
    tolerance: f64,
) -> bool {
    let local = moodlet_core::rotate_point(p, anchor, -rotation_deg);
    let lx = local.x - anchor.x;
    let ly = local.y - anchor.y;
    lx >= min_x - tolerance
        && lx <= max_x + tolerance
        && ly >= min_y - tolerance
        && ly <= max_y + tolerance
}
