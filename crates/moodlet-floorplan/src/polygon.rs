//! Room outline reconstruction from freeform walls.
//!
//! Walls are drawn independently, so the outline is recovered by chaining
//! walls end-to-start from the first wall's start point. Whether two
//! endpoints count as "the same point" is decided by a [`PointMatcher`];
//! the default is exact float equality.

use crate::model::{Point, Segment, Wall};
use moodlet_core::polygon_area;

/// Decides whether two wall endpoints are connected.
pub trait PointMatcher {
    fn matches(&self, a: Point, b: Point) -> bool;
}

/// Endpoints connect only when their coordinates are bitwise equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl PointMatcher for ExactMatch {
    fn matches(&self, a: Point, b: Point) -> bool {
        a.x == b.x && a.y == b.y
    }
}

/// Endpoints connect when they are within `epsilon` of each other.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceMatch {
    pub epsilon: f64,
}

impl ToleranceMatch {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl PointMatcher for ToleranceMatch {
    fn matches(&self, a: Point, b: Point) -> bool {
        a.distance_to(&b) <= self.epsilon
    }
}

/// Matcher selected from settings: exact unless a tolerance is configured.
#[derive(Debug, Clone, Copy)]
pub enum EndpointMatcher {
    Exact(ExactMatch),
    Tolerance(ToleranceMatch),
}

impl EndpointMatcher {
    pub fn from_tolerance(tolerance: Option<f64>) -> Self {
        match tolerance {
            Some(eps) if eps > 0.0 => EndpointMatcher::Tolerance(ToleranceMatch::new(eps)),
            _ => EndpointMatcher::Exact(ExactMatch),
        }
    }
}

impl PointMatcher for EndpointMatcher {
    fn matches(&self, a: Point, b: Point) -> bool {
        match self {
            EndpointMatcher::Exact(m) => m.matches(a, b),
            EndpointMatcher::Tolerance(m) => m.matches(a, b),
        }
    }
}

/// Outline traced through the walls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomPolygon {
    /// Visited points, starting with the first wall's start. A closed
    /// outline repeats its first point at the end.
    pub points: Vec<Point>,
    /// True when the trace returned to its starting point.
    pub closed: bool,
}

impl RoomPolygon {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area in drawing units squared; zero unless closed.
    pub fn area_px(&self) -> f64 {
        if self.closed {
            polygon_area(&self.points)
        } else {
            0.0
        }
    }

    /// Distinct vertices of a closed outline (closing repeat dropped).
    pub fn vertices(&self) -> &[Point] {
        match self.points.split_last() {
            Some((_, rest)) if self.closed => rest,
            _ => &self.points,
        }
    }
}

/// Traces the outline starting at the first wall's start point.
///
/// Fewer than three walls yield an empty polygon. From the current point,
/// the first unused wall whose start matches is followed to its end; the
/// trace stops when no wall continues it (open) or it arrives back at the
/// start (closed). Each wall is used at most once, so the trace always
/// terminates even when walls double back on themselves.
pub fn build_polygon_from_walls<M: PointMatcher>(walls: &[Wall], matcher: &M) -> RoomPolygon {
    if walls.len() < 3 {
        return RoomPolygon::default();
    }

    let origin = walls[0].start();
    let mut used = vec![false; walls.len()];
    let mut points = vec![origin];
    let mut current = origin;
    let mut closed = false;

    while let Some(idx) =
        (0..walls.len()).find(|&i| !used[i] && matcher.matches(walls[i].start(), current))
    {
        used[idx] = true;
        current = walls[idx].end();
        points.push(current);

        if matcher.matches(current, origin) {
            closed = true;
            break;
        }
    }

    tracing::trace!(
        "Traced {} point(s) through {} wall(s), closed={}",
        points.len(),
        walls.len(),
        closed
    );

    RoomPolygon { points, closed }
}
