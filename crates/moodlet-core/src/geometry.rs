//! 2D geometry primitives for the floorplan editor.
//!
//! Everything here is pure and allocation free apart from `polygon_area`
//! reading a slice. Coordinates are in drawing units.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the coordinates as `[x, y]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Scales both coordinates by `factor`.
    pub fn scaled(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A straight segment with a directed start and end.
///
/// Walls and wall drafts implement this so the projection and angle helpers
/// work on either.
pub trait Segment {
    fn start(&self) -> Point;
    fn end(&self) -> Point;

    fn length(&self) -> f64 {
        wall_length(self)
    }

    fn angle_degrees(&self) -> f64 {
        wall_angle_degrees(self)
    }

    fn is_degenerate(&self) -> bool {
        let (s, e) = (self.start(), self.end());
        s.x == e.x && s.y == e.y
    }
}

impl Segment for (Point, Point) {
    fn start(&self) -> Point {
        self.0
    }

    fn end(&self) -> Point {
        self.1
    }
}

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Closest point on the segment.
    pub point: Point,
    /// Position along the segment, `0.0` at the start and `1.0` at the end.
    pub t: f64,
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Length of a segment.
pub fn wall_length<S: Segment + ?Sized>(segment: &S) -> f64 {
    distance(segment.start(), segment.end())
}

/// Direction of a segment in degrees, `atan2(dy, dx)` convention.
pub fn wall_angle_degrees<S: Segment + ?Sized>(segment: &S) -> f64 {
    let (s, e) = (segment.start(), segment.end());
    (e.y - s.y).atan2(e.x - s.x).to_degrees()
}

/// Projects `point` onto the segment (not the infinite line).
///
/// `t` is clamped to `[0, 1]`. A zero-length segment behaves as a single
/// point: the start is returned with `t = 0`.
pub fn project_point_on_wall<S: Segment + ?Sized>(point: Point, segment: &S) -> Projection {
    let (s, e) = (segment.start(), segment.end());
    let wx = e.x - s.x;
    let wy = e.y - s.y;
    let len_sq = wx * wx + wy * wy;

    if len_sq == 0.0 {
        return Projection { point: s, t: 0.0 };
    }

    let vx = point.x - s.x;
    let vy = point.y - s.y;
    let t = ((vx * wx + vy * wy) / len_sq).clamp(0.0, 1.0);

    Projection {
        point: Point::new(s.x + wx * t, s.y + wy * t),
        t,
    }
}

/// Point at parameter `t` along the segment. `t` is not clamped.
pub fn point_at<S: Segment + ?Sized>(segment: &S, t: f64) -> Point {
    let (s, e) = (segment.start(), segment.end());
    Point::new(s.x + (e.x - s.x) * t, s.y + (e.y - s.y) * t)
}

/// Unsigned shoelace area of a polygon given by its ordered vertices.
///
/// The polygon is closed implicitly; a repeated closing vertex contributes
/// nothing. Fewer than three vertices yield zero.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let sum: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum();

    sum.abs() / 2.0
}

/// Rotates `point` about `pivot` by `angle_deg` degrees.
///
/// Positive angles turn clockwise on a y-down drawing surface, matching how
/// rotations are applied to door and closet glyphs.
pub fn rotate_point(point: Point, pivot: Point, angle_deg: f64) -> Point {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        dx * cos_a - dy * sin_a + pivot.x,
        dx * sin_a + dy * cos_a + pivot.y,
    )
}
