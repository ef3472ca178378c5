//! # Moodlet Core
//!
//! Core types and utilities for the Moodlet floorplan editor.
//! Provides the geometry primitives every editor operation is built on,
//! the fixed drawing-unit/centimeter conversion, and the shared error types.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::FloorplanError;

pub use geometry::{
    distance, point_at, polygon_area, project_point_on_wall, rotate_point, wall_angle_degrees,
    wall_length, Point, Projection, Segment,
};

pub use units::{
    cm_to_px, format_length_cm, parse_length_cm, px_area_to_m2, px_to_cm, round_to, CM2_PER_M2,
    CM_TO_PX, PX_TO_CM,
};
