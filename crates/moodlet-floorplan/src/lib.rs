//! # Moodlet Floorplan
//!
//! Headless core of the floorplan editor. Provides:
//! - Wall, door, window and closet entities with a shared id space
//! - A tool state machine driven by pointer events
//! - Direct-manipulation edits on the selected entity
//! - Room polygon reconstruction and area calculation
//! - Room profile export and the save payload built from it
//!
//! Drawing coordinates are pixels at a fixed scale of 2 px per cm. Rendering
//! and networking belong to the host application.

pub mod editor_state;
pub mod model;
pub mod payload;
pub mod polygon;
pub mod profile;
pub mod selection;
pub mod serialization;
pub mod store;
pub mod tool;
pub mod viewport;

pub use editor_state::{FloorplanState, PointerOutcome};
pub use model::{
    Closet, Door, EntityId, EntityKind, Point, Segment, Wall, Window, ROTATION_STEP_DEG,
};
pub use payload::{FloorplanObjectRecord, ObjectType, PayloadMeta, SavePayload};
pub use polygon::{
    build_polygon_from_walls, EndpointMatcher, ExactMatch, PointMatcher, RoomPolygon,
    ToleranceMatch,
};
pub use profile::{
    generate_room_profile, DoorProfile, RoomProfile, RoomSummary, WallProfile, WindowProfile,
};
pub use selection::{Selection, SelectionManager};
pub use serialization::{DrawingMetadata, FloorplanFile, FloorplanSnapshot};
pub use store::EntityStore;
pub use tool::Tool;
pub use viewport::StageSize;
