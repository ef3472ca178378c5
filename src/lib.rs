//! # Moodlet
//!
//! Headless floorplan editor for the Moodlet interior-design app:
//! - Draw walls and place doors, windows and closets from pointer events
//! - Edit wall lengths, opening widths and rotations from a side panel
//! - Derive a room profile (area, walls, attached openings) in centimeters
//! - Produce the save payload the backend stores
//!
//! ## Architecture
//!
//! Moodlet is organized as a workspace with multiple crates:
//!
//! 1. **moodlet-core** - Geometry primitives, unit conversion, error types
//! 2. **moodlet-settings** - Editor configuration (JSON/TOML)
//! 3. **moodlet-floorplan** - Entity model, tool state machine, room profile export
//! 4. **moodlet** - Main binary that exports a saved drawing

pub use moodlet_core::{FloorplanError, Point};

pub use moodlet_floorplan::{
    build_polygon_from_walls, generate_room_profile, Closet, Door, EntityId, EntityStore,
    FloorplanFile, FloorplanObjectRecord, FloorplanSnapshot, FloorplanState, PointerOutcome,
    RoomProfile, SavePayload, Selection, StageSize, Tool, Wall, Window,
};

pub use moodlet_settings::{Config, DrawingSettings, ExportSettings, ViewportSettings};

use anyhow::Context;
use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Loads a saved drawing and builds its save payload.
///
/// * `drawing` - Drawing file or bare snapshot
/// * `settings` - Optional settings file; defaults apply when `None`
pub fn export_drawing(drawing: &Path, settings: Option<&Path>) -> anyhow::Result<SavePayload> {
    let config = match settings {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Config::default(),
    };

    let state = FloorplanState::load_from_file(drawing, config)?;
    let payload = state.save_payload();
    tracing::info!(
        "Exported {} wall(s), room area {} m2",
        payload.meta_json.ai_profile.walls.len(),
        payload.meta_json.ai_profile.room.area_m2
    );
    Ok(payload)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Payload JSON owns stdout
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
