//! Export and persistence for the editor state.

use std::path::Path;

use anyhow::{Context, Result};

use super::FloorplanState;
use crate::payload::SavePayload;
use crate::profile::{generate_room_profile, RoomProfile};
use crate::serialization::{FloorplanFile, FloorplanSnapshot};
use moodlet_settings::Config;

impl FloorplanState {
    /// Derives the room profile from the current entities.
    pub fn room_profile(&self) -> RoomProfile {
        generate_room_profile(&self.store, &self.config.export)
    }

    /// Copies the raw entity collections.
    pub fn snapshot(&self) -> FloorplanSnapshot {
        self.store.to_snapshot()
    }

    /// Builds the save request body for the current drawing.
    pub fn save_payload(&self) -> SavePayload {
        SavePayload::new(
            self.config.export.user_id,
            self.config.export.image_url.clone(),
            self.snapshot(),
            self.room_profile(),
        )
    }

    /// Wraps the current drawing in a versioned file structure.
    pub fn to_file(&self, name: impl Into<String>) -> FloorplanFile {
        FloorplanFile::with_drawing(name, self.snapshot())
    }

    /// Saves the drawing to `path` and clears the modified flag.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>, name: impl Into<String>) -> Result<()> {
        let mut file = self.to_file(name);
        file.save_to_file(path)?;
        self.is_modified = false;
        Ok(())
    }

    /// Opens a drawing file as a new session.
    pub fn load_from_file(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let file = FloorplanFile::load_from_file(path)?;
        let state = Self::from_snapshot(file.drawing, config)
            .with_context(|| format!("Invalid drawing in {}", path.display()))?;
        tracing::info!(
            "Loaded drawing '{}' ({} wall(s))",
            file.metadata.name,
            state.store.walls().len()
        );
        Ok(state)
    }
}
