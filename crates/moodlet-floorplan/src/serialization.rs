//! Serialization and deserialization for floorplan drawings.
//!
//! A [`FloorplanSnapshot`] is the raw entity collections exactly as the web
//! client holds them. A [`FloorplanFile`] wraps a snapshot with a format
//! version and metadata for saving to disk.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{Closet, Door, Wall, Window};

/// Drawing file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Raw entity collections of a drawing session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorplanSnapshot {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub closets: Vec<Closet>,
}

/// Drawing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Complete drawing file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorplanFile {
    pub version: String,
    pub metadata: DrawingMetadata,
    pub drawing: FloorplanSnapshot,
}

impl FloorplanFile {
    /// Create a new empty drawing file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DrawingMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            drawing: FloorplanSnapshot::default(),
        }
    }

    /// Create a drawing file holding `snapshot`
    pub fn with_drawing(name: impl Into<String>, snapshot: FloorplanSnapshot) -> Self {
        let mut file = Self::new(name);
        file.drawing = snapshot;
        file
    }

    /// Save drawing to file
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.metadata.modified = Utc::now();

        let json = serde_json::to_string_pretty(self).context("Failed to serialize drawing")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        tracing::info!("Saved drawing '{}' to {}", self.metadata.name, path.display());
        Ok(())
    }

    /// Load drawing from file
    ///
    /// Accepts either a full drawing file or a bare snapshot, as exported by
    /// the web client's raw save data.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let value: serde_json::Value =
            serde_json::from_str(&content).context("Failed to parse drawing JSON")?;

        if value.get("version").is_some() {
            let file: FloorplanFile =
                serde_json::from_value(value).context("Failed to parse drawing file")?;
            if file.version != FILE_FORMAT_VERSION {
                tracing::warn!(
                    "Drawing {} has format version {}, expected {}",
                    path.display(),
                    file.version,
                    FILE_FORMAT_VERSION
                );
            }
            return Ok(file);
        }

        let snapshot: FloorplanSnapshot =
            serde_json::from_value(value).context("Failed to parse drawing snapshot")?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string();
        Ok(Self::with_drawing(name, snapshot))
    }
}
