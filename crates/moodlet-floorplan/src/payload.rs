//! Save payload handed to the persistence collaborator.
//!
//! The editor only produces these structures; sending them anywhere is the
//! host application's job.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::profile::RoomProfile;
use crate::serialization::FloorplanSnapshot;

/// Raw drawing plus its derived profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadMeta {
    pub raw: FloorplanSnapshot,
    pub ai_profile: RoomProfile,
}

/// Body of a floorplan save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub meta_json: PayloadMeta,
}

impl SavePayload {
    pub fn new(
        user_id: u64,
        image_url: Option<String>,
        raw: FloorplanSnapshot,
        ai_profile: RoomProfile,
    ) -> Self {
        Self {
            user_id,
            image_url,
            meta_json: PayloadMeta { raw, ai_profile },
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Wall,
    Door,
    Window,
    Room,
}

/// One row of the per-object floorplan table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorplanObjectRecord {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub position_json: Value,
}

impl RoomProfile {
    /// Flattens the profile into per-object rows.
    ///
    /// Walls, doors and windows become one row each. A `room` row carrying
    /// the outline and area is added only when the walls close into a loop.
    pub fn to_objects(&self) -> serde_json::Result<Vec<FloorplanObjectRecord>> {
        let mut records =
            Vec::with_capacity(self.walls.len() + self.doors.len() + self.windows.len() + 1);

        for wall in &self.walls {
            records.push(FloorplanObjectRecord {
                object_type: ObjectType::Wall,
                position_json: serde_json::to_value(wall)?,
            });
        }
        for door in &self.doors {
            records.push(FloorplanObjectRecord {
                object_type: ObjectType::Door,
                position_json: serde_json::to_value(door)?,
            });
        }
        for window in &self.windows {
            records.push(FloorplanObjectRecord {
                object_type: ObjectType::Window,
                position_json: serde_json::to_value(window)?,
            });
        }

        if !self.room.outline_cm.is_empty() {
            records.push(FloorplanObjectRecord {
                object_type: ObjectType::Room,
                position_json: json!({
                    "polygon": self.room.outline_cm,
                    "area_m2": self.room.area_m2,
                }),
            });
        }

        Ok(records)
    }
}
