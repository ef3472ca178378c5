//! Room profile derivation.
//!
//! Turns the drawing into a real-world-unit summary for downstream
//! consumers: room area, walls in cm, doors attached to their nearest wall,
//! windows placed on their host wall. The profile is rebuilt from scratch on
//! every export and never edited in place.

use serde::{Deserialize, Serialize};

use crate::model::{Closet, EntityId, Point, Segment};
use crate::polygon::{build_polygon_from_walls, EndpointMatcher};
use crate::store::EntityStore;
use moodlet_core::{px_area_to_m2, px_to_cm, round_to, PX_TO_CM};
use moodlet_settings::ExportSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub area_m2: f64,
    /// Closed outline in cm, first vertex not repeated. Empty when the walls
    /// do not form a loop. Not part of the serialized profile.
    #[serde(skip)]
    pub outline_cm: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallProfile {
    pub id: EntityId,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub length_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorProfile {
    pub id: EntityId,
    pub center: [f64; 2],
    pub rotation_deg: f64,
    pub width_cm: f64,
    /// Nearest wall at export time; `None` when there are no walls.
    pub attached_wall: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowProfile {
    pub id: EntityId,
    pub center: [f64; 2],
    pub width_cm: f64,
    pub attached_wall: EntityId,
}

/// Export-ready summary of a drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomProfile {
    pub room: RoomSummary,
    pub walls: Vec<WallProfile>,
    pub doors: Vec<DoorProfile>,
    pub windows: Vec<WindowProfile>,
    pub closets: Vec<Closet>,
}

fn to_cm(p: Point) -> [f64; 2] {
    p.scaled(PX_TO_CM).to_array()
}

/// Derives the room profile for the entities in `store`.
pub fn generate_room_profile(store: &EntityStore, export: &ExportSettings) -> RoomProfile {
    let matcher = EndpointMatcher::from_tolerance(export.endpoint_tolerance_px);
    let polygon = build_polygon_from_walls(store.walls(), &matcher);
    let area_m2 = round_to(px_area_to_m2(polygon.area_px()), export.area_decimals);
    let outline_cm = if polygon.closed {
        polygon.vertices().iter().copied().map(to_cm).collect()
    } else {
        Vec::new()
    };

    let walls = store
        .walls()
        .iter()
        .map(|w| WallProfile {
            id: w.id,
            start: to_cm(w.start()),
            end: to_cm(w.end()),
            length_cm: px_to_cm(w.length()),
        })
        .collect();

    let doors = store
        .doors()
        .iter()
        .map(|d| DoorProfile {
            id: d.id,
            center: to_cm(d.anchor()),
            rotation_deg: d.rotation,
            width_cm: d.width_cm,
            attached_wall: store.nearest_wall(d.anchor()).map(|(w, _)| w.id),
        })
        .collect();

    let windows: Vec<WindowProfile> = store
        .windows()
        .iter()
        .filter_map(|win| {
            let Some(host) = store.host_wall(win) else {
                tracing::debug!(
                    "Skipping window {}: host wall {} not found",
                    win.id,
                    win.wall_id
                );
                return None;
            };
            Some(WindowProfile {
                id: win.id,
                center: to_cm(win.center_on(host)),
                width_cm: win.width_cm,
                attached_wall: host.id,
            })
        })
        .collect();

    let closets = store
        .closets()
        .iter()
        .map(|c| {
            let mut closet = c.clone();
            if export.convert_closets_to_cm {
                closet.x = px_to_cm(c.x);
                closet.y = px_to_cm(c.y);
            }
            closet
        })
        .collect();

    tracing::debug!(
        "Room profile: area={} m2, closed={}, {} wall(s), {} window(s) exported",
        area_m2,
        polygon.closed,
        store.walls().len(),
        windows.len()
    );

    RoomProfile {
        room: RoomSummary {
            area_m2,
            outline_cm,
        },
        walls,
        doors,
        windows,
        closets,
    }
}
