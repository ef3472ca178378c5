//! Entity storage for the floorplan editor.
//!
//! Walls, doors, windows and closets live in insertion-ordered vectors with
//! a single monotonic id counter shared across kinds. Insertion order is
//! significant: nearest-wall ties and polygon tracing both resolve to the
//! first wall encountered.

use std::collections::HashSet;

use crate::model::{Closet, Door, EntityId, Point, Wall, Window};
use crate::serialization::FloorplanSnapshot;
use moodlet_core::{project_point_on_wall, FloorplanError, Projection};

fn is_valid_width(cm: f64) -> bool {
    cm.is_finite() && cm > 0.0
}

/// Owns every entity of a drawing session.
#[derive(Debug, Clone)]
pub struct EntityStore {
    walls: Vec<Wall>,
    doors: Vec<Door>,
    windows: Vec<Window>,
    closets: Vec<Closet>,
    next_id: u64,
}

impl EntityStore {
    /// Creates an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            closets: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The id the next created entity will receive.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.next_id)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub(crate) fn windows_mut(&mut self) -> &mut [Window] {
        &mut self.windows
    }

    pub fn closets(&self) -> &[Closet] {
        &self.closets
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
            && self.doors.is_empty()
            && self.windows.is_empty()
            && self.closets.is_empty()
    }

    pub fn wall(&self, id: EntityId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: EntityId) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    pub fn door(&self, id: EntityId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn door_mut(&mut self, id: EntityId) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    pub fn window(&self, id: EntityId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: EntityId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn closet(&self, id: EntityId) -> Option<&Closet> {
        self.closets.iter().find(|c| c.id == id)
    }

    pub fn closet_mut(&mut self, id: EntityId) -> Option<&mut Closet> {
        self.closets.iter_mut().find(|c| c.id == id)
    }

    /// Host wall of a window, if it still resolves.
    pub fn host_wall(&self, window: &Window) -> Option<&Wall> {
        self.wall(window.wall_id)
    }

    /// Appends a wall whose id was reserved earlier (a committed draft).
    pub fn push_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    /// Adds a wall between two points.
    pub fn add_wall(&mut self, start: Point, end: Point) -> EntityId {
        let id = self.generate_id();
        self.walls.push(Wall::new(id, start, end));
        id
    }

    /// Adds a door anchored at `anchor`.
    pub fn add_door(&mut self, anchor: Point, width_cm: f64) -> EntityId {
        let id = self.generate_id();
        self.doors.push(Door::new(id, anchor, width_cm));
        id
    }

    /// Adds a window on `wall_id` at position `pos_t`.
    ///
    /// The caller is responsible for clamping `pos_t`; the host is not
    /// checked, matching how dangling windows are tolerated elsewhere.
    pub fn add_window(&mut self, wall_id: EntityId, pos_t: f64, width_cm: f64) -> EntityId {
        let id = self.generate_id();
        self.windows.push(Window::new(id, wall_id, pos_t, width_cm));
        id
    }

    /// Adds a closet anchored at `anchor`.
    pub fn add_closet(&mut self, anchor: Point) -> EntityId {
        let id = self.generate_id();
        self.closets.push(Closet::new(id, anchor));
        id
    }

    /// Finds the wall closest to `point`.
    ///
    /// Linear scan in insertion order; a later wall only wins when strictly
    /// closer, so ties go to the first wall encountered.
    pub fn nearest_wall(&self, point: Point) -> Option<(&Wall, Projection)> {
        let mut best: Option<(&Wall, Projection, f64)> = None;

        for wall in &self.walls {
            let proj = project_point_on_wall(point, wall);
            let d = proj.point.distance_to(&point);
            match best {
                Some((_, _, best_d)) if d >= best_d => {}
                _ => best = Some((wall, proj, d)),
            }
        }

        best.map(|(wall, proj, _)| (wall, proj))
    }

    /// Windows whose host wall no longer resolves.
    pub fn dangling_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows
            .iter()
            .filter(move |w| self.wall(w.wall_id).is_none())
    }

    /// Copies the raw entity collections.
    pub fn to_snapshot(&self) -> FloorplanSnapshot {
        FloorplanSnapshot {
            walls: self.walls.clone(),
            doors: self.doors.clone(),
            windows: self.windows.clone(),
            closets: self.closets.clone(),
        }
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// Ids must be unique across all kinds and coordinates finite. Window
    /// positions must lie on the wall (`0..=1`) and door/window widths must
    /// be positive. Windows with dangling hosts are kept; they are skipped
    /// on export. The id counter resumes after the largest id present.
    pub fn from_snapshot(snapshot: FloorplanSnapshot) -> Result<Self, FloorplanError> {
        let mut seen = HashSet::new();
        let ids = snapshot
            .walls
            .iter()
            .map(|w| w.id)
            .chain(snapshot.doors.iter().map(|d| d.id))
            .chain(snapshot.windows.iter().map(|w| w.id))
            .chain(snapshot.closets.iter().map(|c| c.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(FloorplanError::DuplicateId { id: id.value() });
            }
        }

        if let Some(wall) = snapshot.walls.iter().find(|w| !w.is_finite()) {
            return Err(FloorplanError::InvalidSnapshot {
                reason: format!("wall {} has a non-finite coordinate", wall.id),
            });
        }
        if let Some(window) = snapshot
            .windows
            .iter()
            .find(|w| !(0.0..=1.0).contains(&w.pos_t))
        {
            return Err(FloorplanError::InvalidSnapshot {
                reason: format!(
                    "window {} position {} lies off its wall",
                    window.id, window.pos_t
                ),
            });
        }
        if let Some(window) = snapshot
            .windows
            .iter()
            .find(|w| !is_valid_width(w.width_cm))
        {
            return Err(FloorplanError::InvalidSnapshot {
                reason: format!("window {} has width {}", window.id, window.width_cm),
            });
        }
        if let Some(door) = snapshot.doors.iter().find(|d| !is_valid_width(d.width_cm)) {
            return Err(FloorplanError::InvalidSnapshot {
                reason: format!("door {} has width {}", door.id, door.width_cm),
            });
        }

        let next_id = seen.iter().map(|id| id.value()).max().map_or(1, |max| max + 1);

        let store = Self {
            walls: snapshot.walls,
            doors: snapshot.doors,
            windows: snapshot.windows,
            closets: snapshot.closets,
            next_id,
        };

        let dangling = store.dangling_windows().count();
        if dangling > 0 {
            tracing::warn!("Restored drawing has {} window(s) without a host wall", dangling);
        }

        Ok(store)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
