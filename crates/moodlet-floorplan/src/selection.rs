use crate::model::{EntityId, EntityKind, Point};
use crate::store::EntityStore;
use moodlet_settings::DrawingSettings;

/// What the side panel is currently editing.
///
/// At most one entity is selected; selecting one kind replaces any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Wall(EntityId),
    Window(EntityId),
    Door(EntityId),
    Closet(EntityId),
}

impl Selection {
    pub fn id(self) -> Option<EntityId> {
        match self {
            Selection::None => None,
            Selection::Wall(id)
            | Selection::Window(id)
            | Selection::Door(id)
            | Selection::Closet(id) => Some(id),
        }
    }

    pub fn kind(self) -> Option<EntityKind> {
        match self {
            Selection::None => None,
            Selection::Wall(_) => Some(EntityKind::Wall),
            Selection::Window(_) => Some(EntityKind::Window),
            Selection::Door(_) => Some(EntityKind::Door),
            Selection::Closet(_) => Some(EntityKind::Closet),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Tracks the active selection and resolves pointer hits to entities.
///
/// The manager only records ids; it never owns entities. A selection whose
/// entity is gone simply makes the selection-bound edits no-ops.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    current: Selection,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active selection.
    pub fn current(&self) -> Selection {
        self.current
    }

    /// Replaces the active selection.
    pub fn select(&mut self, selection: Selection) {
        if self.current != selection {
            tracing::debug!("Selection changed: {:?} -> {:?}", self.current, selection);
        }
        self.current = selection;
    }

    /// Clears the active selection.
    pub fn clear(&mut self) {
        self.select(Selection::None);
    }

    /// Finds the topmost entity under `point`.
    ///
    /// Entities are tested in reverse render order: closets, doors, windows,
    /// then walls. Within a kind, later entities are drawn on top and win.
    /// Windows whose host wall is gone are not drawn and cannot be hit.
    pub fn hit_test(store: &EntityStore, point: Point, drawing: &DrawingSettings) -> Selection {
        let tol = drawing.pick_tolerance_px;

        if let Some(c) = store.closets().iter().rev().find(|c| {
            c.contains_point(point, drawing.closet_width_px, drawing.closet_depth_px, tol)
        }) {
            return Selection::Closet(c.id);
        }

        if let Some(d) = store
            .doors()
            .iter()
            .rev()
            .find(|d| d.contains_point(point, tol))
        {
            return Selection::Door(d.id);
        }

        if let Some(w) = store.windows().iter().rev().find(|w| {
            store
                .host_wall(w)
                .is_some_and(|host| w.contains_point(host, point, tol))
        }) {
            return Selection::Window(w.id);
        }

        if let Some(w) = store
            .walls()
            .iter()
            .rev()
            .find(|w| w.distance_to_point(point) <= tol)
        {
            return Selection::Wall(w.id);
        }

        Selection::None
    }
}
