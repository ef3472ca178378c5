//! Selection and direct-manipulation edits.
//!
//! Edits act on the current selection and report whether anything changed.
//! A selection whose entity is gone, or an edit aimed at the wrong kind, is
//! a no-op rather than an error.

use super::FloorplanState;
use crate::model::{EntityId, Point, Segment};
use crate::selection::{Selection, SelectionManager};
use moodlet_core::{
    cm_to_px, format_length_cm, parse_length_cm, project_point_on_wall, px_to_cm, FloorplanError,
};

fn is_valid_width(cm: f64) -> bool {
    cm.is_finite() && cm > 0.0
}

impl FloorplanState {
    /// Returns the active selection.
    pub fn selection(&self) -> Selection {
        self.selection_manager.current()
    }

    /// Selects a wall and seeds the length input from its current length.
    pub fn select_wall(&mut self, id: EntityId) -> bool {
        let Some(wall) = self.store.wall(id) else {
            return false;
        };
        self.wall_length_input_cm = px_to_cm(wall.length()).round();
        self.selection_manager.select(Selection::Wall(id));
        true
    }

    pub fn select_window(&mut self, id: EntityId) -> bool {
        if self.store.window(id).is_none() {
            return false;
        }
        self.selection_manager.select(Selection::Window(id));
        true
    }

    pub fn select_door(&mut self, id: EntityId) -> bool {
        if self.store.door(id).is_none() {
            return false;
        }
        self.selection_manager.select(Selection::Door(id));
        true
    }

    pub fn select_closet(&mut self, id: EntityId) -> bool {
        if self.store.closet(id).is_none() {
            return false;
        }
        self.selection_manager.select(Selection::Closet(id));
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection_manager.clear();
    }

    /// Finds the topmost entity under `point` without selecting it.
    pub fn pick(&self, point: Point) -> Selection {
        SelectionManager::hit_test(&self.store, point, &self.config.drawing)
    }

    /// Selects whatever is under `point`, clearing the selection on a miss.
    pub fn select_at(&mut self, point: Point) -> Selection {
        let hit = self.pick(point);
        match hit {
            Selection::Wall(id) => {
                self.select_wall(id);
            }
            other => self.selection_manager.select(other),
        }
        hit
    }

    /// Value shown in the wall-length field, in cm.
    pub fn wall_length_input(&self) -> f64 {
        self.wall_length_input_cm
    }

    /// Wall-length field as displayed, whole centimeters.
    pub fn wall_length_input_text(&self) -> String {
        format_length_cm(self.wall_length_input_cm)
    }

    pub fn set_wall_length_input(&mut self, cm: f64) {
        self.wall_length_input_cm = cm;
    }

    /// Parses typed text into the wall-length field.
    ///
    /// The field keeps its previous value when the text does not parse.
    pub fn set_wall_length_input_text(&mut self, text: &str) -> Result<(), FloorplanError> {
        self.wall_length_input_cm = parse_length_cm(text)?;
        Ok(())
    }

    /// Applies the wall-length field to the selected wall.
    pub fn apply_wall_length_input(&mut self) -> bool {
        self.apply_wall_length(self.wall_length_input_cm)
    }

    /// Rescales the selected wall to `target_cm`, keeping its start point.
    pub fn apply_wall_length(&mut self, target_cm: f64) -> bool {
        let Selection::Wall(id) = self.selection() else {
            return false;
        };
        let Some(wall) = self.store.wall_mut(id) else {
            return false;
        };

        if !wall.rescale_to_length(cm_to_px(target_cm)) {
            tracing::debug!("Ignoring length {} cm for wall {}", target_cm, id);
            return false;
        }

        tracing::debug!("Wall {} rescaled to {} cm", id, target_cm);
        self.is_modified = true;
        true
    }

    /// Sets the width of the selected window. Its position is unchanged.
    pub fn set_window_width(&mut self, width_cm: f64) -> bool {
        if !is_valid_width(width_cm) {
            return false;
        }
        let Selection::Window(id) = self.selection() else {
            return false;
        };
        let Some(window) = self.store.window_mut(id) else {
            return false;
        };
        window.width_cm = width_cm;
        self.is_modified = true;
        true
    }

    /// Sets the width of the selected door.
    pub fn set_door_width(&mut self, width_cm: f64) -> bool {
        if !is_valid_width(width_cm) {
            return false;
        }
        let Selection::Door(id) = self.selection() else {
            return false;
        };
        let Some(door) = self.store.door_mut(id) else {
            return false;
        };
        door.width_cm = width_cm;
        self.is_modified = true;
        true
    }

    /// Rotates the selected door or closet by 90 degrees.
    pub fn rotate_selected(&mut self) -> bool {
        let normalize = self.config.drawing.normalize_rotation;

        let rotated = match self.selection() {
            Selection::Door(id) => self.store.door_mut(id).map(|d| {
                d.rotate(normalize);
                d.rotation
            }),
            Selection::Closet(id) => self.store.closet_mut(id).map(|c| {
                c.rotate(normalize);
                c.rotation
            }),
            _ => None,
        };

        match rotated {
            Some(rotation) => {
                tracing::debug!("Rotated {:?} to {}", self.selection(), rotation);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Slides a window along its host wall to follow the pointer.
    pub fn drag_window(&mut self, id: EntityId, pointer: Point) -> bool {
        let Some(window) = self.store.window(id) else {
            return false;
        };
        let Some(host) = self.store.host_wall(window) else {
            tracing::debug!("Window {} has no host wall; drag ignored", id);
            return false;
        };

        let t = self
            .config
            .drawing
            .clamp_window_t(project_point_on_wall(pointer, host).t);

        if let Some(window) = self.store.window_mut(id) {
            window.pos_t = t;
        }
        self.is_modified = true;
        true
    }

    pub fn move_door(&mut self, id: EntityId, anchor: Point) -> bool {
        let Some(door) = self.store.door_mut(id) else {
            return false;
        };
        door.move_to(anchor);
        self.is_modified = true;
        true
    }

    pub fn move_closet(&mut self, id: EntityId, anchor: Point) -> bool {
        let Some(closet) = self.store.closet_mut(id) else {
            return false;
        };
        closet.move_to(anchor);
        self.is_modified = true;
        true
    }

    /// Where to draw a window's glyph. `None` when its host is gone.
    pub fn window_center(&self, id: EntityId) -> Option<Point> {
        let window = self.store.window(id)?;
        let host = self.store.host_wall(window)?;
        Some(window.center_on(host))
    }

    /// Glyph rotation in degrees, following the host wall.
    pub fn window_angle(&self, id: EntityId) -> Option<f64> {
        let window = self.store.window(id)?;
        let host = self.store.host_wall(window)?;
        Some(host.angle_degrees())
    }

    pub fn wall_length_cm(&self, id: EntityId) -> Option<f64> {
        self.store.wall(id).map(|w| px_to_cm(w.length()))
    }
}
