//! Floorplan editor state for UI integration.
//!
//! `FloorplanState` owns a whole drawing session: entities, the active tool,
//! the in-progress wall draft, the selection and the editor settings. The
//! host UI forwards pointer events and panel actions to it; everything runs
//! synchronously on the caller's thread.
//!
//! This module is split into submodules:
//! - `editing`: selection and direct-manipulation edits
//! - `export`: room profile, save payload and file I/O

mod editing;
mod export;

use crate::model::{EntityId, Point, Segment, Wall};
use crate::selection::SelectionManager;
use crate::serialization::FloorplanSnapshot;
use crate::store::EntityStore;
use crate::tool::Tool;
use crate::viewport::StageSize;
use moodlet_core::FloorplanError;
use moodlet_settings::Config;

/// What a pointer-down produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed.
    Ignored,
    /// A door, window or closet was created.
    Created(EntityId),
    /// A wall draft was started; the id is reserved for the wall.
    DraftStarted(EntityId),
}

/// Floorplan editor state
#[derive(Debug, Clone)]
pub struct FloorplanState {
    pub store: EntityStore,
    pub selection_manager: SelectionManager,
    pub config: Config,
    pub is_modified: bool,
    tool: Tool,
    draft: Option<Wall>,
    wall_length_input_cm: f64,
    stage: StageSize,
}

impl FloorplanState {
    /// Creates an empty session with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty session with the given settings.
    pub fn with_config(config: Config) -> Self {
        let stage = StageSize::initial(&config.viewport);
        Self {
            store: EntityStore::new(),
            selection_manager: SelectionManager::new(),
            config,
            is_modified: false,
            tool: Tool::Select,
            draft: None,
            wall_length_input_cm: 0.0,
            stage,
        }
    }

    /// Restores a session from a raw snapshot.
    ///
    /// Window positions are pulled into the configured clamp range so a
    /// restored window never sits on a wall end.
    pub fn from_snapshot(
        snapshot: FloorplanSnapshot,
        config: Config,
    ) -> Result<Self, FloorplanError> {
        let mut store = EntityStore::from_snapshot(snapshot)?;

        for window in store.windows_mut() {
            let t = config.drawing.clamp_window_t(window.pos_t);
            if t != window.pos_t {
                tracing::warn!(
                    "Window {} position {} clamped to {}",
                    window.id,
                    window.pos_t,
                    t
                );
                window.pos_t = t;
            }
        }

        let mut state = Self::with_config(config);
        state.store = store;
        Ok(state)
    }

    /// Gets the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools.
    ///
    /// Clears the selection and abandons any wall draft so no stale state
    /// carries over into the new tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if let Some(draft) = self.draft.take() {
            tracing::debug!("Discarding wall draft {} on tool switch", draft.id);
        }
        self.selection_manager.clear();
        if self.tool != tool {
            tracing::debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    /// Switches tools by tool-panel index.
    pub fn set_tool_index(&mut self, index: i32) {
        self.set_tool(Tool::from_index(index));
    }

    /// The wall being drawn, if any.
    pub fn draft(&self) -> Option<&Wall> {
        self.draft.as_ref()
    }

    pub fn stage(&self) -> StageSize {
        self.stage
    }

    /// Resizes the stage to follow the host window.
    pub fn resize_stage(&mut self, window_width: u32, window_height: u32) {
        self.stage = StageSize::for_window(window_width, window_height, &self.config.viewport);
    }

    /// Handles a pointer-down on the stage background.
    pub fn pointer_down(&mut self, p: Point) -> PointerOutcome {
        match self.tool {
            Tool::Door => {
                let id = self
                    .store
                    .add_door(p, self.config.drawing.default_door_width_cm);
                tracing::debug!("Placed door {} at ({}, {})", id, p.x, p.y);
                self.is_modified = true;
                PointerOutcome::Created(id)
            }
            Tool::Closet => {
                let id = self.store.add_closet(p);
                tracing::debug!("Placed closet {} at ({}, {})", id, p.x, p.y);
                self.is_modified = true;
                PointerOutcome::Created(id)
            }
            Tool::Window => {
                let Some((wall, proj)) = self.store.nearest_wall(p) else {
                    tracing::debug!("Window placement ignored: no walls");
                    return PointerOutcome::Ignored;
                };
                let wall_id = wall.id;
                let t = self.config.drawing.clamp_window_t(proj.t);
                let id = self.store.add_window(
                    wall_id,
                    t,
                    self.config.drawing.default_window_width_cm,
                );
                tracing::debug!("Placed window {} on wall {} at t={}", id, wall_id, t);
                self.is_modified = true;
                PointerOutcome::Created(id)
            }
            Tool::Wall => {
                let id = self.store.generate_id();
                self.draft = Some(Wall::new(id, p, p));
                PointerOutcome::DraftStarted(id)
            }
            Tool::Select => PointerOutcome::Ignored,
        }
    }

    /// Handles pointer movement; only a wall draft reacts.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set_end(p);
                true
            }
            None => false,
        }
    }

    /// Handles pointer release, committing the wall draft.
    ///
    /// Returns the id of the committed wall. A zero-length draft is
    /// committed too unless `discard_degenerate_walls` is set.
    pub fn pointer_up(&mut self) -> Option<EntityId> {
        let draft = self.draft.take()?;

        if self.config.drawing.discard_degenerate_walls && draft.is_degenerate() {
            tracing::debug!("Dropping zero-length wall draft {}", draft.id);
            return None;
        }

        let id = draft.id;
        tracing::debug!(
            "Committed wall {} ({}, {}) -> ({}, {})",
            id,
            draft.x1,
            draft.y1,
            draft.x2,
            draft.y2
        );
        self.store.push_wall(draft);
        self.is_modified = true;
        Some(id)
    }
}

impl Default for FloorplanState {
    fn default() -> Self {
        Self::new()
    }
}
