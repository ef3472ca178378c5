//! Drawing stage sizing.
//!
//! The stage fills the host window minus the tool panel on the left and a
//! small margin at the bottom. Pointer coordinates handed to the editor are
//! already relative to the stage origin, so sizing never affects geometry.

use moodlet_settings::ViewportSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSize {
    pub width: u32,
    pub height: u32,
}

impl StageSize {
    /// Stage size before the host reports its window dimensions.
    pub fn initial(settings: &ViewportSettings) -> Self {
        Self {
            width: settings.default_width,
            height: settings.default_height,
        }
    }

    /// Stage size for a host window of `window_width x window_height`.
    pub fn for_window(window_width: u32, window_height: u32, settings: &ViewportSettings) -> Self {
        Self {
            width: window_width.saturating_sub(settings.side_panel_width),
            height: window_height.saturating_sub(settings.bottom_margin),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width as f64 && y <= self.height as f64
    }
}

impl Default for StageSize {
    fn default() -> Self {
        Self::initial(&ViewportSettings::default())
    }
}
