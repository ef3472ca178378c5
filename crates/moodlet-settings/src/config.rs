//! Configuration and settings management for the floorplan editor
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Drawing defaults (new entity sizes, window clamp range, rotation mode)
//! - Export options (endpoint matching, closet units, save payload identity)
//! - Viewport sizing (side panel width, bottom margin)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults applied when the editor creates or edits entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Width of a freshly placed door, in cm
    pub default_door_width_cm: f64,
    /// Width of a freshly placed window, in cm
    pub default_window_width_cm: f64,
    /// Lowest position parameter a window may take along its wall.
    /// Must lie strictly inside (0, 1) so windows never reach a wall end.
    pub window_t_min: f64,
    /// Highest position parameter a window may take along its wall
    pub window_t_max: f64,
    /// Closet footprint width, in drawing units
    pub closet_width_px: f64,
    /// Closet footprint depth, in drawing units
    pub closet_depth_px: f64,
    /// Wrap door/closet rotation into [0, 360)
    pub normalize_rotation: bool,
    /// Drop zero-length walls on pointer-up instead of committing them
    pub discard_degenerate_walls: bool,
    /// Hit-test slack around walls and glyphs, in drawing units
    pub pick_tolerance_px: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            default_door_width_cm: 80.0,
            default_window_width_cm: 120.0,
            window_t_min: 0.05,
            window_t_max: 0.95,
            closet_width_px: 80.0,
            closet_depth_px: 60.0,
            normalize_rotation: false,
            discard_degenerate_walls: false,
            pick_tolerance_px: 6.0,
        }
    }
}

impl DrawingSettings {
    /// Clamp a position parameter into the allowed window range
    pub fn clamp_window_t(&self, t: f64) -> f64 {
        t.clamp(self.window_t_min, self.window_t_max)
    }
}

/// Room profile and save payload options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Endpoint matching slack for polygon reconstruction; `None` means exact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_tolerance_px: Option<f64>,
    /// Convert closet anchors to cm in the room profile
    pub convert_closets_to_cm: bool,
    /// Decimal places kept for the room area
    pub area_decimals: u32,
    /// User identifier placed in the save payload
    pub user_id: u64,
    /// Source image attached to the save payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            endpoint_tolerance_px: None,
            convert_closets_to_cm: false,
            area_decimals: 2,
            user_id: 1,
            image_url: None,
        }
    }
}

/// Drawing surface sizing relative to the host window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Width reserved for the tool panel
    pub side_panel_width: u32,
    /// Height reserved below the stage
    pub bottom_margin: u32,
    /// Stage width before the first resize
    pub default_width: u32,
    /// Stage height before the first resize
    pub default_height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            side_panel_width: 240,
            bottom_margin: 10,
            default_width: 1200,
            default_height: 800,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drawing defaults
    pub drawing: DrawingSettings,
    /// Export options
    pub export: ExportSettings,
    /// Viewport sizing
    pub viewport: ViewportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/moodlet/floorplan.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join("moodlet").join("floorplan.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor settings from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let d = &self.drawing;

        positive("drawing.default_door_width_cm", d.default_door_width_cm)?;
        positive("drawing.default_window_width_cm", d.default_window_width_cm)?;
        positive("drawing.closet_width_px", d.closet_width_px)?;
        positive("drawing.closet_depth_px", d.closet_depth_px)?;

        if !(d.pick_tolerance_px.is_finite() && d.pick_tolerance_px >= 0.0) {
            return Err(out_of_range("drawing.pick_tolerance_px", d.pick_tolerance_px));
        }

        for (key, t) in [
            ("drawing.window_t_min", d.window_t_min),
            ("drawing.window_t_max", d.window_t_max),
        ] {
            if !(t > 0.0 && t < 1.0) {
                return Err(out_of_range(key, t));
            }
        }
        if d.window_t_min > d.window_t_max {
            return Err(ConfigError::Inconsistent(format!(
                "window_t_min {} exceeds window_t_max {}",
                d.window_t_min, d.window_t_max
            )));
        }

        if let Some(eps) = self.export.endpoint_tolerance_px {
            if !(eps.is_finite() && eps >= 0.0) {
                return Err(out_of_range("export.endpoint_tolerance_px", eps));
            }
        }

        if self.export.area_decimals > 10 {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.area_decimals".to_string(),
                value: self.export.area_decimals.to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
