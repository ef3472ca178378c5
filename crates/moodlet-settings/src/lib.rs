//! Moodlet Settings Crate
//!
//! Handles floorplan editor configuration: drawing defaults, export options
//! and viewport sizing, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, ExportSettings, ViewportSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
