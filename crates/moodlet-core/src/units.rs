//! Unit conversion utilities
//!
//! The drawing surface works in drawing units ("px"); everything the user
//! types or the export carries is in centimeters. The ratio is fixed at
//! two drawing units per centimeter and must be identical everywhere so the
//! side panel and the room profile agree numerically.

use crate::error::FloorplanError;

/// Drawing units per real-world centimeter
pub const CM_TO_PX: f64 = 2.0;

/// Centimeters per drawing unit
pub const PX_TO_CM: f64 = 1.0 / CM_TO_PX;

/// Square centimeters in a square meter
pub const CM2_PER_M2: f64 = 10_000.0;

/// Convert centimeters to drawing units
pub fn cm_to_px(cm: f64) -> f64 {
    cm * CM_TO_PX
}

/// Convert drawing units to centimeters
pub fn px_to_cm(px: f64) -> f64 {
    px * PX_TO_CM
}

/// Convert an area in drawing units squared to square meters
pub fn px_area_to_m2(area_px: f64) -> f64 {
    area_px * PX_TO_CM * PX_TO_CM / CM2_PER_M2
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a length for the side panel
///
/// * `value_cm` - Length in centimeters
pub fn format_length_cm(value_cm: f64) -> String {
    format!("{:.0}", value_cm)
}

/// Parse a length typed into a side-panel field
///
/// Accepts an optional trailing `cm` suffix. Empty input parses as zero,
/// which the editing operations treat as "no change".
///
/// * `input` - String to parse
pub fn parse_length_cm(input: &str) -> Result<f64, FloorplanError> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix("cm")
        .map(str::trim_end)
        .unwrap_or(trimmed);

    if number.is_empty() {
        return Ok(0.0);
    }

    let value = number
        .parse::<f64>()
        .map_err(|e| FloorplanError::InvalidLength {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

    if !value.is_finite() {
        return Err(FloorplanError::InvalidLength {
            input: input.to_string(),
            reason: "length must be finite".to_string(),
        });
    }

    Ok(value)
}
