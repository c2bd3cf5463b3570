//! Size and position limits.
//!
//! Two editing paths write sizes with different floors: the drag-resize
//! gesture and the numeric size fields in the toolbar. Both clamp rather
//! than reject, so every input produces a usable value.

use serde::{Deserialize, Serialize};

/// Minimum width/height produced by the resize gesture.
pub const RESIZE_MIN: f32 = 50.0;
/// Minimum width/height accepted by the numeric size fields.
pub const FIELD_MIN: f32 = 20.0;
/// Maximum width/height accepted by the numeric size fields.
pub const FIELD_MAX: f32 = 800.0;

/// Configurable clamps for the editing paths.
///
/// Deserializes with per-field defaults, so a host can override one bound
/// with `{"fieldMax": 1200}` and keep the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SizeLimits {
    /// Floor applied to both dimensions by the resize gesture.
    pub resize_min: f32,
    /// Floor applied by the numeric size fields.
    pub field_min: f32,
    /// Ceiling applied by the numeric size fields.
    pub field_max: f32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            resize_min: RESIZE_MIN,
            field_min: FIELD_MIN,
            field_max: FIELD_MAX,
        }
    }
}

impl SizeLimits {
    /// Positions never go negative.
    pub fn clamp_position(&self, x: f32, y: f32) -> (f32, f32) {
        (floor_at(x, 0.0), floor_at(y, 0.0))
    }

    /// Sizes from the resize gesture never drop below `resize_min`.
    pub fn clamp_resize(&self, width: f32, height: f32) -> (f32, f32) {
        (floor_at(width, self.resize_min), floor_at(height, self.resize_min))
    }

    /// Sizes from the numeric fields stay within `[field_min, field_max]`.
    pub fn clamp_field(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.field_min;
        }
        value.clamp(self.field_min, self.field_max.max(self.field_min))
    }
}

/// `max(value, floor)` that also maps NaN to the floor.
fn floor_at(value: f32, floor: f32) -> f32 {
    if value.is_nan() { floor } else { value.max(floor) }
}
