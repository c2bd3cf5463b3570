//! Hit testing: point → region of a shape.
//!
//! A shape exposes three regions: its body (starts a drag), the resize
//! handle at the bottom-right corner (starts a resize), and the floating
//! toolbar above it (interactive controls that must never start a gesture).
//! The handle sits inside the body, so it is tested first.

use sb_core::model::{Bounds, Shape};

/// Which part of a shape a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The shape's visual body.
    Body,
    /// The bottom-right resize affordance.
    ResizeHandle,
    /// A button or other control marked as not starting a drag.
    Control,
}

impl HitTarget {
    /// Classify a DOM event target from its attributes.
    ///
    /// `is_handle`: the target is (inside) the resize handle.
    /// `is_button`: the target is (inside) a `<button>`.
    /// `no_drag`: the target carries `data-no-drag`.
    pub fn from_flags(is_handle: bool, is_button: bool, no_drag: bool) -> Self {
        if is_handle {
            HitTarget::ResizeHandle
        } else if is_button || no_drag {
            HitTarget::Control
        } else {
            HitTarget::Body
        }
    }
}

/// Geometry of the interactive affordances, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitConfig {
    /// Side length of the square resize handle.
    pub handle_size: f32,
    /// Height of the floating toolbar.
    pub toolbar_height: f32,
    /// Gap between the toolbar and the top of the shape.
    pub toolbar_gap: f32,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            handle_size: 16.0,
            toolbar_height: 36.0,
            toolbar_gap: 8.0,
        }
    }
}

impl HitConfig {
    /// The resize handle's box for a shape.
    pub fn handle_bounds(&self, shape: &Shape) -> Bounds {
        let b = shape.bounds();
        let size = self.handle_size.min(b.width).min(b.height).max(0.0);
        Bounds {
            x: b.right() - size,
            y: b.bottom() - size,
            width: size,
            height: size,
        }
    }

    /// The toolbar's box for a shape (above it, same width).
    pub fn toolbar_bounds(&self, shape: &Shape) -> Bounds {
        Bounds {
            x: shape.x,
            y: shape.y - self.toolbar_gap - self.toolbar_height,
            width: shape.width,
            height: self.toolbar_height,
        }
    }
}

/// Find which region of `shape` contains logical point (px, py).
///
/// The handle and toolbar only exist while controls are visible.
/// Returns `None` when the point misses the shape entirely.
pub fn hit_test(
    shape: &Shape,
    px: f32,
    py: f32,
    controls_visible: bool,
    config: &HitConfig,
) -> Option<HitTarget> {
    if controls_visible {
        if config.handle_bounds(shape).contains(px, py) {
            return Some(HitTarget::ResizeHandle);
        }
        if config.toolbar_bounds(shape).contains(px, py) {
            return Some(HitTarget::Control);
        }
    }

    shape.bounds().contains(px, py).then_some(HitTarget::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::id::ShapeId;
    use sb_core::model::ShapeKind;

    fn shape() -> Shape {
        Shape::new(ShapeId::intern("hit_box"), ShapeKind::Rectangle, 100.0, 100.0, 200.0, 150.0)
    }

    #[test]
    fn body_hit() {
        let hit = hit_test(&shape(), 150.0, 150.0, true, &HitConfig::default());
        assert_eq!(hit, Some(HitTarget::Body));
    }

    #[test]
    fn handle_takes_precedence_over_body() {
        // Bottom-right corner is (300, 250); the handle covers the last 16px.
        let hit = hit_test(&shape(), 295.0, 245.0, true, &HitConfig::default());
        assert_eq!(hit, Some(HitTarget::ResizeHandle));
    }

    #[test]
    fn hidden_handle_is_body() {
        let hit = hit_test(&shape(), 295.0, 245.0, false, &HitConfig::default());
        assert_eq!(hit, Some(HitTarget::Body));
    }

    #[test]
    fn toolbar_is_a_control() {
        let hit = hit_test(&shape(), 150.0, 80.0, true, &HitConfig::default());
        assert_eq!(hit, Some(HitTarget::Control));
        assert_eq!(hit_test(&shape(), 150.0, 80.0, false, &HitConfig::default()), None);
    }

    #[test]
    fn miss() {
        assert_eq!(hit_test(&shape(), 10.0, 10.0, true, &HitConfig::default()), None);
    }

    #[test]
    fn flags_map_to_targets() {
        assert_eq!(HitTarget::from_flags(true, true, true), HitTarget::ResizeHandle);
        assert_eq!(HitTarget::from_flags(false, true, false), HitTarget::Control);
        assert_eq!(HitTarget::from_flags(false, false, true), HitTarget::Control);
        assert_eq!(HitTarget::from_flags(false, false, false), HitTarget::Body);
    }
}
