//! Scale resolution: viewport pixels → logical units.
//!
//! A shape may be displayed inside a preview surface that is rendered at a
//! different pixel size than its logical width, or inside an editor zoomed
//! by an enclosing context. The gesture code divides every pointer delta by
//! the resolved scale, and asks for it again on every move because the zoom
//! can change mid-gesture.

use std::cell::Cell;
use std::rc::Rc;

/// Supplies the current pixels-per-logical-unit ratio.
pub trait ScaleProvider {
    fn scale(&self) -> f32;
}

impl<F: Fn() -> f32> ScaleProvider for F {
    fn scale(&self) -> f32 {
        sanitize(self())
    }
}

/// A constant scale, for hosts without zoom and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScale(pub f32);

impl Default for FixedScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl ScaleProvider for FixedScale {
    fn scale(&self) -> f32 {
        sanitize(self.0)
    }
}

/// A shared zoom value owned by an enclosing editor.
///
/// Clones share the same cell, so the editor can change the zoom while a
/// gesture that holds a clone is in progress.
#[derive(Debug, Clone, Default)]
pub struct ZoomRef(Rc<Cell<Option<f32>>>);

impl ZoomRef {
    pub fn new(zoom: f32) -> Self {
        Self(Rc::new(Cell::new(Some(zoom))))
    }

    pub fn set(&self, zoom: f32) {
        self.0.set(Some(zoom));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<f32> {
        self.0.get()
    }
}

impl ScaleProvider for ZoomRef {
    fn scale(&self) -> f32 {
        resolve_scale(None, self.get())
    }
}

/// Layout metrics of the preview root container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewMetrics {
    /// Width the container is actually drawn at, in viewport pixels.
    pub rendered_width: f32,
    /// The container's unscaled layout width.
    pub logical_width: f32,
}

/// Preview metrics with a zoom fallback.
///
/// A browser host refreshes the metrics from layout before each event; the
/// zoom reference is consulted only when no usable preview is present.
#[derive(Debug, Clone, Default)]
pub struct PreviewScale {
    pub preview: Option<PreviewMetrics>,
    pub zoom: ZoomRef,
}

impl ScaleProvider for PreviewScale {
    fn scale(&self) -> f32 {
        resolve_scale(self.preview, self.zoom.get())
    }
}

/// Resolve the scale from the preview root, then the ambient zoom, then 1.
///
/// The preview is used when present with a non-zero logical width. A zoom of
/// zero or an unusable result falls through to 1, so the returned value is
/// always finite and positive.
pub fn resolve_scale(preview: Option<PreviewMetrics>, zoom: Option<f32>) -> f32 {
    if let Some(p) = preview
        && p.logical_width != 0.0
    {
        let ratio = p.rendered_width / p.logical_width;
        log::trace!("scale from preview root: {ratio}");
        return sanitize(ratio);
    }
    sanitize(zoom.unwrap_or(1.0))
}

fn sanitize(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}
