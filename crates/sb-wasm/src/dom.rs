//! DOM reads: preview-root scale and event-target classification.

use sb_editor::scale::{PreviewMetrics, ScaleProvider, ZoomRef, resolve_scale};
use sb_render::hit::HitTarget;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Default id of the container wrapping a scaled preview of the canvas.
pub const DEFAULT_PREVIEW_ROOT: &str = "preview-root";

/// Attribute marking the resize handle element.
pub const HANDLE_ATTR: &str = "data-resize-handle";
/// Attribute marking descendants that must not start a drag.
pub const NO_DRAG_ATTR: &str = "data-no-drag";

/// Scale provider backed by live layout.
///
/// Walks up from the shape's root element to the preview root on every
/// call, so a preview resized mid-gesture is tracked.
pub struct DomScale<'a> {
    pub element: Option<&'a Element>,
    pub preview_root_id: &'a str,
    pub zoom: &'a ZoomRef,
}

impl DomScale<'_> {
    fn preview_metrics(&self) -> Option<PreviewMetrics> {
        let root = self
            .element?
            .closest(&format!("#{}", self.preview_root_id))
            .ok()
            .flatten()?;
        let rendered_width = root.get_bounding_client_rect().width() as f32;
        let logical_width = root.dyn_ref::<HtmlElement>()?.offset_width() as f32;
        Some(PreviewMetrics {
            rendered_width,
            logical_width,
        })
    }
}

impl ScaleProvider for DomScale<'_> {
    fn scale(&self) -> f32 {
        resolve_scale(self.preview_metrics(), self.zoom.get())
    }
}

/// Classify the element a pointer-down landed on.
pub fn classify_target(target: &Element) -> HitTarget {
    let within = |selector: &str| matches!(target.closest(selector), Ok(Some(_)));
    HitTarget::from_flags(
        within(&format!("[{HANDLE_ATTR}]")),
        within("button"),
        within(&format!("[{NO_DRAG_ATTR}]")),
    )
}
