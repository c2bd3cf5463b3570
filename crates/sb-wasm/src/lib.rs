//! WASM bridge for Shapeboard: exposes the shape engine to a browser host.
//!
//! Compiled via `wasm-pack build --target web`. The page renders each shape
//! from `render_svg`, forwards pointer events here, and acts on the returned
//! JSON: `preventDefault` for the event, `capture` to attach or detach its
//! document-level move/up/cancel/touchmove listeners and pointer capture.
//! Position, size, color and removal changes are delivered to the host's
//! callbacks as they happen.

mod dom;
mod state;

pub use state::CanvasState;

use dom::{DEFAULT_PREVIEW_ROOT, DomScale, classify_target};
use js_sys::Function;
use sb_core::id::ShapeId;
use sb_core::model::ShapeKind;
use sb_editor::gesture::{Capture, Response};
use sb_editor::host::{ShapeHost, ShapeUpdate, dispatch};
use sb_editor::input::{InputEvent, PointerButton, PointerKind};
use sb_render::hit::HitTarget;
use state::{hit_name, response_json, update_json};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// The main WASM-facing controller for a set of host-owned shapes.
#[wasm_bindgen]
pub struct ShapeCanvas {
    state: CanvasState,
    callbacks: JsCallbacks,
    preview_root_id: String,
    /// Root element of each shape with a gesture in progress; scale is read
    /// from its ancestry on every move.
    gesture_elements: HashMap<ShapeId, Element>,
}

impl Default for ShapeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ShapeCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        Self {
            state: CanvasState::new(),
            callbacks: JsCallbacks::default(),
            preview_root_id: DEFAULT_PREVIEW_ROOT.to_string(),
            gesture_elements: HashMap::new(),
        }
    }

    /// Register the host's change callbacks:
    /// `(id, x, y)`, `(id, width, height)`, `(id)` and `(id, color)`.
    pub fn set_callbacks(
        &mut self,
        on_position_change: Option<Function>,
        on_size_change: Option<Function>,
        on_remove: Option<Function>,
        on_color_change: Option<Function>,
    ) {
        self.callbacks = JsCallbacks {
            on_position_change,
            on_size_change,
            on_remove,
            on_color_change,
        };
    }

    /// Insert or replace a shape from its JSON props. Returns `false` when
    /// the JSON is malformed.
    pub fn upsert_shape(&mut self, json: &str) -> bool {
        match self.state.upsert_json(json) {
            Ok(_) => true,
            Err(e) => {
                web_sys::console::warn_1(&e.into());
                false
            }
        }
    }

    pub fn remove_shape(&mut self, id: &str) -> bool {
        let id = ShapeId::intern(id);
        self.gesture_elements.remove(&id);
        self.state.remove(id)
    }

    /// Set the ambient zoom used when no preview root is found.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.zoom().set(zoom);
    }

    pub fn clear_zoom(&mut self) {
        self.state.zoom().clear();
    }

    /// Change the id of the preview container looked up for scaling.
    pub fn set_preview_root(&mut self, id: &str) {
        self.preview_root_id = id.to_string();
    }

    /// Override size limits from JSON, e.g. `{"fieldMax": 1200}`.
    pub fn set_limits(&mut self, json: &str) -> bool {
        match self.state.set_limits_json(json) {
            Ok(()) => true,
            Err(e) => {
                web_sys::console::warn_1(&e.into());
                false
            }
        }
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Pointer pressed inside a shape. `root` is the shape's root element,
    /// `target` the element the press landed on.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        id: &str,
        x: f32,
        y: f32,
        pointer_type: &str,
        button: i16,
        root: &Element,
        target: &Element,
    ) -> String {
        self.press(id, x, y, pointer_type, button, classify_target(target), Some(root))
    }

    /// Pointer pressed on a region the host hit-tested itself
    /// (`"body"`, `"handle"` or `"control"`).
    pub fn pointer_down_region(
        &mut self,
        id: &str,
        x: f32,
        y: f32,
        pointer_type: &str,
        button: i16,
        region: &str,
    ) -> String {
        let target = match region {
            "handle" => HitTarget::ResizeHandle,
            "control" => HitTarget::Control,
            _ => HitTarget::Body,
        };
        self.press(id, x, y, pointer_type, button, target, None)
    }

    pub fn pointer_move(&mut self, id: &str, x: f32, y: f32) -> String {
        let response = self.run(ShapeId::intern(id), &InputEvent::PointerMove { x, y });
        response_json(&response)
    }

    pub fn pointer_up(&mut self, id: &str, x: f32, y: f32) -> String {
        let response = self.run(ShapeId::intern(id), &InputEvent::PointerUp { x, y });
        response_json(&response)
    }

    pub fn pointer_cancel(&mut self, id: &str) -> String {
        response_json(&self.run(ShapeId::intern(id), &InputEvent::PointerCancel))
    }

    pub fn pointer_enter(&mut self, id: &str) -> String {
        response_json(&self.run(ShapeId::intern(id), &InputEvent::PointerEnter))
    }

    pub fn pointer_leave(&mut self, id: &str) -> String {
        response_json(&self.run(ShapeId::intern(id), &InputEvent::PointerLeave))
    }

    pub fn touch_start(&mut self, id: &str) -> String {
        response_json(&self.run(ShapeId::intern(id), &InputEvent::TouchStart))
    }

    pub fn touch_move(&mut self, id: &str) -> String {
        response_json(&self.run(ShapeId::intern(id), &InputEvent::TouchMove))
    }

    // ─── Toolbar and queries ─────────────────────────────────────────────

    /// Apply a toolbar field edit (`color`, `width`, `height`, `remove`).
    /// Returns the update as JSON, or `null` when nothing changed.
    pub fn toolbar(&mut self, id: &str, key: &str, value: &str) -> String {
        let id = ShapeId::intern(id);
        let update = self.state.toolbar(id, key, value);
        if let Some(update) = &update {
            if matches!(update, ShapeUpdate::Remove { .. }) {
                self.gesture_elements.remove(&id);
            }
            update.dispatch(&mut self.callbacks);
        }
        update_json(update.as_ref())
    }

    pub fn controls_visible(&self, id: &str) -> bool {
        self.state.controls_visible(ShapeId::intern(id))
    }

    pub fn is_gesture_active(&self, id: &str) -> bool {
        self.state.is_gesture_active(ShapeId::intern(id))
    }

    /// Region under a logical point: `body`, `handle`, `control` or `none`.
    pub fn hit_region(&self, id: &str, x: f32, y: f32) -> String {
        hit_name(self.state.hit_region(ShapeId::intern(id), x, y)).to_string()
    }

    /// SVG markup for a shape, or an empty string for unknown ids.
    pub fn render_svg(&self, id: &str) -> String {
        self.state.render_svg(ShapeId::intern(id)).unwrap_or_default()
    }

    /// Lint findings for a shape as a JSON array.
    pub fn lint(&self, id: &str) -> String {
        self.state.lint_json(ShapeId::intern(id))
    }
}

impl ShapeCanvas {
    #[allow(clippy::too_many_arguments)]
    fn press(
        &mut self,
        id: &str,
        x: f32,
        y: f32,
        pointer_type: &str,
        button: i16,
        target: HitTarget,
        root: Option<&Element>,
    ) -> String {
        let id = ShapeId::intern(id);
        let event = InputEvent::PointerDown {
            x,
            y,
            kind: PointerKind::from_dom(pointer_type),
            button: PointerButton::from_dom(button),
            target,
        };
        let was_active = self.state.is_gesture_active(id);
        if !was_active && let Some(root) = root {
            self.gesture_elements.insert(id, root.clone());
        }
        let response = self.run(id, &event);
        if !was_active && response.capture != Some(Capture::Acquire) {
            self.gesture_elements.remove(&id);
        }
        response_json(&response)
    }

    /// Feed one event through the state, then notify the host.
    fn run(&mut self, id: ShapeId, event: &InputEvent) -> Response {
        let zoom = self.state.zoom().clone();
        let scale = DomScale {
            element: self.gesture_elements.get(&id),
            preview_root_id: &self.preview_root_id,
            zoom: &zoom,
        };
        let response = self.state.handle(id, event, &scale);
        if response.capture == Some(Capture::Release) {
            self.gesture_elements.remove(&id);
        }
        dispatch(&response.updates, &mut self.callbacks);
        response
    }
}

// ─── Host callbacks ──────────────────────────────────────────────────────

#[derive(Default)]
struct JsCallbacks {
    on_position_change: Option<Function>,
    on_size_change: Option<Function>,
    on_remove: Option<Function>,
    on_color_change: Option<Function>,
}

/// Report a throwing callback without interrupting the gesture.
fn report(result: Result<JsValue, JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

impl ShapeHost for JsCallbacks {
    fn on_position_change(&mut self, id: ShapeId, x: f32, y: f32) {
        if let Some(f) = &self.on_position_change {
            report(f.call3(&JsValue::NULL, &id.as_str().into(), &x.into(), &y.into()));
        }
    }

    fn on_size_change(&mut self, id: ShapeId, width: f32, height: f32) {
        if let Some(f) = &self.on_size_change {
            report(f.call3(&JsValue::NULL, &id.as_str().into(), &width.into(), &height.into()));
        }
    }

    fn on_remove(&mut self, id: ShapeId) {
        if let Some(f) = &self.on_remove {
            report(f.call1(&JsValue::NULL, &id.as_str().into()));
        }
    }

    fn on_color_change(&mut self, id: ShapeId, color: &str) {
        if let Some(f) = &self.on_color_change {
            report(f.call2(&JsValue::NULL, &id.as_str().into(), &color.into()));
        }
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Shapeboard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// All shape kinds as JSON `[{"name":"rectangle","label":"Rectangle"},...]`
/// for populating a shape picker.
#[wasm_bindgen]
pub fn shape_kinds() -> String {
    let kinds: Vec<serde_json::Value> = ShapeKind::ALL
        .iter()
        .map(|k| serde_json::json!({ "name": k.name(), "label": k.label() }))
        .collect();
    serde_json::Value::Array(kinds).to_string()
}

/// Render one shape from JSON props to SVG without a canvas.
/// Returns an empty string for malformed JSON.
#[wasm_bindgen]
pub fn render_shape_svg(json: &str) -> String {
    serde_json::from_str::<sb_core::model::Shape>(json)
        .map(|shape| sb_render::svg::shape_svg(&shape))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shape_kinds_lists_every_kind() {
        let json: serde_json::Value = serde_json::from_str(&shape_kinds()).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), ShapeKind::ALL.len());
        assert_eq!(list[0]["name"], "rectangle");
    }

    #[test]
    fn standalone_svg_falls_back_to_rectangle() {
        let blob = render_shape_svg(
            r#"{"id":"lib_svg","type":"blob","x":0,"y":0,"width":100,"height":100}"#,
        );
        let rect = render_shape_svg(
            r#"{"id":"lib_svg","type":"rectangle","x":0,"y":0,"width":100,"height":100}"#,
        );
        assert_eq!(blob, rect);
        assert_eq!(render_shape_svg("not json"), "");
    }
}
