//! Platform-independent canvas state behind the WASM façade.
//!
//! Holds the mirrored shapes, one interaction per shape, the size limits and
//! the ambient zoom. Everything here is plain Rust so it can be exercised
//! without a browser; `lib.rs` only adds DOM reads and JS callbacks.

use sb_core::id::ShapeId;
use sb_core::limits::SizeLimits;
use sb_core::lint::{LintSeverity, lint_shape};
use sb_core::model::Shape;
use sb_editor::controls::{ToolbarAction, apply_toolbar};
use sb_editor::gesture::{Capture, Response, ShapeInteraction};
use sb_editor::host::{Board, ShapeUpdate};
use sb_editor::input::InputEvent;
use sb_editor::scale::{ScaleProvider, ZoomRef};
use sb_render::hit::{HitConfig, HitTarget, hit_test};
use sb_render::svg::shape_svg;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct CanvasState {
    board: Board,
    interactions: HashMap<ShapeId, ShapeInteraction>,
    limits: SizeLimits,
    zoom: ZoomRef,
    hit: HitConfig,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn zoom(&self) -> &ZoomRef {
        &self.zoom
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    /// Insert or replace a shape from its JSON props.
    pub fn upsert_json(&mut self, json: &str) -> Result<ShapeId, String> {
        let shape: Shape = serde_json::from_str(json).map_err(|e| format!("invalid shape: {e}"))?;
        let id = shape.id;
        self.board.upsert(shape);
        Ok(id)
    }

    /// Forget a shape and any gesture it had in progress.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        self.interactions.remove(&id);
        self.board.remove(id).is_some()
    }

    /// Replace the limits from a partial JSON object; missing fields keep
    /// their defaults.
    pub fn set_limits_json(&mut self, json: &str) -> Result<(), String> {
        let limits: SizeLimits =
            serde_json::from_str(json).map_err(|e| format!("invalid limits: {e}"))?;
        self.limits = limits;
        for ix in self.interactions.values_mut() {
            ix.set_limits(limits);
        }
        Ok(())
    }

    /// Feed an event to one shape and mirror the resulting updates.
    ///
    /// Events for unknown shapes are ignored.
    pub fn handle(
        &mut self,
        id: ShapeId,
        event: &InputEvent,
        scale: &dyn ScaleProvider,
    ) -> Response {
        let Some(shape) = self.board.get(id).cloned() else {
            log::debug!("event for unknown shape {id}");
            return Response::none();
        };
        let limits = self.limits;
        let ix = self
            .interactions
            .entry(id)
            .or_insert_with(|| ShapeInteraction::with_limits(limits));
        let response = ix.handle(event, &shape, scale);
        for update in &response.updates {
            self.board.apply(update);
        }
        response
    }

    /// Apply a toolbar field edit, returning the update it produced.
    pub fn toolbar(&mut self, id: ShapeId, key: &str, value: &str) -> Option<ShapeUpdate> {
        let action = ToolbarAction::from_field(key, value)?;
        let update = apply_toolbar(self.board.get(id)?, action, &self.limits)?;
        self.board.apply(&update);
        if matches!(update, ShapeUpdate::Remove { .. }) {
            self.interactions.remove(&id);
        }
        Some(update)
    }

    pub fn is_gesture_active(&self, id: ShapeId) -> bool {
        self.interactions.get(&id).is_some_and(ShapeInteraction::is_listening)
    }

    pub fn controls_visible(&self, id: ShapeId) -> bool {
        self.interactions
            .get(&id)
            .is_some_and(ShapeInteraction::controls_visible)
    }

    /// Which region of a shape a logical point lands on, for hosts that draw
    /// shapes themselves instead of using DOM elements.
    pub fn hit_region(&self, id: ShapeId, x: f32, y: f32) -> Option<HitTarget> {
        let shape = self.board.get(id)?;
        hit_test(shape, x, y, self.controls_visible(id), &self.hit)
    }

    pub fn render_svg(&self, id: ShapeId) -> Option<String> {
        self.board.get(id).map(shape_svg)
    }

    /// Lint findings for one shape as a JSON array.
    pub fn lint_json(&self, id: ShapeId) -> String {
        let Some(shape) = self.board.get(id) else {
            return "[]".to_string();
        };
        let diags: Vec<serde_json::Value> = lint_shape(shape, &self.limits)
            .into_iter()
            .map(|d| {
                serde_json::json!({
                    "rule": d.rule,
                    "message": d.message,
                    "severity": match d.severity {
                        LintSeverity::Warning => "warning",
                        LintSeverity::Info => "info",
                    },
                })
            })
            .collect();
        serde_json::Value::Array(diags).to_string()
    }
}

// ─── JSON encoding ───────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseJson<'a> {
    updates: &'a [ShapeUpdate],
    prevent_default: bool,
    capture: Option<&'static str>,
}

/// Encode a response for the page's listener glue.
pub fn response_json(response: &Response) -> String {
    let json = ResponseJson {
        updates: &response.updates,
        prevent_default: response.prevent_default,
        capture: response.capture.map(|c| match c {
            Capture::Acquire => "acquire",
            Capture::Release => "release",
        }),
    };
    serde_json::to_string(&json)
        .unwrap_or_else(|_| r#"{"updates":[],"preventDefault":false,"capture":null}"#.to_string())
}

pub fn update_json(update: Option<&ShapeUpdate>) -> String {
    update
        .and_then(|u| serde_json::to_string(u).ok())
        .unwrap_or_else(|| "null".to_string())
}

pub fn hit_name(target: Option<HitTarget>) -> &'static str {
    match target {
        Some(HitTarget::Body) => "body",
        Some(HitTarget::ResizeHandle) => "handle",
        Some(HitTarget::Control) => "control",
        None => "none",
    }
}
