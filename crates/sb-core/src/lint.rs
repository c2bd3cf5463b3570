//! Lint diagnostics for shapes.
//!
//! Reports suspicious shape state without modifying it. The engine itself
//! accepts any color string and clamps every number; these findings exist so
//! a host can show inline feedback next to the toolbar fields.

use crate::color::is_css_color;
use crate::id::ShapeId;
use crate::limits::SizeLimits;
use crate::model::Shape;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Likely a mistake; the shape may not render as intended.
    Warning,
    /// Informational.
    Info,
}

/// A single lint diagnostic for a shape.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The shape this diagnostic refers to.
    pub shape_id: ShapeId,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "unknown-color").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over a shape and return diagnostics.
#[must_use]
pub fn lint_shape(shape: &Shape, limits: &SizeLimits) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_color(shape, &mut diags);
    lint_size(shape, limits, &mut diags);
    lint_position(shape, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_color(shape: &Shape, diags: &mut Vec<LintDiagnostic>) {
    if shape.color.trim().is_empty() {
        diags.push(LintDiagnostic {
            shape_id: shape.id,
            message: "Color is empty; the shape will render without a fill.".to_string(),
            severity: LintSeverity::Warning,
            rule: "empty-color",
        });
    } else if !is_css_color(&shape.color) {
        diags.push(LintDiagnostic {
            shape_id: shape.id,
            message: format!(
                "Color `{}` is not a recognized color; use `#RRGGBB`, `rgb()`, `hsl()` or a CSS color name.",
                shape.color
            ),
            severity: LintSeverity::Warning,
            rule: "unknown-color",
        });
    }
}

fn lint_size(shape: &Shape, limits: &SizeLimits, diags: &mut Vec<LintDiagnostic>) {
    if shape.width < limits.field_min || shape.height < limits.field_min {
        diags.push(LintDiagnostic {
            shape_id: shape.id,
            message: format!(
                "Size {}×{} is below the minimum of {}.",
                shape.width, shape.height, limits.field_min
            ),
            severity: LintSeverity::Info,
            rule: "undersized",
        });
    }
}

fn lint_position(shape: &Shape, diags: &mut Vec<LintDiagnostic>) {
    if shape.x < 0.0 || shape.y < 0.0 {
        diags.push(LintDiagnostic {
            shape_id: shape.id,
            message: format!("Position ({}, {}) is outside the canvas.", shape.x, shape.y),
            severity: LintSeverity::Info,
            rule: "negative-position",
        });
    }
}
