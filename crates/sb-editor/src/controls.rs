//! Floating toolbar: visibility and field edits.

use crate::host::ShapeUpdate;
use sb_core::limits::SizeLimits;
use sb_core::model::Shape;

/// The toolbar and resize handle are shown while the shape is hovered, and
/// for the whole duration of a gesture even if the pointer leaves it.
pub fn controls_visible(hovered: bool, dragging: bool, resizing: bool) -> bool {
    hovered || dragging || resizing
}

/// An edit made through the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction<'a> {
    /// Color picker or free-text color field. Any string is accepted.
    SetColor(&'a str),
    /// Numeric width spinner.
    SetWidth(f32),
    /// Numeric height spinner.
    SetHeight(f32),
    /// Raw text typed into the width field.
    SetWidthText(&'a str),
    /// Raw text typed into the height field.
    SetHeightText(&'a str),
    Remove,
}

impl<'a> ToolbarAction<'a> {
    /// Map a toolbar field key and its value to an action.
    ///
    /// Keys are `color`, `width`, `height` and `remove`; others yield `None`.
    pub fn from_field(key: &str, value: &'a str) -> Option<Self> {
        match key {
            "color" => Some(Self::SetColor(value)),
            "width" => Some(Self::SetWidthText(value)),
            "height" => Some(Self::SetHeightText(value)),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Turn a toolbar edit into a host notification.
///
/// Numeric sizes are clamped to the field range and keep the other
/// dimension. Text that is not a finite number produces no update.
pub fn apply_toolbar(
    shape: &Shape,
    action: ToolbarAction<'_>,
    limits: &SizeLimits,
) -> Option<ShapeUpdate> {
    let id = shape.id;
    let size = |width: f32, height: f32| ShapeUpdate::Size { id, width, height };

    match action {
        ToolbarAction::SetColor(color) => Some(ShapeUpdate::Color {
            id,
            color: color.to_string(),
        }),
        ToolbarAction::SetWidth(v) => Some(size(limits.clamp_field(v), shape.height)),
        ToolbarAction::SetHeight(v) => Some(size(shape.width, limits.clamp_field(v))),
        ToolbarAction::SetWidthText(text) => {
            let v = parse_field(text)?;
            Some(size(limits.clamp_field(v), shape.height))
        }
        ToolbarAction::SetHeightText(text) => {
            let v = parse_field(text)?;
            Some(size(shape.width, limits.clamp_field(v)))
        }
        ToolbarAction::Remove => Some(ShapeUpdate::Remove { id }),
    }
}

fn parse_field(text: &str) -> Option<f32> {
    let parsed = text.trim().parse::<f32>().ok().filter(|v| v.is_finite());
    if parsed.is_none() {
        log::debug!("ignoring non-numeric size field {text:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sb_core::id::ShapeId;
    use sb_core::model::ShapeKind;

    fn shape() -> Shape {
        Shape::new(ShapeId::intern("toolbar_box"), ShapeKind::Heart, 10.0, 10.0, 120.0, 90.0)
    }

    fn size_of(update: Option<ShapeUpdate>) -> (f32, f32) {
        match update {
            Some(ShapeUpdate::Size { width, height, .. }) => (width, height),
            other => panic!("expected a size update, got {other:?}"),
        }
    }

    #[test]
    fn visibility_truth_table() {
        assert!(!controls_visible(false, false, false));
        assert!(controls_visible(true, false, false));
        assert!(controls_visible(false, true, false));
        assert!(controls_visible(false, false, true));
    }

    #[test]
    fn numeric_fields_clamp() {
        let limits = SizeLimits::default();
        let s = shape();
        let sized = |action| size_of(apply_toolbar(&s, action, &limits));
        assert_eq!(sized(ToolbarAction::SetWidth(5.0)), (20.0, 90.0));
        assert_eq!(sized(ToolbarAction::SetHeight(5000.0)), (120.0, 800.0));
        assert_eq!(sized(ToolbarAction::SetWidth(333.0)), (333.0, 90.0));
    }

    #[test]
    fn text_fields_parse_or_ignore() {
        let limits = SizeLimits::default();
        let s = shape();
        let sized = |action| size_of(apply_toolbar(&s, action, &limits));
        assert_eq!(sized(ToolbarAction::SetWidthText(" 250 ")), (250.0, 90.0));
        assert_eq!(sized(ToolbarAction::SetHeightText("1")), (120.0, 20.0));
        assert_eq!(apply_toolbar(&s, ToolbarAction::SetWidthText(""), &limits), None);
        assert_eq!(apply_toolbar(&s, ToolbarAction::SetHeightText("tall"), &limits), None);
        assert_eq!(apply_toolbar(&s, ToolbarAction::SetHeightText("NaN"), &limits), None);
    }

    #[test]
    fn color_passes_through_verbatim() {
        let limits = SizeLimits::default();
        let update = apply_toolbar(&shape(), ToolbarAction::SetColor("not-a-color"), &limits);
        assert_eq!(
            update,
            Some(ShapeUpdate::Color {
                id: shape().id,
                color: "not-a-color".into(),
            })
        );
    }

    #[test]
    fn remove_and_field_keys() {
        assert_eq!(
            apply_toolbar(&shape(), ToolbarAction::Remove, &SizeLimits::default()),
            Some(ShapeUpdate::Remove { id: shape().id })
        );
        assert_eq!(
            ToolbarAction::from_field("width", "40"),
            Some(ToolbarAction::SetWidthText("40"))
        );
        assert_eq!(ToolbarAction::from_field("remove", ""), Some(ToolbarAction::Remove));
        assert_eq!(ToolbarAction::from_field("rotation", "45"), None);
    }
}
