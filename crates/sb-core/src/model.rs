//! Shape data model.
//!
//! A `Shape` is owned by the host document. The engine reads it on every
//! render and reports changes back; it never keeps shape state of its own.
//! `ShapeKind` is a closed set with a single explicit fallback entry, so an
//! unknown kind name always renders as a plain rectangle.

use crate::id::ShapeId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Shape kinds ─────────────────────────────────────────────────────────

/// Every shape the renderer knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Pill,
    Circle,
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Heart,
    Cross,
    Minus,
    Arrow,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    DoubleArrow,
    Diamond,
    Parallelogram,
    Trapezoid,
    Cloud,
    SpeechBubble,
    Lightning,
    Checkmark,
    XMark,
    ChevronRight,
    ChevronLeft,
    ChevronUp,
    ChevronDown,
    Line,
    Explosion,
    Sun,
    Moon,
    Bracket,
    Brace,
    CurvedArrow,
    Banner,
}

impl ShapeKind {
    /// The kind used for any name that does not resolve.
    pub const FALLBACK: ShapeKind = ShapeKind::Rectangle;

    /// All kinds, in palette order.
    pub const ALL: [ShapeKind; 37] = [
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Pill,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
        ShapeKind::Heart,
        ShapeKind::Cross,
        ShapeKind::Minus,
        ShapeKind::Arrow,
        ShapeKind::ArrowUp,
        ShapeKind::ArrowDown,
        ShapeKind::ArrowLeft,
        ShapeKind::DoubleArrow,
        ShapeKind::Diamond,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
        ShapeKind::Cloud,
        ShapeKind::SpeechBubble,
        ShapeKind::Lightning,
        ShapeKind::Checkmark,
        ShapeKind::XMark,
        ShapeKind::ChevronRight,
        ShapeKind::ChevronLeft,
        ShapeKind::ChevronUp,
        ShapeKind::ChevronDown,
        ShapeKind::Line,
        ShapeKind::Explosion,
        ShapeKind::Sun,
        ShapeKind::Moon,
        ShapeKind::Bracket,
        ShapeKind::Brace,
        ShapeKind::CurvedArrow,
        ShapeKind::Banner,
    ];

    /// Canonical kebab-case name, as written in host props.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RoundedRectangle => "rounded-rectangle",
            ShapeKind::Pill => "pill",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Cross => "cross",
            ShapeKind::Minus => "minus",
            ShapeKind::Arrow => "arrow",
            ShapeKind::ArrowUp => "arrow-up",
            ShapeKind::ArrowDown => "arrow-down",
            ShapeKind::ArrowLeft => "arrow-left",
            ShapeKind::DoubleArrow => "double-arrow",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Cloud => "cloud",
            ShapeKind::SpeechBubble => "speech-bubble",
            ShapeKind::Lightning => "lightning",
            ShapeKind::Checkmark => "checkmark",
            ShapeKind::XMark => "xmark",
            ShapeKind::ChevronRight => "chevron-right",
            ShapeKind::ChevronLeft => "chevron-left",
            ShapeKind::ChevronUp => "chevron-up",
            ShapeKind::ChevronDown => "chevron-down",
            ShapeKind::Line => "line",
            ShapeKind::Explosion => "explosion",
            ShapeKind::Sun => "sun",
            ShapeKind::Moon => "moon",
            ShapeKind::Bracket => "bracket",
            ShapeKind::Brace => "brace",
            ShapeKind::CurvedArrow => "curved-arrow",
            ShapeKind::Banner => "banner",
        }
    }

    /// Human-readable label for palettes and toolbars.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::Pill => "Pill",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Star => "Star",
            ShapeKind::Heart => "Heart",
            ShapeKind::Cross => "Plus",
            ShapeKind::Minus => "Minus",
            ShapeKind::Arrow => "Arrow",
            ShapeKind::ArrowUp => "Arrow Up",
            ShapeKind::ArrowDown => "Arrow Down",
            ShapeKind::ArrowLeft => "Arrow Left",
            ShapeKind::DoubleArrow => "Double Arrow",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Cloud => "Cloud",
            ShapeKind::SpeechBubble => "Speech Bubble",
            ShapeKind::Lightning => "Lightning",
            ShapeKind::Checkmark => "Checkmark",
            ShapeKind::XMark => "X Mark",
            ShapeKind::ChevronRight => "Chevron Right",
            ShapeKind::ChevronLeft => "Chevron Left",
            ShapeKind::ChevronUp => "Chevron Up",
            ShapeKind::ChevronDown => "Chevron Down",
            ShapeKind::Line => "Line",
            ShapeKind::Explosion => "Explosion",
            ShapeKind::Sun => "Sun",
            ShapeKind::Moon => "Moon",
            ShapeKind::Bracket => "Bracket",
            ShapeKind::Brace => "Brace",
            ShapeKind::CurvedArrow => "Curved Arrow",
            ShapeKind::Banner => "Banner",
        }
    }

    /// Look up a kind by name.
    ///
    /// Matching ignores case, `-`, `_` and spaces, so `"roundedRectangle"`,
    /// `"rounded-rectangle"` and `"Rounded Rectangle"` are the same kind.
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let kind = match key.as_str() {
            "rectangle" | "rect" | "square" => ShapeKind::Rectangle,
            "roundedrectangle" | "roundedrect" => ShapeKind::RoundedRectangle,
            "pill" | "capsule" => ShapeKind::Pill,
            "circle" | "ellipse" | "oval" => ShapeKind::Circle,
            "triangle" => ShapeKind::Triangle,
            "pentagon" => ShapeKind::Pentagon,
            "hexagon" => ShapeKind::Hexagon,
            "octagon" => ShapeKind::Octagon,
            "star" => ShapeKind::Star,
            "heart" => ShapeKind::Heart,
            "cross" | "plus" => ShapeKind::Cross,
            "minus" => ShapeKind::Minus,
            "arrow" | "arrowright" => ShapeKind::Arrow,
            "arrowup" => ShapeKind::ArrowUp,
            "arrowdown" => ShapeKind::ArrowDown,
            "arrowleft" => ShapeKind::ArrowLeft,
            "doublearrow" | "arrowdouble" => ShapeKind::DoubleArrow,
            "diamond" => ShapeKind::Diamond,
            "parallelogram" => ShapeKind::Parallelogram,
            "trapezoid" => ShapeKind::Trapezoid,
            "cloud" => ShapeKind::Cloud,
            "speechbubble" | "callout" => ShapeKind::SpeechBubble,
            "lightning" | "bolt" => ShapeKind::Lightning,
            "checkmark" | "check" => ShapeKind::Checkmark,
            "xmark" | "x" => ShapeKind::XMark,
            "chevronright" | "chevron" => ShapeKind::ChevronRight,
            "chevronleft" => ShapeKind::ChevronLeft,
            "chevronup" => ShapeKind::ChevronUp,
            "chevrondown" => ShapeKind::ChevronDown,
            "line" => ShapeKind::Line,
            "explosion" | "burst" => ShapeKind::Explosion,
            "sun" => ShapeKind::Sun,
            "moon" | "crescent" => ShapeKind::Moon,
            "bracket" => ShapeKind::Bracket,
            "brace" => ShapeKind::Brace,
            "curvedarrow" => ShapeKind::CurvedArrow,
            "banner" | "ribbon" => ShapeKind::Banner,
            _ => return None,
        };
        Some(kind)
    }

    /// Resolve a kind name, falling back to [`ShapeKind::FALLBACK`].
    pub fn resolve(name: &str) -> ShapeKind {
        match Self::from_name(name) {
            Some(kind) => kind,
            None => {
                log::debug!("unknown shape kind {name:?}, rendering as {}", Self::FALLBACK.name());
                Self::FALLBACK
            }
        }
    }

    /// Stroke-only kinds have no fill area; their color applies to the stroke.
    pub fn is_stroke_only(self) -> bool {
        matches!(
            self,
            ShapeKind::Line
                | ShapeKind::Checkmark
                | ShapeKind::XMark
                | ShapeKind::ChevronRight
                | ShapeKind::ChevronLeft
                | ShapeKind::ChevronUp
                | ShapeKind::ChevronDown
                | ShapeKind::Bracket
                | ShapeKind::Brace
        )
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Serialize for ShapeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ShapeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ShapeKind::resolve(&s))
    }
}

// ─── Shape ───────────────────────────────────────────────────────────────

/// Default fill for shapes created without an explicit color.
pub const DEFAULT_COLOR: &str = "#3B82F6";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A host-owned shape, as supplied on every render.
///
/// Coordinates are in the host's logical (unscaled) space.
/// `color` is kept verbatim; it is never validated or rewritten here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    #[serde(rename = "type", default)]
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            width,
            height,
            color: default_color(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Bounding box in logical coordinates.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// An axis-aligned box in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_roundtrip_for_every_kind() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind), "{kind:?}");
        }
    }

    #[test]
    fn name_matching_ignores_case_and_separators() {
        assert_eq!(
            ShapeKind::from_name("roundedRectangle"),
            Some(ShapeKind::RoundedRectangle)
        );
        assert_eq!(
            ShapeKind::from_name("Chevron_Down"),
            Some(ShapeKind::ChevronDown)
        );
        assert_eq!(ShapeKind::from_name("plus"), Some(ShapeKind::Cross));
        assert_eq!(ShapeKind::from_name("callout"), Some(ShapeKind::SpeechBubble));
    }

    #[test]
    fn unknown_kind_resolves_to_rectangle() {
        assert_eq!(ShapeKind::from_name("blob"), None);
        assert_eq!(ShapeKind::resolve("blob"), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::resolve(""), ShapeKind::Rectangle);
    }

    #[test]
    fn all_kinds_are_distinct() {
        let mut names: Vec<_> = ShapeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ShapeKind::ALL.len());
    }

    #[test]
    fn shape_json_uses_type_field() {
        let json = r##"{"id":"s1","type":"heart","x":10,"y":20,"width":100,"height":80,"color":"#f00"}"##;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.id.as_str(), "s1");
        assert_eq!(shape.kind, ShapeKind::Heart);
        assert_eq!(shape.color, "#f00");

        let back = serde_json::to_string(&shape).unwrap();
        assert!(back.contains(r#""type":"heart""#), "{back}");
    }

    #[test]
    fn shape_json_accepts_unknown_type_and_missing_color() {
        let json = r#"{"id":"s2","type":"blob","x":0,"y":0,"width":100,"height":100}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.color, DEFAULT_COLOR);
    }

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
        };
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(60.0, 60.0));
        assert!(!b.contains(61.0, 30.0));
    }
}
