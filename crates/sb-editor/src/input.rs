//! Input abstraction layer.
//!
//! Normalizes the pointer and touch events a shape receives into a single
//! `InputEvent` enum consumed by the interaction state machine. Coordinates
//! are viewport pixels; conversion to logical units happens in the gesture
//! code through the scale provider.

use sb_render::hit::HitTarget;

/// The device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse a DOM `pointerType` string. Unknown types are treated as mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// Which button was pressed, using DOM `button` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A normalized input event delivered to one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the shape.
    PointerDown {
        x: f32,
        y: f32,
        kind: PointerKind,
        button: PointerButton,
        /// The region of the shape the press landed on.
        target: HitTarget,
    },

    /// Pointer moved anywhere in the document.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// The platform interrupted the gesture.
    PointerCancel,

    /// Pointer entered the shape's bounds.
    PointerEnter,

    /// Pointer left the shape's bounds.
    PointerLeave,

    /// A finger touched the shape.
    TouchStart,

    /// A finger moved anywhere in the document.
    TouchMove,
}

impl InputEvent {
    /// A primary-button mouse press on the shape body.
    pub fn press(x: f32, y: f32) -> Self {
        Self::PointerDown {
            x,
            y,
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            target: HitTarget::Body,
        }
    }

    /// A primary-button mouse press on the resize handle.
    pub fn press_handle(x: f32, y: f32) -> Self {
        Self::PointerDown {
            x,
            y,
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            target: HitTarget::ResizeHandle,
        }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Whether a pointer-down is allowed to start a gesture: a primary
    /// button, or any touch contact.
    pub fn starts_gesture(&self) -> bool {
        match self {
            Self::PointerDown { kind, button, .. } => {
                *kind == PointerKind::Touch || *button == PointerButton::Primary
            }
            _ => false,
        }
    }
}
