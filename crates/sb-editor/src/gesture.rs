//! Per-shape pointer interaction state machine.
//!
//! Each shape instance owns one `ShapeInteraction`. It is idle until a
//! pointer-down on the body (drag) or the resize handle (resize) opens a
//! `GestureSession`, and returns to idle on pointer-up or pointer-cancel.
//!
//! Every move is computed from the session's origin snapshot, never from
//! the previous move, so dropped or coalesced move events cannot drift:
//!
//! ```text
//! value = clamp(origin_value + (pointer - origin_pointer) / scale)
//! ```
//!
//! The scale is read from the provider on every move.

use crate::controls::controls_visible;
use crate::host::ShapeUpdate;
use crate::input::InputEvent;
use crate::scale::ScaleProvider;
use sb_core::limits::SizeLimits;
use sb_core::model::Shape;
use sb_render::hit::HitTarget;
use smallvec::SmallVec;

/// What an active gesture is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Moving the shape; the origin value is its `(x, y)`.
    Dragging,
    /// Resizing from the bottom-right corner; the origin value is its
    /// `(width, height)`.
    Resizing,
}

/// State that exists only while a pointer is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub mode: GestureMode,
    /// Pointer viewport coordinates at gesture start.
    pub origin_pointer: (f32, f32),
    /// Position or size snapshot at gesture start.
    pub origin_value: (f32, f32),
}

impl GestureSession {
    /// The logical value for a pointer at `(px, py)` under `scale`, clamped.
    pub fn value_at(&self, px: f32, py: f32, scale: f32, limits: &SizeLimits) -> (f32, f32) {
        let dx = (px - self.origin_pointer.0) / scale;
        let dy = (py - self.origin_pointer.1) / scale;
        let (x, y) = (self.origin_value.0 + dx, self.origin_value.1 + dy);
        match self.mode {
            GestureMode::Dragging => limits.clamp_position(x, y),
            GestureMode::Resizing => limits.clamp_resize(x, y),
        }
    }
}

/// Document-level listener and pointer-capture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// A gesture started: capture the pointer and attach move/up/cancel/
    /// touchmove listeners.
    Acquire,
    /// The gesture ended: release and detach them.
    Release,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Notifications to deliver, in order.
    pub updates: SmallVec<[ShapeUpdate; 2]>,
    /// Suppress the browser's default action (scroll, pinch, selection).
    pub prevent_default: bool,
    pub capture: Option<Capture>,
}

impl Response {
    pub fn none() -> Self {
        Self::default()
    }

    fn capture(capture: Capture) -> Self {
        Self {
            updates: SmallVec::new(),
            prevent_default: true,
            capture: Some(capture),
        }
    }

    fn update(update: ShapeUpdate) -> Self {
        let mut updates = SmallVec::new();
        updates.push(update);
        Self {
            updates,
            prevent_default: true,
            capture: None,
        }
    }

    /// True when the event had no observable effect.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && !self.prevent_default && self.capture.is_none()
    }
}

/// Interaction state for one shape instance.
#[derive(Debug, Clone, Default)]
pub struct ShapeInteraction {
    session: Option<GestureSession>,
    hovered: bool,
    limits: SizeLimits,
}

impl ShapeInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SizeLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    pub fn set_limits(&mut self, limits: SizeLimits) {
        self.limits = limits;
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.mode() == Some(GestureMode::Dragging)
    }

    pub fn is_resizing(&self) -> bool {
        self.mode() == Some(GestureMode::Resizing)
    }

    /// Whether document-level listeners should currently be attached.
    pub fn is_listening(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the toolbar and resize handle should be shown.
    pub fn controls_visible(&self) -> bool {
        controls_visible(self.hovered, self.is_dragging(), self.is_resizing())
    }

    fn mode(&self) -> Option<GestureMode> {
        self.session.map(|s| s.mode)
    }

    /// Feed one event for `shape` (the host's current props).
    pub fn handle(
        &mut self,
        event: &InputEvent,
        shape: &Shape,
        scale: &dyn ScaleProvider,
    ) -> Response {
        match event {
            InputEvent::PointerDown { x, y, target, .. } => {
                if self.session.is_some() || !event.starts_gesture() {
                    return Response::none();
                }
                let (mode, origin_value) = match target {
                    HitTarget::Body => (GestureMode::Dragging, (shape.x, shape.y)),
                    HitTarget::ResizeHandle => (GestureMode::Resizing, (shape.width, shape.height)),
                    HitTarget::Control => return Response::none(),
                };
                log::debug!("{}: start {mode:?} at ({x}, {y})", shape.id);
                self.session = Some(GestureSession {
                    mode,
                    origin_pointer: (*x, *y),
                    origin_value,
                });
                Response::capture(Capture::Acquire)
            }

            InputEvent::PointerMove { x, y } => {
                let Some(session) = self.session else {
                    return Response::none();
                };
                let s = scale.scale();
                let (a, b) = session.value_at(*x, *y, s, &self.limits);
                log::trace!("{}: {:?} → ({a}, {b}) at scale {s}", shape.id, session.mode);
                Response::update(match session.mode {
                    GestureMode::Dragging => ShapeUpdate::Position {
                        id: shape.id,
                        x: a,
                        y: b,
                    },
                    GestureMode::Resizing => ShapeUpdate::Size {
                        id: shape.id,
                        width: a,
                        height: b,
                    },
                })
            }

            // Cancel ends the gesture exactly like up: the shape keeps its
            // last emitted value.
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel => match self.session.take() {
                Some(session) => {
                    log::debug!("{}: end {:?}", shape.id, session.mode);
                    Response::capture(Capture::Release)
                }
                None => Response::none(),
            },

            InputEvent::PointerEnter | InputEvent::TouchStart => {
                self.hovered = true;
                Response::none()
            }

            InputEvent::PointerLeave => {
                self.hovered = false;
                Response::none()
            }

            InputEvent::TouchMove => Response {
                prevent_default: self.session.is_some(),
                ..Response::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerButton, PointerKind};
    use crate::scale::FixedScale;
    use sb_core::id::ShapeId;
    use sb_core::model::ShapeKind;

    fn shape() -> Shape {
        Shape::new(ShapeId::intern("gesture_box"), ShapeKind::Rectangle, 100.0, 100.0, 200.0, 150.0)
    }

    #[test]
    fn drag_starts_on_body() {
        let mut ix = ShapeInteraction::new();
        let r = ix.handle(&InputEvent::press(50.0, 50.0), &shape(), &FixedScale(1.0));
        assert_eq!(r.capture, Some(Capture::Acquire));
        assert!(ix.is_dragging());
        assert!(!ix.is_resizing());
        assert_eq!(ix.session().unwrap().origin_value, (100.0, 100.0));
    }

    #[test]
    fn resize_starts_on_handle() {
        let mut ix = ShapeInteraction::new();
        ix.handle(&InputEvent::press_handle(300.0, 250.0), &shape(), &FixedScale(1.0));
        assert!(ix.is_resizing());
        assert_eq!(ix.session().unwrap().origin_value, (200.0, 150.0));
    }

    #[test]
    fn controls_never_start_a_gesture() {
        let mut ix = ShapeInteraction::new();
        let down = InputEvent::PointerDown {
            x: 10.0,
            y: 10.0,
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            target: HitTarget::Control,
        };
        assert!(ix.handle(&down, &shape(), &FixedScale(1.0)).is_empty());
        assert!(!ix.is_listening());
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut ix = ShapeInteraction::new();
        let down = InputEvent::PointerDown {
            x: 10.0,
            y: 10.0,
            kind: PointerKind::Pen,
            button: PointerButton::Secondary,
            target: HitTarget::Body,
        };
        assert!(ix.handle(&down, &shape(), &FixedScale(1.0)).is_empty());
        assert!(!ix.is_listening());
    }

    #[test]
    fn moves_without_a_session_do_nothing() {
        let mut ix = ShapeInteraction::new();
        let r = ix.handle(&InputEvent::from_pointer_move(5.0, 5.0), &shape(), &FixedScale(1.0));
        assert!(r.is_empty());
        let r = ix.handle(&InputEvent::TouchMove, &shape(), &FixedScale(1.0));
        assert!(!r.prevent_default);
    }

    #[test]
    fn touch_move_is_suppressed_during_gesture() {
        let mut ix = ShapeInteraction::new();
        ix.handle(&InputEvent::press(0.0, 0.0), &shape(), &FixedScale(1.0));
        let r = ix.handle(&InputEvent::TouchMove, &shape(), &FixedScale(1.0));
        assert!(r.prevent_default);
        assert!(r.updates.is_empty());
    }

    #[test]
    fn hover_flag_follows_enter_and_leave() {
        let mut ix = ShapeInteraction::new();
        assert!(!ix.controls_visible());
        ix.handle(&InputEvent::PointerEnter, &shape(), &FixedScale(1.0));
        assert!(ix.controls_visible());
        ix.handle(&InputEvent::PointerLeave, &shape(), &FixedScale(1.0));
        assert!(!ix.controls_visible());
        ix.handle(&InputEvent::TouchStart, &shape(), &FixedScale(1.0));
        assert!(ix.is_hovered());
    }

    #[test]
    fn controls_stay_visible_while_dragging_off_shape() {
        let mut ix = ShapeInteraction::new();
        ix.handle(&InputEvent::PointerEnter, &shape(), &FixedScale(1.0));
        ix.handle(&InputEvent::press(150.0, 150.0), &shape(), &FixedScale(1.0));
        ix.handle(&InputEvent::PointerLeave, &shape(), &FixedScale(1.0));
        assert!(ix.controls_visible());
        ix.handle(&InputEvent::from_pointer_up(900.0, 900.0), &shape(), &FixedScale(1.0));
        assert!(!ix.controls_visible());
    }

    #[test]
    fn up_without_session_is_empty() {
        let mut ix = ShapeInteraction::new();
        assert!(ix.handle(&InputEvent::PointerCancel, &shape(), &FixedScale(1.0)).is_empty());
    }

    #[test]
    fn custom_limits_apply() {
        let limits = SizeLimits {
            resize_min: 80.0,
            ..SizeLimits::default()
        };
        let mut ix = ShapeInteraction::with_limits(limits);
        ix.handle(&InputEvent::press_handle(0.0, 0.0), &shape(), &FixedScale(1.0));
        let r = ix.handle(&InputEvent::from_pointer_move(-500.0, 0.0), &shape(), &FixedScale(1.0));
        assert_eq!(
            r.updates[0],
            ShapeUpdate::Size {
                id: shape().id,
                width: 80.0,
                height: 150.0,
            }
        );
    }
}
