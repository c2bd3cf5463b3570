pub mod controls;
pub mod gesture;
pub mod host;
pub mod input;
pub mod scale;

pub use controls::{ToolbarAction, apply_toolbar, controls_visible};
pub use gesture::{Capture, GestureMode, GestureSession, Response, ShapeInteraction};
pub use host::{Board, ShapeHost, ShapeUpdate, dispatch};
pub use input::{InputEvent, PointerButton, PointerKind};
pub use scale::{FixedScale, PreviewMetrics, PreviewScale, ScaleProvider, ZoomRef, resolve_scale};
