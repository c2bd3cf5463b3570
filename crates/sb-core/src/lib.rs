pub mod color;
pub mod id;
pub mod limits;
pub mod lint;
pub mod model;

pub use self::color::{is_css_color, parse_css_color};
pub use id::ShapeId;
pub use limits::SizeLimits;
pub use lint::{LintDiagnostic, LintSeverity, lint_shape};
pub use model::*;
