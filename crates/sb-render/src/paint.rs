//! Shapes → Vello drawing commands.
//!
//! Native hosts paint through Vello; browser hosts use the SVG output
//! instead. Strings that are not CSS colors paint nothing, which is how a
//! browser treats an invalid fill.

use crate::geometry::{PaintMode, shape_geometry};
use kurbo::{Affine, Cap, Join, Stroke as KurboStroke};
use peniko::Fill;
use sb_core::color::parse_css_color;
use sb_core::model::Shape;
use vello::Scene;

/// Paint one shape at its logical position.
///
/// Returns the number of geometry parts painted; zero when the color
/// string is not a recognized color.
pub fn paint_shape(scene: &mut Scene, shape: &Shape) -> usize {
    let Some(color) = parse_css_color(&shape.color) else {
        log::trace!(
            "shape {} has unrecognized color {:?}; painting transparent",
            shape.id,
            shape.color
        );
        return 0;
    };

    let transform = Affine::translate((shape.x as f64, shape.y as f64));
    let geometry = shape_geometry(shape);

    for part in &geometry.parts {
        let path = part.primitive.to_path();
        match part.mode {
            PaintMode::Fill => scene.fill(Fill::NonZero, transform, color, None, &path),
            PaintMode::Stroke { width } => {
                let stroke = KurboStroke::new(width)
                    .with_caps(Cap::Round)
                    .with_join(Join::Round);
                scene.stroke(&stroke, transform, color, None, &path);
            }
        }
    }
    geometry.parts.len()
}
