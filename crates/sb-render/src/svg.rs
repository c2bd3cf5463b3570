//! Geometry → SVG markup.
//!
//! The color string is written through untouched (only XML-escaped), so a
//! browser host gets exactly the CSS color the user typed, valid or not.

use crate::geometry::{GeometryPart, PaintMode, Primitive, ShapeGeometry, shape_geometry};
use sb_core::model::Shape;
use std::fmt::Write as _;

/// Render a shape as a standalone `<svg>` element sized to its bounding box.
pub fn shape_svg(shape: &Shape) -> String {
    let geometry = shape_geometry(shape);
    let w = fmt_num(shape.width.max(0.0) as f64);
    let h = fmt_num(shape.height.max(0.0) as f64);
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" data-shape-id=\"{}\" data-shape-type=\"{}\">\n",
        escape_attr(shape.id.as_str()),
        shape.kind.name(),
    );
    svg.push_str(&geometry_svg(&geometry, &shape.color));
    svg.push_str("</svg>\n");
    svg
}

/// Render geometry parts as SVG elements, one per line.
pub fn geometry_svg(geometry: &ShapeGeometry, color: &str) -> String {
    let color = escape_attr(color);
    let mut out = String::new();
    for part in &geometry.parts {
        part_svg(&mut out, part, &color);
    }
    out
}

fn part_svg(out: &mut String, part: &GeometryPart, color: &str) {
    let paint = match part.mode {
        PaintMode::Fill => format!("fill=\"{color}\""),
        PaintMode::Stroke { width } => format!(
            "fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
            fmt_num(width)
        ),
    };

    // Writing into a String cannot fail.
    let _ = match &part.primitive {
        Primitive::Rect { rect, radius } => {
            let rx = if *radius > 0.0 {
                format!(" rx=\"{}\"", fmt_num(*radius))
            } else {
                String::new()
            };
            writeln!(
                out,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{rx} {paint}/>",
                fmt_num(rect.x0),
                fmt_num(rect.y0),
                fmt_num(rect.width()),
                fmt_num(rect.height()),
            )
        }
        Primitive::Ellipse(e) => {
            let c = e.center();
            let r = e.radii();
            writeln!(
                out,
                "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {paint}/>",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(r.x),
                fmt_num(r.y),
            )
        }
        Primitive::Polygon(points) => {
            let pts: Vec<String> = points
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                .collect();
            writeln!(out, "  <polygon points=\"{}\" {paint}/>", pts.join(" "))
        }
        Primitive::Path(path) => writeln!(out, "  <path d=\"{}\" {paint}/>", path.to_svg()),
    };
}

/// Format a coordinate with at most two decimals, trimming trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::id::ShapeId;
    use sb_core::model::ShapeKind;

    #[test]
    fn rectangle_svg_markup() {
        let id = ShapeId::intern("svg_rect");
        let shape =
            Shape::new(id, ShapeKind::Rectangle, 0.0, 0.0, 100.0, 50.0).with_color("#FF0000");
        let svg = shape_svg(&shape);
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(
            svg.contains(r##"<rect x="2" y="2" width="96" height="46" fill="#FF0000"/>"##),
            "{svg}"
        );
    }

    #[test]
    fn stroke_kinds_emit_stroke_attributes() {
        let shape = Shape::new(ShapeId::intern("svg_line"), ShapeKind::Line, 0.0, 0.0, 100.0, 50.0)
            .with_color("teal");
        let svg = shape_svg(&shape);
        assert!(svg.contains(r#"fill="none" stroke="teal" stroke-width="3""#), "{svg}");
        assert!(svg.contains("<path d=\"M2"), "{svg}");
    }

    #[test]
    fn invalid_color_passes_through_escaped() {
        let shape = Shape::new(ShapeId::intern("svg_bad"), ShapeKind::Circle, 0.0, 0.0, 60.0, 60.0)
            .with_color("not a \"color\"");
        let svg = shape_svg(&shape);
        assert!(svg.contains(r#"fill="not a &quot;color&quot;""#), "{svg}");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.001), "0");
    }
}
