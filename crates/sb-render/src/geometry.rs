//! Parametric shape geometry.
//!
//! Every kind is a closed-form function of the bounding box. Coordinates are
//! fractions of the box, so any size the resize gesture produces yields an
//! undistorted, unclipped shape. Output is local to the shape (origin at its
//! top-left corner); callers translate to the shape's position.

use kurbo::{Arc, BezPath, Ellipse, Point, Rect, RoundedRect, Shape as _, Vec2};
use sb_core::model::{Shape, ShapeKind};
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Inset from the bounding box so strokes are not clipped at the edge.
pub const INSET: f64 = 2.0;
/// Stroke width for stroke-only kinds.
pub const STROKE_WIDTH: f64 = 3.0;

const TOLERANCE: f64 = 0.1;

// ─── Geometry types ──────────────────────────────────────────────────────

/// A single drawable primitive in shape-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { rect: Rect, radius: f64 },
    Ellipse(Ellipse),
    Polygon(Vec<Point>),
    Path(BezPath),
}

impl Primitive {
    /// Flatten to a Bézier path.
    pub fn to_path(&self) -> BezPath {
        match self {
            Primitive::Rect { rect, radius } => {
                RoundedRect::from_rect(*rect, *radius).to_path(TOLERANCE)
            }
            Primitive::Ellipse(e) => e.to_path(TOLERANCE),
            Primitive::Polygon(points) => {
                let mut path = BezPath::new();
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    path.move_to(*first);
                    for p in iter {
                        path.line_to(*p);
                    }
                    path.close_path();
                }
                path
            }
            Primitive::Path(path) => path.clone(),
        }
    }
}

/// How a primitive is painted with the shape's color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintMode {
    Fill,
    Stroke { width: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryPart {
    pub primitive: Primitive,
    pub mode: PaintMode,
}

/// The full vector body of a shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeGeometry {
    pub parts: SmallVec<[GeometryPart; 2]>,
}

impl ShapeGeometry {
    fn fill(primitive: Primitive) -> Self {
        Self::default().and_fill(primitive)
    }

    fn stroke(primitive: Primitive) -> Self {
        Self::default().and_stroke(primitive)
    }

    fn and_fill(mut self, primitive: Primitive) -> Self {
        self.parts.push(GeometryPart {
            primitive,
            mode: PaintMode::Fill,
        });
        self
    }

    fn and_stroke(mut self, primitive: Primitive) -> Self {
        self.parts.push(GeometryPart {
            primitive,
            mode: PaintMode::Stroke {
                width: STROKE_WIDTH,
            },
        });
        self
    }

    /// Union of the geometric bounds of all parts (stroke width excluded).
    pub fn bounding_box(&self) -> Option<Rect> {
        self.parts
            .iter()
            .map(|part| part.primitive.to_path().bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

// ─── Frame ───────────────────────────────────────────────────────────────

/// The inset drawing area of a shape, with unit-coordinate helpers.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(width: f32, height: f32) -> Self {
        let w = sanitize(width);
        let h = sanitize(height);
        Self {
            left: INSET,
            top: INSET,
            width: (w - 2.0 * INSET).max(0.0),
            height: (h - 2.0 * INSET).max(0.0),
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn rx(&self) -> f64 {
        self.width / 2.0
    }

    fn ry(&self) -> f64 {
        self.height / 2.0
    }

    fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// Map a unit coordinate (0..1 across the frame) to shape-local space.
    fn at(&self, u: f64, v: f64) -> Point {
        Point::new(self.left + self.width * u, self.top + self.height * v)
    }

    fn polygon(&self, unit: &[(f64, f64)]) -> Primitive {
        Primitive::Polygon(unit.iter().map(|&(u, v)| self.at(u, v)).collect())
    }

    fn path(&self) -> UnitPath {
        UnitPath {
            frame: *self,
            path: BezPath::new(),
        }
    }

    /// Point on the frame's inscribed ellipse scaled by `k`.
    fn radial(&self, angle: f64, k: f64) -> Point {
        let c = self.center();
        Point::new(c.x + self.rx() * k * angle.cos(), c.y + self.ry() * k * angle.sin())
    }
}

fn sanitize(v: f32) -> f64 {
    if v.is_finite() && v > 0.0 { v as f64 } else { 0.0 }
}

/// Path builder taking unit coordinates.
struct UnitPath {
    frame: Frame,
    path: BezPath,
}

impl UnitPath {
    fn move_to(mut self, u: f64, v: f64) -> Self {
        self.path.move_to(self.frame.at(u, v));
        self
    }

    fn line_to(mut self, u: f64, v: f64) -> Self {
        self.path.line_to(self.frame.at(u, v));
        self
    }

    fn curve_to(mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        let f = self.frame;
        self.path
            .curve_to(f.at(c1.0, c1.1), f.at(c2.0, c2.1), f.at(end.0, end.1));
        self
    }

    fn close(mut self) -> Self {
        self.path.close_path();
        self
    }

    fn finish(self) -> Primitive {
        Primitive::Path(self.path)
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────────

/// A geometry constructor for one shape kind.
type Builder = fn(&Frame) -> ShapeGeometry;

/// The builder table. Each kind maps to exactly one constructor; names that
/// do not resolve reach the rectangle entry through `ShapeKind::FALLBACK`.
fn builder(kind: ShapeKind) -> Builder {
    match kind {
        ShapeKind::Rectangle => rectangle,
        ShapeKind::RoundedRectangle => rounded_rectangle,
        ShapeKind::Pill => pill,
        ShapeKind::Circle => circle,
        ShapeKind::Triangle => triangle,
        ShapeKind::Pentagon => pentagon,
        ShapeKind::Hexagon => hexagon,
        ShapeKind::Octagon => octagon,
        ShapeKind::Star => star,
        ShapeKind::Heart => heart,
        ShapeKind::Cross => cross,
        ShapeKind::Minus => minus,
        ShapeKind::Arrow => arrow_right,
        ShapeKind::ArrowUp => arrow_up,
        ShapeKind::ArrowDown => arrow_down,
        ShapeKind::ArrowLeft => arrow_left,
        ShapeKind::DoubleArrow => double_arrow,
        ShapeKind::Diamond => diamond,
        ShapeKind::Parallelogram => parallelogram,
        ShapeKind::Trapezoid => trapezoid,
        ShapeKind::Cloud => cloud,
        ShapeKind::SpeechBubble => speech_bubble,
        ShapeKind::Lightning => lightning,
        ShapeKind::Checkmark => checkmark,
        ShapeKind::XMark => xmark,
        ShapeKind::ChevronRight => chevron_right,
        ShapeKind::ChevronLeft => chevron_left,
        ShapeKind::ChevronUp => chevron_up,
        ShapeKind::ChevronDown => chevron_down,
        ShapeKind::Line => line,
        ShapeKind::Explosion => explosion,
        ShapeKind::Sun => sun,
        ShapeKind::Moon => moon,
        ShapeKind::Bracket => bracket,
        ShapeKind::Brace => brace,
        ShapeKind::CurvedArrow => curved_arrow,
        ShapeKind::Banner => banner,
    }
}

/// Build the geometry for a kind at the given size.
pub fn build_geometry(kind: ShapeKind, width: f32, height: f32) -> ShapeGeometry {
    builder(kind)(&Frame::new(width, height))
}

/// Build the geometry for a kind name; unknown names render as a rectangle.
pub fn geometry_for_name(name: &str, width: f32, height: f32) -> ShapeGeometry {
    build_geometry(ShapeKind::resolve(name), width, height)
}

/// Build the geometry for a host shape.
pub fn shape_geometry(shape: &Shape) -> ShapeGeometry {
    build_geometry(shape.kind, shape.width, shape.height)
}

// ─── Boxes and ellipses ──────────────────────────────────────────────────

fn rectangle(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(Primitive::Rect {
        rect: f.rect(),
        radius: 0.0,
    })
}

fn rounded_rectangle(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(Primitive::Rect {
        rect: f.rect(),
        radius: f.width.min(f.height) * 0.15,
    })
}

fn pill(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(Primitive::Rect {
        rect: f.rect(),
        radius: f.width.min(f.height) / 2.0,
    })
}

fn circle(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(Primitive::Ellipse(Ellipse::new(
        f.center(),
        (f.rx(), f.ry()),
        0.0,
    )))
}

fn minus(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(Primitive::Rect {
        rect: Rect::from_points(f.at(0.0, 0.38), f.at(1.0, 0.62)),
        radius: 0.0,
    })
}

// ─── Polygons ────────────────────────────────────────────────────────────

/// `n` evenly spaced vertices on the inscribed ellipse, starting at `offset`.
fn regular_polygon(f: &Frame, n: usize, offset: f64) -> Primitive {
    let step = TAU / n as f64;
    Primitive::Polygon((0..n).map(|i| f.radial(offset + step * i as f64, 1.0)).collect())
}

/// `points` spikes alternating between the outer ellipse and `inner` × it.
fn burst(f: &Frame, points: usize, inner: f64) -> Primitive {
    let step = PI / points as f64;
    Primitive::Polygon(
        (0..points * 2)
            .map(|i| {
                let k = if i % 2 == 0 { 1.0 } else { inner };
                f.radial(-FRAC_PI_2 + step * i as f64, k)
            })
            .collect(),
    )
}

fn triangle(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[(0.5, 0.0), (1.0, 1.0), (0.0, 1.0)]))
}

fn pentagon(f: &Frame) -> ShapeGeometry {
    // Apex up, flat bottom.
    ShapeGeometry::fill(regular_polygon(f, 5, -FRAC_PI_2))
}

fn hexagon(f: &Frame) -> ShapeGeometry {
    // Flat top and bottom.
    ShapeGeometry::fill(regular_polygon(f, 6, 0.0))
}

fn octagon(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(regular_polygon(f, 8, PI / 8.0))
}

fn star(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(burst(f, 5, 0.4))
}

fn explosion(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(burst(f, 12, 0.65))
}

fn cross(f: &Frame) -> ShapeGeometry {
    let (a, b) = (1.0 / 3.0, 2.0 / 3.0);
    ShapeGeometry::fill(f.polygon(&[
        (a, 0.0),
        (b, 0.0),
        (b, a),
        (1.0, a),
        (1.0, b),
        (b, b),
        (b, 1.0),
        (a, 1.0),
        (a, b),
        (0.0, b),
        (0.0, a),
        (a, a),
    ]))
}

fn diamond(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)]))
}

fn parallelogram(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[(0.25, 0.0), (1.0, 0.0), (0.75, 1.0), (0.0, 1.0)]))
}

fn trapezoid(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[(0.2, 0.0), (0.8, 0.0), (1.0, 1.0), (0.0, 1.0)]))
}

fn lightning(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[
        (0.6, 0.0),
        (0.15, 0.55),
        (0.45, 0.55),
        (0.35, 1.0),
        (0.85, 0.4),
        (0.55, 0.4),
        (0.7, 0.0),
    ]))
}

fn banner(f: &Frame) -> ShapeGeometry {
    // Ribbon with notched ends.
    ShapeGeometry::fill(f.polygon(&[
        (0.0, 0.2),
        (1.0, 0.2),
        (0.88, 0.5),
        (1.0, 0.8),
        (0.0, 0.8),
        (0.12, 0.5),
    ]))
}

// ─── Directional shapes ──────────────────────────────────────────────────

/// Direction a directional shape points in. Unit outlines are written for
/// `Right` as (along, across) pairs and mapped to the other directions.
#[derive(Debug, Clone, Copy)]
enum Orientation {
    Right,
    Left,
    Up,
    Down,
}

impl Orientation {
    fn map(self, along: f64, across: f64) -> (f64, f64) {
        match self {
            Orientation::Right => (along, across),
            Orientation::Left => (1.0 - along, across),
            Orientation::Down => (across, along),
            Orientation::Up => (across, 1.0 - along),
        }
    }

    fn outline(self, unit: &[(f64, f64)]) -> Vec<(f64, f64)> {
        unit.iter().map(|&(a, c)| self.map(a, c)).collect()
    }
}

fn block_arrow(f: &Frame, dir: Orientation) -> ShapeGeometry {
    const RIGHT: [(f64, f64); 7] = [
        (0.0, 0.3),
        (0.6, 0.3),
        (0.6, 0.0),
        (1.0, 0.5),
        (0.6, 1.0),
        (0.6, 0.7),
        (0.0, 0.7),
    ];
    ShapeGeometry::fill(f.polygon(&dir.outline(&RIGHT)))
}

fn arrow_right(f: &Frame) -> ShapeGeometry {
    block_arrow(f, Orientation::Right)
}

fn arrow_left(f: &Frame) -> ShapeGeometry {
    block_arrow(f, Orientation::Left)
}

fn arrow_up(f: &Frame) -> ShapeGeometry {
    block_arrow(f, Orientation::Up)
}

fn arrow_down(f: &Frame) -> ShapeGeometry {
    block_arrow(f, Orientation::Down)
}

fn double_arrow(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(f.polygon(&[
        (0.0, 0.5),
        (0.25, 0.0),
        (0.25, 0.3),
        (0.75, 0.3),
        (0.75, 0.0),
        (1.0, 0.5),
        (0.75, 1.0),
        (0.75, 0.7),
        (0.25, 0.7),
        (0.25, 1.0),
    ]))
}

fn chevron(f: &Frame, dir: Orientation) -> ShapeGeometry {
    let pts = dir.outline(&[(0.35, 0.1), (0.7, 0.5), (0.35, 0.9)]);
    ShapeGeometry::stroke(
        f.path()
            .move_to(pts[0].0, pts[0].1)
            .line_to(pts[1].0, pts[1].1)
            .line_to(pts[2].0, pts[2].1)
            .finish(),
    )
}

fn chevron_right(f: &Frame) -> ShapeGeometry {
    chevron(f, Orientation::Right)
}

fn chevron_left(f: &Frame) -> ShapeGeometry {
    chevron(f, Orientation::Left)
}

fn chevron_up(f: &Frame) -> ShapeGeometry {
    chevron(f, Orientation::Up)
}

fn chevron_down(f: &Frame) -> ShapeGeometry {
    chevron(f, Orientation::Down)
}

// ─── Strokes ─────────────────────────────────────────────────────────────

fn line(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::stroke(f.path().move_to(0.0, 0.5).line_to(1.0, 0.5).finish())
}

fn checkmark(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::stroke(
        f.path()
            .move_to(0.15, 0.55)
            .line_to(0.4, 0.8)
            .line_to(0.85, 0.2)
            .finish(),
    )
}

fn xmark(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::stroke(
        f.path()
            .move_to(0.2, 0.2)
            .line_to(0.8, 0.8)
            .move_to(0.8, 0.2)
            .line_to(0.2, 0.8)
            .finish(),
    )
}

fn bracket(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::stroke(
        f.path()
            .move_to(0.65, 0.0)
            .line_to(0.35, 0.0)
            .line_to(0.35, 1.0)
            .line_to(0.65, 1.0)
            .finish(),
    )
}

fn brace(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::stroke(
        f.path()
            .move_to(0.65, 0.0)
            .curve_to((0.45, 0.0), (0.5, 0.1), (0.5, 0.25))
            .line_to(0.5, 0.4)
            .curve_to((0.5, 0.47), (0.45, 0.5), (0.35, 0.5))
            .curve_to((0.45, 0.5), (0.5, 0.53), (0.5, 0.6))
            .line_to(0.5, 0.75)
            .curve_to((0.5, 0.9), (0.45, 1.0), (0.65, 1.0))
            .finish(),
    )
}

// ─── Composite paths ─────────────────────────────────────────────────────

fn heart(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(
        f.path()
            .move_to(0.5, 0.25)
            .curve_to((0.45, 0.0), (0.0, 0.0), (0.0, 0.3))
            .curve_to((0.0, 0.6), (0.35, 0.75), (0.5, 1.0))
            .curve_to((0.65, 0.75), (1.0, 0.6), (1.0, 0.3))
            .curve_to((1.0, 0.0), (0.55, 0.0), (0.5, 0.25))
            .close()
            .finish(),
    )
}

fn cloud(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(
        f.path()
            .move_to(0.2, 0.85)
            .curve_to((0.05, 0.85), (0.0, 0.65), (0.12, 0.55))
            .curve_to((0.05, 0.35), (0.2, 0.2), (0.35, 0.28))
            .curve_to((0.4, 0.05), (0.65, 0.05), (0.68, 0.25))
            .curve_to((0.85, 0.15), (1.0, 0.35), (0.9, 0.5))
            .curve_to((1.0, 0.6), (0.95, 0.85), (0.8, 0.85))
            .close()
            .finish(),
    )
}

fn speech_bubble(f: &Frame) -> ShapeGeometry {
    // Rounded body over the top three quarters, tail below the left half.
    let body_bottom = f.top + f.height * 0.75;
    let r = f.width.min(body_bottom - f.top) * 0.15;
    let (l, t, rt) = (f.left, f.top, f.right());
    let b = body_bottom;

    let mut path = BezPath::new();
    path.move_to((l + r, t));
    path.line_to((rt - r, t));
    path.quad_to((rt, t), (rt, t + r));
    path.line_to((rt, b - r));
    path.quad_to((rt, b), (rt - r, b));
    path.line_to(f.at(0.45, 0.75));
    path.line_to(f.at(0.25, 1.0));
    path.line_to(f.at(0.3, 0.75));
    path.line_to((l + r, b));
    path.quad_to((l, b), (l, b - r));
    path.line_to((l, t + r));
    path.quad_to((l, t), (l + r, t));
    path.close_path();
    ShapeGeometry::fill(Primitive::Path(path))
}

fn moon(f: &Frame) -> ShapeGeometry {
    ShapeGeometry::fill(
        f.path()
            .move_to(0.75, 0.0)
            .curve_to((0.0, 0.0), (0.0, 1.0), (0.75, 1.0))
            .curve_to((0.35, 0.8), (0.35, 0.2), (0.75, 0.0))
            .close()
            .finish(),
    )
}

fn sun(f: &Frame) -> ShapeGeometry {
    const RAYS: usize = 8;
    let c = f.center();
    let disc = Ellipse::new(c, (f.rx() * 0.55, f.ry() * 0.55), 0.0);

    let mut rays = BezPath::new();
    for i in 0..RAYS {
        let angle = TAU * i as f64 / RAYS as f64;
        rays.move_to(f.radial(angle, 0.7));
        rays.line_to(f.radial(angle, 1.0));
    }
    ShapeGeometry::fill(Primitive::Ellipse(disc)).and_stroke(Primitive::Path(rays))
}

fn curved_arrow(f: &Frame) -> ShapeGeometry {
    // Quarter arc sweeping from the bottom-left up to the right, with a head.
    let arc = Arc {
        center: f.at(0.7, 0.9),
        radii: Vec2::new(f.width * 0.55, f.height * 0.6),
        start_angle: PI,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    let mut shaft = BezPath::new();
    shaft.move_to(f.at(0.15, 0.9));
    shaft.extend(arc.append_iter(TOLERANCE));

    // The arc ends at (0.7, 0.3) heading right; the head points along +x.
    let head = f.polygon(&[(0.7, 0.12), (1.0, 0.3), (0.7, 0.48)]);
    ShapeGeometry::stroke(Primitive::Path(shaft)).and_fill(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rectangle_is_inset_by_two() {
        let g = build_geometry(ShapeKind::Rectangle, 100.0, 60.0);
        assert_eq!(g.parts.len(), 1);
        assert_eq!(
            g.parts[0].primitive,
            Primitive::Rect {
                rect: Rect::new(2.0, 2.0, 98.0, 58.0),
                radius: 0.0,
            }
        );
        assert_eq!(g.parts[0].mode, PaintMode::Fill);
    }

    #[test]
    fn circle_is_inscribed_ellipse() {
        let g = build_geometry(ShapeKind::Circle, 200.0, 100.0);
        let Primitive::Ellipse(e) = &g.parts[0].primitive else {
            panic!("expected ellipse");
        };
        assert_eq!(e.center(), Point::new(100.0, 50.0));
        let radii = e.radii();
        assert!((radii.x - 98.0).abs() < 1e-9);
        assert!((radii.y - 48.0).abs() < 1e-9);
    }

    #[test]
    fn regular_polygons_have_expected_vertex_counts() {
        for (kind, n) in [
            (ShapeKind::Pentagon, 5),
            (ShapeKind::Hexagon, 6),
            (ShapeKind::Octagon, 8),
            (ShapeKind::Star, 10),
            (ShapeKind::Explosion, 24),
            (ShapeKind::Triangle, 3),
            (ShapeKind::Cross, 12),
        ] {
            let g = build_geometry(kind, 120.0, 120.0);
            let Primitive::Polygon(points) = &g.parts[0].primitive else {
                panic!("{kind:?} should be a polygon");
            };
            assert_eq!(points.len(), n, "{kind:?}");
        }
    }

    #[test]
    fn hexagon_has_flat_top_and_bottom() {
        let g = build_geometry(ShapeKind::Hexagon, 100.0, 100.0);
        let Primitive::Polygon(points) = &g.parts[0].primitive else {
            panic!("expected polygon");
        };
        let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        ys.sort_by(f64::total_cmp);
        // Two vertices share the minimum y, two share the maximum.
        assert!((ys[0] - ys[1]).abs() < 1e-9);
        assert!((ys[4] - ys[5]).abs() < 1e-9);
    }

    #[test]
    fn pentagon_apex_is_at_top_center() {
        let g = build_geometry(ShapeKind::Pentagon, 100.0, 100.0);
        let Primitive::Polygon(points) = &g.parts[0].primitive else {
            panic!("expected polygon");
        };
        assert!((points[0].x - 50.0).abs() < 1e-9);
        assert!((points[0].y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn star_alternates_radii() {
        let g = build_geometry(ShapeKind::Star, 100.0, 100.0);
        let Primitive::Polygon(points) = &g.parts[0].primitive else {
            panic!("expected polygon");
        };
        let c = Point::new(50.0, 50.0);
        let outer = points[0].distance(c);
        let inner = points[1].distance(c);
        assert!((outer - 48.0).abs() < 1e-9);
        assert!((inner - 48.0 * 0.4).abs() < 1e-9);
    }

    #[test]
    fn stroke_only_kinds_have_no_fill() {
        for kind in ShapeKind::ALL.into_iter().filter(|k| k.is_stroke_only()) {
            let g = build_geometry(kind, 100.0, 100.0);
            assert!(
                g.parts.iter().all(|p| matches!(p.mode, PaintMode::Stroke { .. })),
                "{kind:?} should be stroke-only"
            );
        }
    }

    #[test]
    fn arrows_point_the_right_way() {
        let tip = |kind| {
            let g = build_geometry(kind, 100.0, 100.0);
            let Primitive::Polygon(points) = &g.parts[0].primitive else {
                panic!("expected polygon");
            };
            points[3]
        };
        assert_eq!(tip(ShapeKind::Arrow), Point::new(98.0, 50.0));
        assert_eq!(tip(ShapeKind::ArrowLeft), Point::new(2.0, 50.0));
        assert_eq!(tip(ShapeKind::ArrowDown), Point::new(50.0, 98.0));
        assert_eq!(tip(ShapeKind::ArrowUp), Point::new(50.0, 2.0));
    }

    #[test]
    fn sun_has_disc_and_rays() {
        let g = build_geometry(ShapeKind::Sun, 100.0, 100.0);
        assert_eq!(g.parts.len(), 2);
        assert_eq!(g.parts[0].mode, PaintMode::Fill);
        assert!(matches!(g.parts[1].mode, PaintMode::Stroke { .. }));
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for kind in ShapeKind::ALL {
            for (w, h) in [(0.0, 0.0), (-10.0, 5.0), (f32::NAN, 10.0), (1.0, f32::INFINITY)] {
                let g = build_geometry(kind, w, h);
                assert!(!g.parts.is_empty(), "{kind:?} at {w}×{h}");
            }
        }
    }
}
