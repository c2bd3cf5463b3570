pub mod geometry;
pub mod hit;
pub mod paint;
pub mod svg;

pub use geometry::{
    GeometryPart, PaintMode, Primitive, ShapeGeometry, build_geometry, geometry_for_name,
    shape_geometry,
};
pub use hit::{HitConfig, HitTarget, hit_test};
pub use svg::{geometry_svg, shape_svg};
