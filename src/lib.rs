//! Stateless geometric predicates and measurements over 2D and 3D points.
//!
//! Every function is pure and works in ordinary `f64` arithmetic. Boundary
//! decisions use exact comparisons, so inputs that sit on an edge only in
//! exact arithmetic may classify either way.

pub mod error;
pub mod math;
pub mod shape;

pub use error::{GeometryError, GeopredError, Result};
pub use math::measure::{
    max_distance, point_line_distance, signed_triangle_area, signed_volume, triangle_area,
};
pub use math::orientation_2d::{orientation, orientation2};
pub use math::radial::{is_point_in_ellipse, is_point_in_radius};
pub use math::rect_2d::{is_point_in_rect, is_point_in_rect_orientation, rect_corners};
pub use math::triangle_2d::{
    is_point_in_triangle, is_point_in_triangle_area, is_point_in_triangle_orientation,
};
pub use math::{Location, Point2, Point3, Sign, Vector2, Vector3};
pub use shape::{Circle, Containment, Ellipse, Rect, Triangle, TriangleAlgorithm};
