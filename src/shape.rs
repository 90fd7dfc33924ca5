//! Value-type shape descriptors over the free predicates in [`crate::math`].

use crate::math::radial::{is_point_in_ellipse, is_point_in_radius};
use crate::math::rect_2d::is_point_in_rect_orientation;
use crate::math::triangle_2d::{
    is_point_in_triangle, is_point_in_triangle_area, is_point_in_triangle_orientation,
};
use crate::math::{Location, Point2, Point3, Vector2};

/// Shapes that can classify a 2D query point.
pub trait Containment {
    /// Returns where `point` lies relative to the shape.
    fn locate(&self, point: &Point2) -> Location;

    /// `true` if `point` is inside or on the boundary.
    fn contains(&self, point: &Point2) -> bool {
        self.locate(point).is_inside_or_on_boundary()
    }
}

/// Circle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Containment for Circle {
    fn locate(&self, point: &Point2) -> Location {
        is_point_in_radius(
            &Point3::new(self.center.x, self.center.y, 0.0),
            self.radius,
            &Point3::new(point.x, point.y, 0.0),
        )
    }
}

/// Ellipse with semi-axes `radii`, rotated counter-clockwise by `rotation`
/// radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point2,
    pub radii: Vector2,
    pub rotation: f64,
}

impl Ellipse {
    #[must_use]
    pub fn new(center: Point2, radii: Vector2, rotation: f64) -> Self {
        Self {
            center,
            radii,
            rotation,
        }
    }
}

impl Containment for Ellipse {
    fn locate(&self, point: &Point2) -> Location {
        is_point_in_ellipse(&self.center, &self.radii, self.rotation, point)
    }
}

/// Which point-in-triangle algorithm a [`Triangle`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleAlgorithm {
    #[default]
    Barycentric,
    Orientation,
    /// Never reports [`Location::OnBoundary`].
    AreaSum,
}

/// Triangle tested with a selectable [`TriangleAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2; 3],
    pub algorithm: TriangleAlgorithm,
}

impl Triangle {
    /// Creates a triangle using the default (barycentric) test.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            vertices: [p1, p2, p3],
            algorithm: TriangleAlgorithm::default(),
        }
    }

    /// Returns a copy that uses `algorithm`.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: TriangleAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Containment for Triangle {
    fn locate(&self, point: &Point2) -> Location {
        let [p1, p2, p3] = &self.vertices;
        match self.algorithm {
            TriangleAlgorithm::Barycentric => is_point_in_triangle(p1, p2, p3, point),
            TriangleAlgorithm::Orientation => is_point_in_triangle_orientation(p1, p2, p3, point),
            TriangleAlgorithm::AreaSum => is_point_in_triangle_area(p1, p2, p3, point),
        }
    }
}

/// Rectangle of `size = (w, h)` rotated counter-clockwise by `rotation`
/// radians about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Point2,
    pub size: Vector2,
    pub rotation: f64,
}

impl Rect {
    #[must_use]
    pub fn new(center: Point2, size: Vector2, rotation: f64) -> Self {
        Self {
            center,
            size,
            rotation,
        }
    }
}

impl Containment for Rect {
    fn locate(&self, point: &Point2) -> Location {
        is_point_in_rect_orientation(&self.center, &self.size, self.rotation, point)
    }
}
