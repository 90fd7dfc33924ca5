use super::orientation_2d::cross_2d;
use super::{Point2, Point3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Unnormalized distance from `p` to the infinite line through `p1` and `p2`.
///
/// This is the numerator `|(y2 - y1) x - (x2 - x1) y + x2 y1 - y2 x1|` of the
/// point-to-line distance formula. It is not divided by `|p2 - p1|`, so it
/// only ranks points against the same line. See [`point_line_distance`] for
/// the true distance.
#[must_use]
pub fn max_distance(p: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    ((p2.y - p1.y) * p.x - (p2.x - p1.x) * p.y + p2.x * p1.y - p2.y * p1.x).abs()
}

/// Perpendicular distance from `p` to the infinite line through `p1` and `p2`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `p1` and `p2` coincide.
pub fn point_line_distance(p: &Point2, p1: &Point2, p2: &Point2) -> Result<f64> {
    let len = (p2 - p1).norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(max_distance(p, p1, p2) / len)
}

/// Area of triangle `(p1, p2, p3)` by the shoelace formula. Never negative;
/// zero for collinear vertices.
#[must_use]
pub fn triangle_area(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (0.5 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y))).abs()
}

/// Signed area of triangle `(p1, p2, p3)`: positive for counter-clockwise
/// winding, negative for clockwise.
#[must_use]
pub fn signed_triangle_area(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    0.5 * cross_2d(p1, p2, p3)
}

/// Signed volume of tetrahedron `(a, b, c, d)`: `(a - d) . ((b - d) x (c - d)) / 6`.
///
/// Returns exactly `0.0` without evaluating the triple product when any two
/// of `a`, `b`, `c` are equal. `d` takes no part in that check.
#[must_use]
pub fn signed_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    if a == b || a == c || b == c {
        tracing::trace!(?a, ?b, ?c, "degenerate base triangle, volume is zero");
        return 0.0;
    }
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;
    ad.dot(&bd.cross(&cd)) / 6.0
}
