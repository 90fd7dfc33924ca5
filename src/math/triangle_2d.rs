//! Point-in-triangle tests.
//!
//! Three independent algorithms that agree on non-degenerate triangles up to
//! floating-point rounding. They differ in how the boundary is reported:
//! the barycentric and orientation tests return [`Location::OnBoundary`] for
//! points on an edge or vertex, the area-sum test folds the boundary into
//! [`Location::Inside`].

use approx::relative_eq;

use super::measure::triangle_area;
use super::orientation_2d::orientation;
use super::{Location, Point2, Sign, RELATIVE_TOLERANCE, TOLERANCE};

/// Barycentric point-in-triangle test.
///
/// Solves the weights `a` (of `p1`) and `b` (of `p2`) by Cramer's rule. The
/// point is outside if `a < 0`, `b < 0` or `a + b > 1`, on the boundary if a
/// weight is exactly zero, and inside otherwise.
///
/// The third weight counts too: a point on edge `p1 -> p2` (`a + b == 1`) is
/// on the boundary, where a bare `a * b == 0` check would call it inside.
///
/// The denominator is twice the signed triangle area and is not guarded: a
/// near-degenerate triangle divides by a value close to zero and the weights
/// lose all precision. A fully degenerate triangle produces NaN weights,
/// which compare false everywhere and classify as inside.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_point_in_triangle(p1: &Point2, p2: &Point2, p3: &Point2, point: &Point2) -> Location {
    let denom = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    let a = ((p2.y - p3.y) * (point.x - p3.x) + (p3.x - p2.x) * (point.y - p3.y)) / denom;
    let b = ((p3.y - p1.y) * (point.x - p3.x) + (p1.x - p3.x) * (point.y - p3.y)) / denom;

    if a < 0.0 || b < 0.0 || a + b > 1.0 {
        return Location::Outside;
    }
    if a * b == 0.0 || a + b == 1.0 {
        return Location::OnBoundary;
    }
    Location::Inside
}

/// Orientation-product point-in-triangle test.
///
/// For each directed edge, multiplies the orientation of `point` with the
/// orientation of the opposite vertex. A negative product puts the point on
/// the far side of that edge. A zero product puts it on the edge's line; it
/// counts as on the boundary when its distance from the edge start does not
/// exceed the edge length, and as outside otherwise.
#[must_use]
pub fn is_point_in_triangle_orientation(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    point: &Point2,
) -> Location {
    let edges = [(p1, p2, p3), (p2, p3, p1), (p3, p1, p2)];
    let mut on_edge = false;

    for (start, end, opposite) in edges {
        match orientation(start, end, point) * orientation(start, end, opposite) {
            Sign::Negative => return Location::Outside,
            Sign::Zero => {
                if (point - start).norm() > (end - start).norm() {
                    return Location::Outside;
                }
                on_edge = true;
            }
            Sign::Positive => {}
        }
    }

    if on_edge {
        Location::OnBoundary
    } else {
        Location::Inside
    }
}

/// Area-sum point-in-triangle test.
///
/// The point is inside (or on the boundary) when the three sub-triangles it
/// forms with the edges add up to the triangle's own area. The comparison is
/// approximate, so this test never reports [`Location::OnBoundary`].
#[must_use]
pub fn is_point_in_triangle_area(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    point: &Point2,
) -> Location {
    let area = triangle_area(p1, p2, p3);
    let sum = triangle_area(point, p1, p2)
        + triangle_area(point, p2, p3)
        + triangle_area(point, p3, p1);

    if relative_eq!(sum, area, epsilon = TOLERANCE, max_relative = RELATIVE_TOLERANCE) {
        Location::Inside
    } else {
        Location::Outside
    }
}
