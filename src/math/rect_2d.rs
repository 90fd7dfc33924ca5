use nalgebra::Rotation2;

use super::orientation_2d::orientation;
use super::{Location, Point2, Sign, Vector2};
use crate::error::{GeometryError, Result};

/// Corners of a `size = (w, h)` rectangle rotated counter-clockwise by
/// `rotation` radians about `center`, in counter-clockwise order starting
/// from the bottom-left corner of the unrotated rectangle.
#[must_use]
pub fn rect_corners(center: &Point2, size: &Vector2, rotation: f64) -> [Point2; 4] {
    let half = size * 0.5;
    let rot = Rotation2::new(rotation);
    [
        Vector2::new(-half.x, -half.y),
        Vector2::new(half.x, -half.y),
        Vector2::new(half.x, half.y),
        Vector2::new(-half.x, half.y),
    ]
    .map(|offset| center + rot * offset)
}

/// Classifies `point` against a rotated rectangle using one orientation test
/// per edge.
///
/// Any edge with the point on its right makes it [`Location::Outside`].
/// Otherwise the product of the four signs decides: all left gives
/// [`Location::Inside`], any exactly collinear edge gives
/// [`Location::OnBoundary`].
#[must_use]
pub fn is_point_in_rect_orientation(
    center: &Point2,
    size: &Vector2,
    rotation: f64,
    point: &Point2,
) -> Location {
    let corners = rect_corners(center, size, rotation);
    let mut product = Sign::Positive;
    for (start, end) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        let side = orientation(start, end, point);
        if side == Sign::Negative {
            return Location::Outside;
        }
        product = product * side;
    }

    if product == Sign::Zero {
        Location::OnBoundary
    } else {
        Location::Inside
    }
}

/// Direct point-in-rectangle test. Not implemented; use
/// [`is_point_in_rect_orientation`].
///
/// # Errors
///
/// Always returns `GeometryError::NotImplemented`.
pub fn is_point_in_rect(
    center: &Point2,
    size: &Vector2,
    rotation: f64,
    point: &Point2,
) -> Result<Location> {
    tracing::warn!(?center, ?size, rotation, ?point, "is_point_in_rect is not implemented");
    Err(GeometryError::NotImplemented {
        operation: "is_point_in_rect",
    }
    .into())
}
