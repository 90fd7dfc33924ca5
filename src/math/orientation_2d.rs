use super::{Point2, Sign, Vector2};

/// Side of point `p` relative to the directed line `p1 -> p2`.
///
/// Sign of the 2D cross product `(p2 - p1) x (p - p1)`: [`Sign::Positive`]
/// when `p` is left of the line, [`Sign::Negative`] when right, and
/// [`Sign::Zero`] only when the product is exactly `0.0` (collinear, which
/// includes `p == p1` and `p == p2`).
///
/// The raw product is twice the signed area of triangle `(p1, p2, p)`.
/// Near-collinear inputs may round either way.
#[must_use]
pub fn orientation(p1: &Point2, p2: &Point2, p: &Point2) -> Sign {
    Sign::from_value(cross_2d(p1, p2, p))
}

/// Same predicate as [`orientation`], derived from the line normal.
///
/// Projects `p - p1` onto the right-hand normal of `p2 - p1`, which yields
/// the negated cross product, and flips the result back.
#[must_use]
pub fn orientation2(p1: &Point2, p2: &Point2, p: &Point2) -> Sign {
    let dir = p2 - p1;
    let normal = right_normal(&dir);
    -Sign::from_value(normal.dot(&(p - p1)))
}

/// Raw determinant behind [`orientation`].
#[inline]
pub(crate) fn cross_2d(p1: &Point2, p2: &Point2, p: &Point2) -> f64 {
    (p2 - p1).perp(&(p - p1))
}

/// Returns the right-pointing normal of a direction vector.
#[inline]
fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}
