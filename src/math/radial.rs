use super::{locate_below, Location, Point2, Point3, Vector2};

/// Classifies `point` against the sphere (or circle, with `z = 0`) of
/// `radius` around `center`.
///
/// Compares squared distance with squared radius; [`Location::OnBoundary`]
/// only on exact equality.
#[must_use]
pub fn is_point_in_radius(center: &Point3, radius: f64, point: &Point3) -> Location {
    let dist_sq = (point - center).norm_squared();
    locate_below(dist_sq, radius * radius)
}

/// Classifies `point` against an ellipse with semi-axes `radii = (rx, ry)`
/// rotated counter-clockwise by `rotation` radians about `center`.
///
/// The offset from the center is taken into the ellipse frame as
/// `x' = cos * dx + sin * dy`, `y' = sin * dx - cos * dy`, and
/// `(x' / rx)^2 + (y' / ry)^2` is compared exactly with `1`.
///
/// A zero semi-axis is not guarded. With a zero local offset along that axis
/// the term is `0 / 0 = NaN`, which compares false both ways and classifies
/// as [`Location::OnBoundary`].
#[must_use]
pub fn is_point_in_ellipse(
    center: &Point2,
    radii: &Vector2,
    rotation: f64,
    point: &Point2,
) -> Location {
    let d = point - center;
    let (sin, cos) = rotation.sin_cos();
    let local_x = cos * d.x + sin * d.y;
    let local_y = sin * d.x - cos * d.y;
    let value = (local_x / radii.x).powi(2) + (local_y / radii.y).powi(2);
    locate_below(value, 1.0)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::math::rect_2d::is_point_in_rect_orientation;

    // ── is_point_in_radius ──

    #[test]
    fn radius_boundary_is_exact() {
        let c = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(is_point_in_radius(&c, 2.0, &Point3::new(2.0, 0.0, 0.0)), Location::OnBoundary);
        assert_eq!(is_point_in_radius(&c, 2.0, &Point3::new(1.0, 1.0, 0.0)), Location::Inside);
        assert_eq!(is_point_in_radius(&c, 2.0, &Point3::new(2.0, 0.1, 0.0)), Location::Outside);
    }

    #[test]
    fn radius_uses_all_three_axes() {
        let c = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(is_point_in_radius(&c, 1.0, &Point3::new(1.0, 1.0, 2.0)), Location::OnBoundary);
        assert_eq!(is_point_in_radius(&c, 1.0, &Point3::new(1.0, 1.0, 2.5)), Location::Outside);
    }

    #[test]
    fn zero_radius_only_contains_center_on_boundary() {
        let c = Point3::new(3.0, -2.0, 0.0);
        assert_eq!(is_point_in_radius(&c, 0.0, &c), Location::OnBoundary);
        assert_eq!(is_point_in_radius(&c, 0.0, &Point3::new(3.0, -2.0, 1e-9)), Location::Outside);
    }

    // ── is_point_in_ellipse ──

    #[test]
    fn axis_aligned_ellipse() {
        let c = Point2::new(0.0, 0.0);
        let r = Vector2::new(2.0, 1.0);
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(1.0, 0.0)), Location::Inside);
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(2.0, 0.0)), Location::OnBoundary);
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(0.0, -1.0)), Location::OnBoundary);
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(0.0, 1.5)), Location::Outside);
    }

    #[test]
    fn rotated_ellipse_swaps_axes() {
        let c = Point2::new(10.0, 10.0);
        let r = Vector2::new(4.0, 1.0);
        // Major axis now along y.
        assert_eq!(
            is_point_in_ellipse(&c, &r, FRAC_PI_2, &Point2::new(10.0, 13.0)),
            Location::Inside
        );
        assert_eq!(
            is_point_in_ellipse(&c, &r, FRAC_PI_2, &Point2::new(13.0, 10.0)),
            Location::Outside
        );
        // Unrotated, the same points classify the other way around.
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(10.0, 13.0)), Location::Outside);
        assert_eq!(is_point_in_ellipse(&c, &r, 0.0, &Point2::new(13.0, 10.0)), Location::Inside);
    }

    #[test]
    fn rotation_is_counter_clockwise_like_rect() {
        let c = Point2::new(0.0, 0.0);
        let radii = Vector2::new(4.0, 1.0);
        let size = Vector2::new(8.0, 2.0);
        // Major axis along (1, 1) after a counter-clockwise turn of pi/4.
        let along = Point2::new(2.0, 2.0);
        let across = Point2::new(2.0, -2.0);
        assert_eq!(is_point_in_ellipse(&c, &radii, FRAC_PI_4, &along), Location::Inside);
        assert_eq!(is_point_in_ellipse(&c, &radii, FRAC_PI_4, &across), Location::Outside);
        assert_eq!(is_point_in_rect_orientation(&c, &size, FRAC_PI_4, &along), Location::Inside);
        assert_eq!(is_point_in_rect_orientation(&c, &size, FRAC_PI_4, &across), Location::Outside);
    }

    #[test]
    fn zero_semi_axis_at_center_is_boundary() {
        let c = Point2::new(1.0, 1.0);
        let radii = Vector2::new(0.0, 1.0);
        assert_eq!(is_point_in_ellipse(&c, &radii, 0.0, &c), Location::OnBoundary);
    }

    #[test]
    fn circle_shaped_ellipse_matches_radius_test() {
        let c = Point2::new(0.0, 0.0);
        let r = Vector2::new(2.0, 2.0);
        for (x, y) in [(1.0, 1.0), (2.0, 0.0), (0.0, -2.0), (3.0, 0.5)] {
            let flat = is_point_in_ellipse(&c, &r, 0.0, &Point2::new(x, y));
            let round = is_point_in_radius(&Point3::origin(), 2.0, &Point3::new(x, y, 0.0));
            assert_eq!(flat, round, "({x}, {y})");
        }
    }

    #[test]
    fn center_is_inside() {
        let c = Point2::new(-1.0, 4.0);
        let r = Vector2::new(0.5, 3.0);
        assert_eq!(is_point_in_ellipse(&c, &r, 1.234, &c), Location::Inside);
    }
}
