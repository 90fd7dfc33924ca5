pub mod measure;
pub mod orientation_2d;
pub mod radial;
pub mod rect_2d;
pub mod triangle_2d;

use std::ops::{Mul, Neg};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Absolute tolerance for the few comparisons that are allowed to be approximate.
pub const TOLERANCE: f64 = 1e-10;

/// Relative tolerance used by the area-sum triangle test.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Sign of an orientation determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Classifies a raw determinant. Only an exact `0.0` maps to [`Sign::Zero`].
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Positive,
            _ => Self::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

impl From<Sign> for i32 {
    fn from(sign: Sign) -> Self {
        sign.to_i32()
    }
}

/// Where a query point lies relative to a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Outside = -1,
    OnBoundary = 0,
    Inside = 1,
}

impl Location {
    /// `-1` outside, `0` on the boundary, `1` inside.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// `true` for [`Location::Inside`] and [`Location::OnBoundary`].
    #[must_use]
    pub fn is_inside_or_on_boundary(self) -> bool {
        self != Self::Outside
    }
}

impl From<Location> for i32 {
    fn from(location: Location) -> Self {
        location.to_i32()
    }
}

/// Three-way classification of `value` against an exact `threshold`:
/// below is inside, above is outside, equal is on the boundary.
pub(crate) fn locate_below(value: f64, threshold: f64) -> Location {
    if value < threshold {
        Location::Inside
    } else if value > threshold {
        Location::Outside
    } else {
        Location::OnBoundary
    }
}
