//! Vector primitives over `Vector3<f64>`.
//!
//! Most arithmetic is nalgebra's operators; the named helpers exist so the
//! curve and triangle formulas read like their textbook form, and so that
//! normalization has one explicit policy: a vector shorter than
//! [`NORM_EPS`](crate::cfg::NORM_EPS) is rejected with
//! [`GeomError::DegenerateVector`] instead of producing NaN.

use std::str::FromStr;

use nalgebra::Vector3;

use crate::cfg::NORM_EPS;
use crate::GeomError;

/// Coordinate axis selector for per-axis predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Read this axis' coordinate of `v`.
    #[inline]
    pub fn of(self, v: &Vector3<f64>) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    /// `"x"`, `"y"` or `"z"`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(format!("unknown axis {s:?}, expected x, y or z")),
        }
    }
}

#[inline]
pub fn add(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a + b
}

#[inline]
pub fn subtract(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a - b
}

#[inline]
pub fn scale(v: &Vector3<f64>, s: f64) -> Vector3<f64> {
    v * s
}

#[inline]
pub fn dot(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}

#[inline]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}

#[inline]
pub fn length(v: &Vector3<f64>) -> f64 {
    v.norm()
}

#[inline]
pub fn length_squared(v: &Vector3<f64>) -> f64 {
    v.norm_squared()
}

/// Unit vector along `v`, or `DegenerateVector` if `|v| <= NORM_EPS` (or not finite).
#[inline]
pub fn normalize(v: &Vector3<f64>) -> Result<Vector3<f64>, GeomError> {
    let n = v.norm();
    if !n.is_finite() || n <= NORM_EPS {
        return Err(GeomError::DegenerateVector);
    }
    Ok(v / n)
}

/// `acos` with its argument clamped to `[-1, 1]`.
///
/// Dot products of unit vectors can overshoot by an ulp or two.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
