use nalgebra::Vector3;

use super::{is_flat, Circle};
use crate::cfg::NORM_EPS;
use crate::vecmath::{cross, length, length_squared};
use crate::GeomError;

/// Incircle center: vertices weighted by the length of the opposite side,
/// `(aa·a + bb·b + cc·c) / (aa+bb+cc)` with `aa=|b-c|, bb=|a-c|, cc=|a-b|`.
///
/// Only a zero perimeter (all corners coincident) is rejected; a collinear
/// triangle still yields a point on its segment.
pub fn incircle_origin(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> Result<Vector3<f64>, GeomError> {
    let aa = length(&(b - c));
    let bb = length(&(a - c));
    let cc = length(&(a - b));
    let perimeter = aa + bb + cc;
    if !(perimeter > NORM_EPS) {
        return Err(GeomError::degenerate_triangle("zero perimeter"));
    }
    Ok((a * aa + b * bb + c * cc) / perimeter)
}

/// Incircle radius from an already computed `center` and two triangle corners.
///
/// Heron's area of `(center, corner_a, corner_b)` divided by half of
/// `|corner_a - corner_b|`, which is the distance from `center` to the line
/// through the two corners. Any two corners of the triangle give the same
/// value when `center` is the incenter.
///
/// A zero or negative radicand is an error, including a `center` on that
/// line; the test is the relative one used by the circumcircle.
pub fn incircle_radius(
    center: Vector3<f64>,
    corner_a: Vector3<f64>,
    corner_b: Vector3<f64>,
) -> Result<f64, GeomError> {
    let a = length(&(center - corner_a));
    let b = length(&(corner_a - corner_b));
    let c = length(&(corner_b - center));
    if !(b > NORM_EPS) {
        return Err(GeomError::degenerate_triangle("coincident corners"));
    }
    let s = (a + b + c) / 2.0;
    let radicand = s * (s - a) * (s - b) * (s - c);
    // 16·area² = 4·|u×v|² with u, v the sides meeting at `corner_a`.
    if is_flat(4.0 * radicand, a * a, b * b) {
        return Err(GeomError::degenerate_triangle(
            "Heron area below tolerance",
        ));
    }
    Ok(radicand.sqrt() / (0.5 * b))
}

/// Incircle center and radius of `(a, b, c)`.
///
/// Unlike `incircle_origin` alone, collinear corners are rejected here.
pub fn incircle(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Result<Circle, GeomError> {
    let (ab, ac) = (b - a, c - a);
    if is_flat(length_squared(&cross(&ab, &ac)), length_squared(&ab), length_squared(&ac)) {
        return Err(GeomError::degenerate_triangle("collinear corners"));
    }
    let center = incircle_origin(a, b, c)?;
    Ok(Circle {
        center,
        radius: incircle_radius(center, a, b)?,
    })
}
