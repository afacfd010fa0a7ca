use nalgebra::Vector3;

use super::{is_flat, Circle};
use crate::vecmath::{cross, length, length_squared};
use crate::GeomError;

/// Circumcenter `O` of triangle `(a, b, c)`:
///
/// `O = a + [ |ac|² (ab×ac)×ab + |ab|² (ac×ab)×ac ] / (2 |ab×ac|²)`
///
/// Degenerate when `|ab×ac|²` is not above `AREA_EPS · |ab|²|ac|²`.
pub fn circumcenter_origin(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> Result<Vector3<f64>, GeomError> {
    let ac = c - a;
    let ab = b - a;
    let ab_x_ac = cross(&ab, &ac);
    let ac_x_ab = -ab_x_ac;
    let area2 = length_squared(&ab_x_ac);
    if is_flat(area2, length_squared(&ab), length_squared(&ac)) {
        return Err(GeomError::degenerate_triangle(
            "edge vectors are parallel (|ab x ac| = 0)",
        ));
    }
    let to_center = (cross(&ab_x_ac, &ab) * length_squared(&ac)
        + cross(&ac_x_ab, &ac) * length_squared(&ab))
        / (2.0 * area2);
    Ok(a + to_center)
}

/// Circumradius `aa·bb·cc / sqrt((aa+bb+cc)(bb+cc-aa)(cc+aa-bb)(aa+bb-cc))`.
///
/// `aa = |a-b|`, `bb = |c-b|`, `cc = |a-c|`. The radicand is `16·area²`, which
/// is `4·|ab×ac|²`, so it goes through the same flatness test as
/// [`circumcenter_origin`] and both accept or reject a triangle together.
pub fn circumcenter_radius(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> Result<f64, GeomError> {
    let aa = length(&(a - b));
    let bb = length(&(c - b));
    let cc = length(&(a - c));
    let perimeter = aa + bb + cc;
    let radicand = perimeter * (bb + cc - aa) * (cc + aa - bb) * (aa + bb - cc);
    if is_flat(radicand / 4.0, aa * aa, cc * cc) {
        return Err(GeomError::degenerate_triangle(
            "Heron area below tolerance",
        ));
    }
    Ok(aa * bb * cc / radicand.sqrt())
}

/// Circumcenter and circumradius, each from its own formula.
pub fn circumcircle(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> Result<Circle, GeomError> {
    Ok(Circle {
        center: circumcenter_origin(a, b, c)?,
        radius: circumcenter_radius(a, b, c)?,
    })
}
