use nalgebra::Vector3;

use super::CurveEnd;
use crate::vecmath::{acos_clamped, dot, normalize};
use crate::GeomError;

/// Estimated unit normal of a curve point.
///
/// Interior point (two neighbours `a`, `c`): with `ba`, `bc` the unit
/// directions from `p` towards each neighbour, the normal is
/// `normalize(p - (a + (bc - ba) / 2))`, i.e. it faces away from the bend.
///
/// Boundary point (one neighbour `b`): the edge `ab = p - b` is rotated by 90°
/// about the x axis, `(ab.x, -ab.z, ab.y)` at the first point and
/// `(ab.x, ab.z, -ab.y)` at the last, so the two ends mirror each other.
///
/// More than two neighbours: the first two are used.
///
/// Errors: `NoNeighbours` for an empty slice, `DegenerateVector` whenever a
/// direction or the result has zero length (coincident points, or a straight
/// interior run with unit spacing).
pub fn curve_point_normal(
    p: Vector3<f64>,
    neighbours: &[Vector3<f64>],
    end: CurveEnd,
) -> Result<Vector3<f64>, GeomError> {
    match neighbours {
        [] => Err(GeomError::NoNeighbours),
        [b] => {
            let ab = p - b;
            let n = match end {
                CurveEnd::First => Vector3::new(ab.x, -ab.z, ab.y),
                CurveEnd::Last => Vector3::new(ab.x, ab.z, -ab.y),
            };
            normalize(&n)
        }
        [a, c, ..] => {
            let ba = normalize(&(a - p))?;
            let bc = normalize(&(c - p))?;
            let ac_half = (bc - ba) * 0.5;
            normalize(&(p - (a + ac_half)))
        }
    }
}

/// Angle in radians between the two incident edges at `p`, in `[0, π]`.
///
/// Returns exactly `0.0` for boundary points (fewer than two neighbours).
/// A neighbour coincident with `p` is `DegenerateVector`.
pub fn curve_point_angle(p: Vector3<f64>, neighbours: &[Vector3<f64>]) -> Result<f64, GeomError> {
    let [a, c, ..] = neighbours else {
        return Ok(0.0);
    };
    let ba = normalize(&(a - p))?;
    let bc = normalize(&(c - p))?;
    Ok(acos_clamped(dot(&ba, &bc)))
}
