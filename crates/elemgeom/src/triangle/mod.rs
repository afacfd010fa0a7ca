//! Intrinsic circles of a triangle.
//!
//! - Circumcircle: center via the cross-product formula, radius via Heron's
//!   form `abc / 4A`. The two are computed independently and each rejects
//!   degenerate triangles on its own, against the same relative threshold.
//! - Incircle: center as the side-length weighted vertex average, radius from
//!   the center and two corners.
//!
//! Collinear or zero-area triangles return `GeomError::DegenerateTriangle`.

mod circum;
mod incircle;

pub use circum::{circumcenter_origin, circumcenter_radius, circumcircle};
pub use incircle::{incircle, incircle_origin, incircle_radius};

use nalgebra::Vector3;

use crate::cfg::AREA_EPS;

/// Flatness test shared by the triangle routines: `|u × v|²` (twice the
/// area, squared) must exceed `AREA_EPS · |u|²|v|²`, i.e. the squared sine of
/// the angle between `u` and `v` must exceed `AREA_EPS`.
pub(crate) fn is_flat(cross_sq: f64, u_sq: f64, v_sq: f64) -> bool {
    !(cross_sq > AREA_EPS * u_sq * v_sq)
}

/// Center and radius of a circle in R^3 (its plane is implied by the triangle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector3<f64>,
    pub radius: f64,
}

#[cfg(test)]
mod tests;
