//! Per-element geometry for curves and triangle meshes.
//!
//! Every function here is evaluated once per point or primitive by a host
//! geometry environment. Calls are pure: they read a small local neighbourhood
//! (a point and at most two neighbours, or three triangle corners) and return a
//! fresh vector or scalar.
//!
//! Layout
//! - `vecmath`: named vector helpers and the normalization policy.
//! - `curve`: normal and turning-angle estimates on open polylines.
//! - `triangle`: circumcircle and incircle center/radius.
//! - `predicates`: strict peak/valley comparators.
//! - `host`: injected neighbour/position/texture services and batch evaluation.
//!
//! Degenerate input (zero-length vectors, collinear triangles) is reported as
//! [`GeomError`]; nothing in this crate returns a silent NaN.

pub mod cfg;
pub mod curve;
mod error;
pub mod host;
pub mod predicates;
pub mod triangle;
pub mod vecmath;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::{curve_point_angle, curve_point_normal, CurveEnd};
    pub use crate::host::{
        evaluate_curve, evaluate_triangles, point_angle, point_normal, texture_to_vertex_color,
        NeighbourProvider, PointSample, Polyline, PositionProvider, TextureSampler,
        TriangleSample,
    };
    pub use crate::predicates::{
        curve_peak, curve_peak_axis, curve_peak_x, curve_peak_y, curve_peak_z, curve_valley,
        curve_valley_axis, curve_valley_x, curve_valley_y, curve_valley_z,
    };
    pub use crate::triangle::{
        circumcenter_origin, circumcenter_radius, incircle_origin, incircle_radius,
    };
    pub use crate::vecmath::Axis;
    pub use crate::GeomError;
    pub use nalgebra::Vector3 as Vec3;
}
