//! Differential estimates on open polylines.
//!
//! - `curve_point_normal`: normal from the two incident edges at an interior
//!   point, or a 90° rotation of the tangent about x at either end.
//! - `curve_point_angle`: angle between the incident edges, `0.0` at the ends.
//!
//! Both read only the point and its neighbour positions, in curve traversal
//! order (previous, next).

mod estimate;

pub use estimate::{curve_point_angle, curve_point_normal};

/// Which end of an open curve a one-neighbour point sits on.
///
/// Only consulted for boundary points; interior points ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveEnd {
    First,
    Last,
}

impl CurveEnd {
    /// Point 0 is the first point; any other one-neighbour point is the last.
    #[inline]
    pub fn from_ptnum(ptnum: usize) -> Self {
        if ptnum == 0 {
            CurveEnd::First
        } else {
            CurveEnd::Last
        }
    }
}
