//! Peak/valley comparators for three consecutive curve samples.
//!
//! `b` is the middle sample, `a` and `c` its neighbours. Comparisons are
//! strict and exact: ties are neither peaks nor valleys.

use nalgebra::Vector3;

use crate::vecmath::Axis;

/// True iff `b` is strictly greater than both neighbours.
#[inline]
pub fn curve_peak(a: f64, b: f64, c: f64) -> bool {
    a < b && c < b
}

/// True iff `b` is strictly less than both neighbours.
#[inline]
pub fn curve_valley(a: f64, b: f64, c: f64) -> bool {
    a > b && c > b
}

/// Peak test on a single coordinate of three points.
#[inline]
pub fn curve_peak_axis(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, axis: Axis) -> bool {
    curve_peak(axis.of(a), axis.of(b), axis.of(c))
}

/// Valley test on a single coordinate of three points.
#[inline]
pub fn curve_valley_axis(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, axis: Axis) -> bool {
    curve_valley(axis.of(a), axis.of(b), axis.of(c))
}

pub fn curve_peak_x(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_peak_axis(a, b, c, Axis::X)
}

pub fn curve_peak_y(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_peak_axis(a, b, c, Axis::Y)
}

pub fn curve_peak_z(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_peak_axis(a, b, c, Axis::Z)
}

pub fn curve_valley_x(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_valley_axis(a, b, c, Axis::X)
}

pub fn curve_valley_y(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_valley_axis(a, b, c, Axis::Y)
}

pub fn curve_valley_z(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> bool {
    curve_valley_axis(a, b, c, Axis::Z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn scalar_peak_and_valley() {
        assert!(curve_peak(1.0, 3.0, 2.0));
        assert!(!curve_peak(3.0, 1.0, 2.0));
        assert!(curve_valley(3.0, 1.0, 2.0));
        assert!(!curve_valley(1.0, 3.0, 2.0));
    }

    #[test]
    fn ties_are_neither() {
        assert!(!curve_peak(2.0, 2.0, 3.0));
        assert!(!curve_peak(1.0, 2.0, 2.0));
        assert!(!curve_valley(2.0, 2.0, 1.0));
        assert!(!curve_valley(3.0, 2.0, 2.0));
        assert!(!curve_peak(f64::NAN, 1.0, 0.0));
    }

    #[test]
    fn per_axis_reads_only_its_coordinate() {
        // x rises then falls, y falls then rises, z is flat.
        let a = vector![0.0, 5.0, 1.0];
        let b = vector![2.0, 1.0, 1.0];
        let c = vector![1.0, 4.0, 1.0];
        assert!(curve_peak_x(&a, &b, &c));
        assert!(!curve_valley_x(&a, &b, &c));
        assert!(curve_valley_y(&a, &b, &c));
        assert!(!curve_peak_y(&a, &b, &c));
        assert!(!curve_peak_z(&a, &b, &c));
        assert!(!curve_valley_z(&a, &b, &c));
    }

    #[test]
    fn x_peak_compares_a_against_b() {
        // a.x > b.x must not count as a peak even though c.x < b.x.
        let a = vector![3.0, 0.0, 0.0];
        let b = vector![2.0, 0.0, 0.0];
        let c = vector![1.0, 0.0, 0.0];
        assert!(!curve_peak_x(&a, &b, &c));
        for axis in Axis::ALL {
            assert!(!curve_peak_axis(&a, &b, &c, axis));
        }
    }
}
