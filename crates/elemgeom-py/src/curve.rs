//! Curve normal/angle and peak/valley bindings.

use crate::common::{map_geom_err, tuple3, vec3, Py3};
use elemgeom::curve::{curve_point_angle, curve_point_normal, CurveEnd};
use elemgeom::predicates;
use elemgeom::vecmath::Axis;
use nalgebra::Vector3;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn neighbour_vecs(neighbours: Vec<Py3>) -> Vec<Vector3<f64>> {
    neighbours.into_iter().map(vec3).collect()
}

/// Normal of a curve point; `first` selects the end for one-neighbour points.
#[pyfunction]
#[pyo3(name = "curve_point_normal", signature = (p, neighbours, first = true))]
fn curve_point_normal_py(p: Py3, neighbours: Vec<Py3>, first: bool) -> PyResult<Py3> {
    let end = if first { CurveEnd::First } else { CurveEnd::Last };
    curve_point_normal(vec3(p), &neighbour_vecs(neighbours), end)
        .map(tuple3)
        .map_err(map_geom_err)
}

/// Turning angle in radians; 0.0 for one-neighbour points.
#[pyfunction]
#[pyo3(name = "curve_point_angle")]
fn curve_point_angle_py(p: Py3, neighbours: Vec<Py3>) -> PyResult<f64> {
    curve_point_angle(vec3(p), &neighbour_vecs(neighbours)).map_err(map_geom_err)
}

#[pyfunction]
fn curve_peak(a: f64, b: f64, c: f64) -> bool {
    predicates::curve_peak(a, b, c)
}

#[pyfunction]
fn curve_valley(a: f64, b: f64, c: f64) -> bool {
    predicates::curve_valley(a, b, c)
}

/// Strict local maximum of one coordinate across `(a, b, c)`.
#[pyfunction]
fn curve_peak_axis(a: Py3, b: Py3, c: Py3, axis: &str) -> PyResult<bool> {
    let axis: Axis = axis.parse().map_err(PyValueError::new_err)?;
    Ok(predicates::curve_peak_axis(&vec3(a), &vec3(b), &vec3(c), axis))
}

/// Strict local minimum of one coordinate across `(a, b, c)`.
#[pyfunction]
fn curve_valley_axis(a: Py3, b: Py3, c: Py3, axis: &str) -> PyResult<bool> {
    let axis: Axis = axis.parse().map_err(PyValueError::new_err)?;
    Ok(predicates::curve_valley_axis(&vec3(a), &vec3(b), &vec3(c), axis))
}

#[pyfunction]
fn curve_peak_x(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_peak_x(&vec3(a), &vec3(b), &vec3(c))
}

#[pyfunction]
fn curve_peak_y(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_peak_y(&vec3(a), &vec3(b), &vec3(c))
}

#[pyfunction]
fn curve_peak_z(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_peak_z(&vec3(a), &vec3(b), &vec3(c))
}

#[pyfunction]
fn curve_valley_x(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_valley_x(&vec3(a), &vec3(b), &vec3(c))
}

#[pyfunction]
fn curve_valley_y(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_valley_y(&vec3(a), &vec3(b), &vec3(c))
}

#[pyfunction]
fn curve_valley_z(a: Py3, b: Py3, c: Py3) -> bool {
    predicates::curve_valley_z(&vec3(a), &vec3(b), &vec3(c))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(curve_point_normal_py, m)?)?;
    m.add_function(wrap_pyfunction!(curve_point_angle_py, m)?)?;
    m.add_function(wrap_pyfunction!(curve_peak, m)?)?;
    m.add_function(wrap_pyfunction!(curve_valley, m)?)?;
    m.add_function(wrap_pyfunction!(curve_peak_axis, m)?)?;
    m.add_function(wrap_pyfunction!(curve_valley_axis, m)?)?;
    m.add_function(wrap_pyfunction!(curve_peak_x, m)?)?;
    m.add_function(wrap_pyfunction!(curve_peak_y, m)?)?;
    m.add_function(wrap_pyfunction!(curve_peak_z, m)?)?;
    m.add_function(wrap_pyfunction!(curve_valley_x, m)?)?;
    m.add_function(wrap_pyfunction!(curve_valley_y, m)?)?;
    m.add_function(wrap_pyfunction!(curve_valley_z, m)?)?;
    Ok(())
}
