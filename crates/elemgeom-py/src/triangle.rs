//! Circumcircle and incircle bindings.

use crate::common::{map_geom_err, tuple3, vec3, Py3};
use elemgeom::triangle;
use pyo3::prelude::*;

#[pyfunction]
fn circumcenter_origin(a: Py3, b: Py3, c: Py3) -> PyResult<Py3> {
    triangle::circumcenter_origin(vec3(a), vec3(b), vec3(c))
        .map(tuple3)
        .map_err(map_geom_err)
}

#[pyfunction]
fn circumcenter_radius(a: Py3, b: Py3, c: Py3) -> PyResult<f64> {
    triangle::circumcenter_radius(vec3(a), vec3(b), vec3(c)).map_err(map_geom_err)
}

#[pyfunction]
fn incircle_origin(a: Py3, b: Py3, c: Py3) -> PyResult<Py3> {
    triangle::incircle_origin(vec3(a), vec3(b), vec3(c))
        .map(tuple3)
        .map_err(map_geom_err)
}

/// Radius from an incircle `center` and two triangle corners.
#[pyfunction]
fn incircle_radius(center: Py3, corner_a: Py3, corner_b: Py3) -> PyResult<f64> {
    triangle::incircle_radius(vec3(center), vec3(corner_a), vec3(corner_b)).map_err(map_geom_err)
}

/// Circumcircle as `(center, radius)`.
#[pyfunction]
fn circumcircle(a: Py3, b: Py3, c: Py3) -> PyResult<(Py3, f64)> {
    triangle::circumcircle(vec3(a), vec3(b), vec3(c))
        .map(|circle| (tuple3(circle.center), circle.radius))
        .map_err(map_geom_err)
}

/// Incircle as `(center, radius)`; collinear corners raise `ValueError`.
#[pyfunction]
fn incircle(a: Py3, b: Py3, c: Py3) -> PyResult<(Py3, f64)> {
    triangle::incircle(vec3(a), vec3(b), vec3(c))
        .map(|circle| (tuple3(circle.center), circle.radius))
        .map_err(map_geom_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(circumcenter_origin, m)?)?;
    m.add_function(wrap_pyfunction!(circumcenter_radius, m)?)?;
    m.add_function(wrap_pyfunction!(incircle_origin, m)?)?;
    m.add_function(wrap_pyfunction!(incircle_radius, m)?)?;
    m.add_function(wrap_pyfunction!(circumcircle, m)?)?;
    m.add_function(wrap_pyfunction!(incircle, m)?)?;
    Ok(())
}
