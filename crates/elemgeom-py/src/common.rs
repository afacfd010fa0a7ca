use elemgeom::GeomError;
use nalgebra::Vector3;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type Py3 = (f64, f64, f64);

#[inline]
pub fn vec3(p: Py3) -> Vector3<f64> {
    Vector3::new(p.0, p.1, p.2)
}

#[inline]
pub fn tuple3(v: Vector3<f64>) -> Py3 {
    (v.x, v.y, v.z)
}

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
