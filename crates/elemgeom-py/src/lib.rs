//! PyO3 bindings for the `elemgeom` per-element functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as
//!   `(x, y, z)` tuples, results come back as tuples or floats.
//! - Degenerate input raises `ValueError` with the `GeomError` message.

use pyo3::prelude::*;

mod common;
mod curve;
mod triangle;

#[pymodule]
fn elemgeom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", elemgeom::VERSION)?;
    curve::register(m)?;
    triangle::register(m)?;
    Ok(())
}
