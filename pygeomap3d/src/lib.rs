use pyo3::prelude::*;

mod bindings;

use bindings::{PyBoundingBox, PyMap};

/// Python bindings for geomap3d
/// Interactive 3D maps from geographic bars and surfaces

#[pymodule]
fn pygeomap3d(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoundingBox>()?;
    m.add_class::<PyMap>()?;

    // Add aliases for Pythonic API (Map instead of PyMap)
    m.setattr("BoundingBox", m.getattr("PyBoundingBox")?)?;
    m.setattr("Map", m.getattr("PyMap")?)?;

    m.add(
        "__doc__",
        "Python bindings for geomap3d - interactive 3D maps from geographic bars and surfaces",
    )?;

    Ok(())
}
