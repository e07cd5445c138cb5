// Python bindings module
// Each file contains one or more PyO3 #[pyclass] definitions

pub mod bounding_box;
pub mod map;

pub use bounding_box::PyBoundingBox;
pub use map::PyMap;

use geomap3d::Error;
use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::PyErr;

/// Map library errors onto the closest Python exception
pub(crate) fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::ResourceNotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
        Error::Io { .. } | Error::Reveal { .. } => PyIOError::new_err(err.to_string()),
        Error::Json(_) | Error::GeoJson(_) => PyValueError::new_err(err.to_string()),
    }
}
