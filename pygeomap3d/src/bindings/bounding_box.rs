use geomap3d::BoundingBox;
use pyo3::prelude::*;

/// BoundingBox Python binding
#[pyclass]
#[derive(Clone)]
pub struct PyBoundingBox {
    pub(crate) inner: BoundingBox, // pub(crate) allows access from other modules in the same crate
}

#[pymethods]
impl PyBoundingBox {
    #[new]
    fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        PyBoundingBox {
            inner: BoundingBox::new(min_x, min_y, max_x, max_y),
        }
    }

    #[getter]
    fn min_lon(&self) -> f64 {
        self.inner.min_x
    }

    #[getter]
    fn min_lat(&self) -> f64 {
        self.inner.min_y
    }

    #[getter]
    fn max_lon(&self) -> f64 {
        self.inner.max_x
    }

    #[getter]
    fn max_lat(&self) -> f64 {
        self.inner.max_y
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoundingBox(min_lon={}, min_lat={}, max_lon={}, max_lat={})",
            self.inner.min_x, self.inner.min_y, self.inner.max_x, self.inner.max_y
        )
    }
}
