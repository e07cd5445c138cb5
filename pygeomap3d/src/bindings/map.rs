use geomap3d::{Bar, ExportConfig, Exporter, GeoJsonOptions, Interaction, Map, Surface};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::bindings::bounding_box::PyBoundingBox;
use crate::bindings::to_py_err;

fn to_lon_lat(coords: Vec<Vec<f64>>) -> PyResult<Vec<(f64, f64)>> {
    coords
        .into_iter()
        .map(|p| match p.as_slice() {
            [lon, lat, ..] => Ok((*lon, *lat)),
            _ => Err(PyValueError::new_err(
                "each coordinate needs at least (lon, lat)",
            )),
        })
        .collect()
}

fn to_lon_lat_elevation(points: Vec<Vec<f64>>) -> PyResult<Vec<(f64, f64, f64)>> {
    points
        .into_iter()
        .map(|p| match p.as_slice() {
            [lon, lat, elevation, ..] => Ok((*lon, *lat, *elevation)),
            _ => Err(PyValueError::new_err(
                "each surface point needs (lon, lat, elevation)",
            )),
        })
        .collect()
}

/// Convert a Python dict to a JSON object through the json module
fn dict_to_json(
    py: Python<'_>,
    info: &Bound<'_, PyDict>,
) -> PyResult<serde_json::Map<String, serde_json::Value>> {
    let text: String = py
        .import("json")?
        .call_method1("dumps", (info,))?
        .extract()?;
    serde_json::from_str(&text)
        .map_err(|e| PyValueError::new_err(format!("info is not JSON serializable: {}", e)))
}

/// Map Python binding (exposed as Map to match the Python API)
#[pyclass]
pub struct PyMap {
    inner: Map,
}

#[pymethods]
impl PyMap {
    #[new]
    fn new() -> Self {
        PyMap { inner: Map::new() }
    }

    /// Add an extruded shape from a list of (lon, lat) pairs
    #[pyo3(signature = (coords, height = 10.0, color = "#ffffff", time = 0.0, info = None))]
    fn add_data(
        &mut self,
        py: Python<'_>,
        coords: Vec<Vec<f64>>,
        height: f64,
        color: &str,
        time: f64,
        info: Option<Bound<'_, PyDict>>,
    ) -> PyResult<()> {
        let mut bar = Bar::new(to_lon_lat(coords)?)
            .with_height(height)
            .with_color(color)
            .with_time(time);
        if let Some(info) = info {
            bar = bar.with_info(dict_to_json(py, &info)?);
        }
        self.inner.add_bar(bar);
        Ok(())
    }

    /// Add a surface from a list of (lon, lat, elevation) points
    #[pyo3(signature = (points, color = "#00ff88", opacity = 0.6, time = 0.0))]
    fn add_surface(
        &mut self,
        points: Vec<Vec<f64>>,
        color: &str,
        opacity: f64,
        time: f64,
    ) -> PyResult<()> {
        let surface = Surface::new(to_lon_lat_elevation(points)?)
            .with_color(color)
            .with_opacity(opacity)
            .with_time(time);
        self.inner.add_surface(surface);
        Ok(())
    }

    /// Add the features of a GeoJSON string; returns how many were added
    fn add_geojson(&mut self, geojson: &str) -> PyResult<usize> {
        self.inner
            .add_geojson_str(geojson, &GeoJsonOptions::default())
            .map_err(to_py_err)
    }

    /// Current lon/lat envelope
    #[getter]
    fn bounds(&self) -> PyBoundingBox {
        PyBoundingBox {
            inner: *self.inner.bounds(),
        }
    }

    /// Sorted distinct time markers
    #[getter]
    fn time_steps(&self) -> Vec<f64> {
        self.inner.time_steps().sorted()
    }

    /// Viewer payload as a JSON string
    fn render_json(&self) -> PyResult<String> {
        self.inner.render().to_json().map_err(to_py_err)
    }

    /// Write the interactive map and open it
    #[pyo3(signature = (filename = "researcher_map.html", interaction = "hover", open_browser = true, template = None))]
    fn show(
        &self,
        filename: &str,
        interaction: &str,
        open_browser: bool,
        template: Option<String>,
    ) -> PyResult<String> {
        let interaction: Interaction = interaction.parse().map_err(PyValueError::new_err)?;
        let mut config = ExportConfig::default()
            .with_output_path(filename)
            .with_interaction(interaction)
            .with_open_browser(open_browser);
        if let Some(template) = template {
            config = config.with_template_path(template);
        }

        Exporter::new(config).show(&self.inner).map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}
