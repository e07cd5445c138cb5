use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};

use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::export::color::ColorNormalizer;
use crate::map::Map;
use crate::projection::Projection;

/// A bar as the viewer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Projected footprint, same length and order as the input
    pub coords: Vec<[f64; 2]>,
    pub height: f64,
    pub color: String,
    pub time: f64,
    pub info: JsonMap<String, Value>,
}

/// A surface as the viewer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    pub projected: Vec<[f64; 3]>,
    pub color: String,
    pub opacity: f64,
    pub time: f64,
}

/// Payload substituted into the viewer template
///
/// Field names are part of the viewer contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub shapes: Vec<ShapeRecord>,
    pub surfaces: Vec<SurfaceRecord>,
    /// Distinct time markers, ascending
    pub time_steps: Vec<f64>,
    /// `time_steps.len() - 1`, or -1 without any marker
    pub max_time_index: i64,
}

impl MapData {
    /// Project every feature of `map` against its current bounds
    pub fn build(map: &Map, config: &ProjectionConfig) -> Self {
        let projection = Projection::fit_with(map.bounds(), config);

        let shapes = map
            .bars()
            .iter()
            .map(|bar| ShapeRecord {
                coords: projection.project_bar(bar),
                height: bar.height,
                color: bar.color.clone(),
                time: bar.time,
                info: bar.info.clone(),
            })
            .collect();

        let surfaces = map
            .surfaces()
            .iter()
            .map(|surface| SurfaceRecord {
                projected: projection.project_surface(surface),
                color: surface.color.clone(),
                opacity: surface.opacity,
                time: surface.time,
            })
            .collect();

        let time_steps = map.time_steps().sorted();
        let max_time_index = time_steps.len() as i64 - 1;

        MapData {
            shapes,
            surfaces,
            time_steps,
            max_time_index,
        }
    }

    /// Rewrite every color through the given normalizer
    pub fn normalize_colors(&mut self, normalizer: &dyn ColorNormalizer) {
        for shape in &mut self.shapes {
            shape.color = normalizer.normalize(&shape.color);
        }
        for surface in &mut self.surfaces {
            surface.color = normalizer.normalize(&surface.color);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
