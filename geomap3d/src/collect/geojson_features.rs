use geojson::{Feature, GeoJson, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geometric::bar::{DEFAULT_BAR_COLOR, DEFAULT_BAR_HEIGHT};
use crate::geometric::surface::{DEFAULT_SURFACE_COLOR, DEFAULT_SURFACE_OPACITY};
use crate::geometric::{Bar, Surface, SurfacePoint};
use crate::map::Map;

/// Which feature properties drive height, color, opacity and time
///
/// Properties not named here end up in the bar's `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoJsonOptions {
    pub height_key: String,
    pub color_key: String,
    pub opacity_key: String,
    pub time_key: String,
    pub default_height: f64,
    pub default_bar_color: String,
    pub default_surface_color: String,
}

impl Default for GeoJsonOptions {
    fn default() -> Self {
        GeoJsonOptions {
            height_key: "height".to_string(),
            color_key: "color".to_string(),
            opacity_key: "opacity".to_string(),
            time_key: "time".to_string(),
            default_height: DEFAULT_BAR_HEIGHT,
            default_bar_color: DEFAULT_BAR_COLOR.to_string(),
            default_surface_color: DEFAULT_SURFACE_COLOR.to_string(),
        }
    }
}

/// Numeric property; numeric strings such as `"2021"` are accepted too
fn number_property(properties: &JsonObject, key: &str) -> Option<f64> {
    match properties.get(key)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_property(properties: &JsonObject, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn ring_to_lon_lat(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[0], p[1]))
        .collect()
}

fn position_to_surface_point(position: &[f64]) -> Option<SurfacePoint> {
    match position {
        [lon, lat] => Some(SurfacePoint::new(*lon, *lat, 0.0)),
        [lon, lat, elevation, ..] => Some(SurfacePoint::new(*lon, *lat, *elevation)),
        _ => None,
    }
}

impl Map {
    /// Add every supported feature of a GeoJSON document
    ///
    /// Polygon and MultiPolygon exteriors become bars. Point, MultiPoint,
    /// LineString and MultiLineString geometries become surfaces, with the
    /// third coordinate as elevation. Other geometries are skipped. Returns
    /// the number of features added.
    pub fn add_geojson(&mut self, geojson: &GeoJson, options: &GeoJsonOptions) -> usize {
        match geojson {
            GeoJson::FeatureCollection(fc) => fc
                .features
                .iter()
                .map(|f| self.add_geojson_feature(f, options))
                .sum(),
            GeoJson::Feature(feature) => self.add_geojson_feature(feature, options),
            GeoJson::Geometry(geometry) => {
                self.add_geojson_geometry(geometry, &JsonObject::new(), options)
            }
        }
    }

    /// Parse a GeoJSON string and add its features
    pub fn add_geojson_str(&mut self, geojson: &str, options: &GeoJsonOptions) -> Result<usize> {
        let geojson: GeoJson = geojson.parse()?;
        Ok(self.add_geojson(&geojson, options))
    }

    fn add_geojson_feature(&mut self, feature: &Feature, options: &GeoJsonOptions) -> usize {
        let empty = JsonObject::new();
        let properties = feature.properties.as_ref().unwrap_or(&empty);
        match &feature.geometry {
            Some(geometry) => self.add_geojson_geometry(geometry, properties, options),
            None => {
                debug!(id = ?feature.id, "skipping feature without geometry");
                0
            }
        }
    }

    fn add_geojson_geometry(
        &mut self,
        geometry: &Geometry,
        properties: &JsonObject,
        options: &GeoJsonOptions,
    ) -> usize {
        match &geometry.value {
            Value::Polygon(rings) => {
                self.add_polygon_bar(rings, properties, options);
                1
            }
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    self.add_polygon_bar(rings, properties, options);
                }
                polygons.len()
            }
            Value::Point(position) => {
                self.add_position_surface(std::slice::from_ref(position), properties, options)
            }
            Value::MultiPoint(positions) | Value::LineString(positions) => {
                self.add_position_surface(positions, properties, options)
            }
            Value::MultiLineString(lines) => lines
                .iter()
                .map(|line| self.add_position_surface(line, properties, options))
                .sum(),
            Value::GeometryCollection(geometries) => geometries
                .iter()
                .map(|g| self.add_geojson_geometry(g, properties, options))
                .sum(),
        }
    }

    fn add_polygon_bar(
        &mut self,
        rings: &[Vec<Vec<f64>>],
        properties: &JsonObject,
        options: &GeoJsonOptions,
    ) {
        // Holes are not drawn; only the exterior ring is extruded
        let exterior = rings.first().map(|r| ring_to_lon_lat(r)).unwrap_or_default();

        let info: JsonObject = properties
            .iter()
            .filter(|(k, _)| {
                **k != options.height_key && **k != options.color_key && **k != options.time_key
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let height =
            number_property(properties, &options.height_key).unwrap_or(options.default_height);

        let bar = Bar::new(exterior)
            .with_height(height)
            .with_color(
                string_property(properties, &options.color_key)
                    .unwrap_or_else(|| options.default_bar_color.clone()),
            )
            .with_time(number_property(properties, &options.time_key).unwrap_or(0.0))
            .with_info(info);
        self.add_bar(bar);
    }

    fn add_position_surface(
        &mut self,
        positions: &[Vec<f64>],
        properties: &JsonObject,
        options: &GeoJsonOptions,
    ) -> usize {
        let points: Vec<SurfacePoint> = positions
            .iter()
            .filter_map(|p| position_to_surface_point(p))
            .collect();
        if points.is_empty() {
            debug!("skipping geometry without usable positions");
            return 0;
        }

        let surface = Surface::new(points)
            .with_color(
                string_property(properties, &options.color_key)
                    .unwrap_or_else(|| options.default_surface_color.clone()),
            )
            .with_opacity(
                number_property(properties, &options.opacity_key)
                    .unwrap_or(DEFAULT_SURFACE_OPACITY),
            )
            .with_time(number_property(properties, &options.time_key).unwrap_or(0.0));
        self.add_surface(surface);
        1
    }
}
