use geo::Coord;

use crate::config::ProjectionConfig;
use crate::geo_core::BoundingBox;
use crate::geometric::{Bar, Surface, SurfacePoint};

/// Flat linear projection from lon/lat into scene coordinates
///
/// The envelope center maps to the origin and both axes share one zoom
/// factor taken from the larger of the two spans, so the aspect ratio of
/// the data is kept. A projection is derived from the bounds on every
/// render and holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: Coord<f64>,
    zoom: f64,
    exaggeration: f64,
}

impl Projection {
    /// Fit the default 1000-unit scene to the given bounds
    pub fn fit(bounds: &BoundingBox) -> Self {
        Self::fit_with(bounds, &ProjectionConfig::default())
    }

    pub fn fit_with(bounds: &BoundingBox, config: &ProjectionConfig) -> Self {
        // An empty map has negative spans, which also collapse to min_span
        let span = bounds
            .lat_span()
            .max(bounds.lon_span())
            .max(config.min_span);

        Projection {
            center: bounds.center(),
            zoom: config.scene_size / span,
            exaggeration: config.elevation_exaggeration,
        }
    }

    pub fn center(&self) -> Coord<f64> {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Project a (lon, lat) pair to scene (x, y)
    pub fn project_point(&self, point: Coord<f64>) -> [f64; 2] {
        [
            (point.x - self.center.x) * self.zoom,
            (point.y - self.center.y) * self.zoom,
        ]
    }

    /// Project an elevated point; z is scaled by the exaggeration only
    pub fn project_surface_point(&self, point: &SurfacePoint) -> [f64; 3] {
        let [x, y] = self.project_point(point.lon_lat());
        [x, y, point.elevation * self.exaggeration]
    }

    pub fn project_bar(&self, bar: &Bar) -> Vec<[f64; 2]> {
        bar.footprint
            .iter()
            .map(|p| self.project_point(*p))
            .collect()
    }

    pub fn project_surface(&self, surface: &Surface) -> Vec<[f64; 3]> {
        surface
            .points
            .iter()
            .map(|p| self.project_surface_point(p))
            .collect()
    }
}
