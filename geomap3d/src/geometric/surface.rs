use geo::Coord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SURFACE_COLOR: &str = "#00ff88";
pub const DEFAULT_SURFACE_OPACITY: f64 = 0.6;

/// A single surface vertex: position plus elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub lon: f64,
    pub lat: f64,
    pub elevation: f64,
}

impl SurfacePoint {
    pub fn new(lon: f64, lat: f64, elevation: f64) -> Self {
        SurfacePoint {
            lon,
            lat,
            elevation,
        }
    }

    /// Planar part of the point; elevation never feeds the bounds
    pub fn lon_lat(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<(f64, f64, f64)> for SurfacePoint {
    fn from((lon, lat, elevation): (f64, f64, f64)) -> Self {
        SurfacePoint::new(lon, lat, elevation)
    }
}

impl From<[f64; 3]> for SurfacePoint {
    fn from([lon, lat, elevation]: [f64; 3]) -> Self {
        SurfacePoint::new(lon, lat, elevation)
    }
}

/// Flat or sloped mesh drawn through a list of elevated points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub points: Vec<SurfacePoint>,
    pub color: String,
    /// Expected in [0, 1] but not clamped
    pub opacity: f64,
    pub time: f64,
}

impl Surface {
    /// Create a surface with the default color, opacity and time
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<SurfacePoint>,
    {
        Surface {
            points: points.into_iter().map(Into::into).collect(),
            color: DEFAULT_SURFACE_COLOR.to_string(),
            opacity: DEFAULT_SURFACE_OPACITY,
            time: 0.0,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Iterate over the (lon, lat) part of every point
    pub fn footprint(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.points.iter().map(SurfacePoint::lon_lat)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_new_defaults() {
        let surface = Surface::new(vec![(0.0, 0.0, 1.0), (1.0, 1.0, 2.0)]);
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.color, "#00ff88");
        assert_eq!(surface.opacity, 0.6);
        assert_eq!(surface.time, 0.0);
    }

    #[test]
    fn test_surface_from_arrays() {
        let surface = Surface::new([[1.0, 2.0, 3.0]]).with_opacity(1.5).with_time(7.0);
        assert_eq!(surface.points[0], SurfacePoint::new(1.0, 2.0, 3.0));
        // Out of range opacity is not clamped
        assert_eq!(surface.opacity, 1.5);
        assert_eq!(surface.time, 7.0);
    }

    #[test]
    fn test_footprint_drops_elevation() {
        let surface = Surface::new(vec![(5.0, 6.0, 1000.0)]);
        let footprint: Vec<Coord<f64>> = surface.footprint().collect();
        assert_eq!(footprint, vec![Coord { x: 5.0, y: 6.0 }]);
    }
}
