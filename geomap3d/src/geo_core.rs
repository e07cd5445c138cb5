use geo::Coord;
use serde::{Deserialize, Serialize};

/// Running envelope over every (lon, lat) pair added to a map
///
/// Starts inverted (`min > max` on both axes) so the first point always
/// replaces all four fields. After one point, `min_x <= max_x` and
/// `min_y <= max_y` hold for any non-NaN input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64, // min longitude
    pub min_y: f64, // min latitude
    pub max_x: f64, // max longitude
    pub max_y: f64, // max latitude
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The inverted envelope a fresh map starts with
    pub fn empty() -> Self {
        BoundingBox::new(180.0, 90.0, -180.0, -90.0)
    }

    /// Expand the envelope to cover a single point
    pub fn extend(&mut self, point: Coord<f64>) {
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
    }

    /// Expand the envelope to cover every point of a sequence
    ///
    /// An empty sequence leaves the envelope untouched.
    pub fn update<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        for point in points {
            self.extend(point);
        }
    }

    /// True while no point has been seen yet
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn lon_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn lat_span(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the envelope as (lon, lat)
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox::empty()
    }
}
