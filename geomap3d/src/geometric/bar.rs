use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value};

pub const DEFAULT_BAR_HEIGHT: f64 = 10.0;
pub const DEFAULT_BAR_COLOR: &str = "#ffffff";

/// Extruded shape: a lon/lat footprint raised to a given height
///
/// The footprint is kept exactly as supplied. Its order defines the polygon
/// winding the viewer uses, and it may be empty or unclosed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Footprint points, x = longitude, y = latitude
    pub footprint: Vec<Coord<f64>>,
    /// Extrusion height in scene units
    pub height: f64,
    pub color: String,
    /// Time marker used by the viewer's slider
    pub time: f64,
    /// Arbitrary metadata shown by the viewer on interaction
    pub info: JsonMap<String, Value>,
}

impl Bar {
    /// Create a bar with the default height, color and time
    pub fn new<I, C>(footprint: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord<f64>>,
    {
        Bar {
            footprint: footprint.into_iter().map(Into::into).collect(),
            height: DEFAULT_BAR_HEIGHT,
            color: DEFAULT_BAR_COLOR.to_string(),
            time: 0.0,
            info: JsonMap::new(),
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    pub fn with_info(mut self, info: JsonMap<String, Value>) -> Self {
        self.info = info;
        self
    }

    /// Add a single metadata entry
    pub fn insert_info(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.info.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.footprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprint.is_empty()
    }
}
