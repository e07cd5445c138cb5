//! Interactive 3D maps from geographic bars and surfaces
//!
//! Features are added to a [`Map`] in longitude/latitude, projected into a
//! fixed-size scene on every render and written into an HTML viewer with a
//! time slider.

pub mod collect;
pub mod commons;
pub mod config;
pub mod error;
pub mod export;
pub mod geo_core;
pub mod geometric;
pub mod map;
pub mod projection;

pub use collect::GeoJsonOptions;
pub use config::{ExportConfig, Interaction, ProjectionConfig};
pub use error::{Error, Result};
pub use export::Exporter;
pub use geo_core::BoundingBox;
pub use geometric::{Bar, Surface, SurfacePoint};
pub use map::Map;
pub use projection::Projection;
