pub mod geojson_features;

pub use geojson_features::GeoJsonOptions;
