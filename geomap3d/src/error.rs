use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library
///
/// Geometry is never validated, so every variant here comes from the export
/// side (template lookup, sinks, serialization) or from GeoJSON ingestion.
#[derive(Debug, Error)]
pub enum Error {
    /// The viewer template could not be located
    #[error("resource not found: {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The host refused to open the written artifact
    #[error("could not reveal {location}: {reason}")]
    Reveal { location: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_message() {
        let err = Error::ResourceNotFound {
            path: PathBuf::from("templates/viewer.html"),
        };
        assert_eq!(
            err.to_string(),
            "resource not found: templates/viewer.html"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        let err = Error::io(
            "out.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("out.html"));
    }
}
