use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Interaction, TEMPLATE_ENV};
use crate::error::{Error, Result};

/// Token replaced by the serialized map payload
pub const MAP_DATA_PLACEHOLDER: &str = "{{ MAP_DATA }}";

/// Token replaced by the JSON string of the interaction mode
pub const INTERACTION_PLACEHOLDER: &str = "{{ INTERACTION }}";

/// Viewer compiled into the crate
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/viewer.html");

/// Static HTML document with placeholder tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    path: Option<PathBuf>,
}

impl Template {
    /// Wrap an in-memory template
    pub fn new(source: impl Into<String>) -> Self {
        Template {
            source: source.into(),
            path: None,
        }
    }

    /// Read a template file, failing with `ResourceNotFound` when absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ResourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Template {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// The viewer compiled into the crate
    pub fn bundled() -> Self {
        Template::new(BUNDLED_TEMPLATE)
    }

    /// Find the viewer template
    ///
    /// An explicit path, then `GEOMAP3D_TEMPLATE`, then the bundled viewer.
    /// A path given either way must exist.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Template::load(path);
        }
        match env::var_os(TEMPLATE_ENV) {
            Some(path) => Template::load(PathBuf::from(path)),
            None => Ok(Template::bundled()),
        }
    }

    /// Where the template was read from, if it came from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute the payload and interaction mode into the template
    ///
    /// The interaction token is replaced first so that a payload which
    /// happens to contain that token is left intact.
    pub fn fill(&self, map_data_json: &str, interaction: Interaction) -> String {
        let interaction_json = format!("\"{}\"", interaction.as_str());
        self.source
            .replace(INTERACTION_PLACEHOLDER, &interaction_json)
            .replace(MAP_DATA_PLACEHOLDER, map_data_json)
    }
}
