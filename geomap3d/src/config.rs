use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Width of the scene the envelope is fitted into; must match the viewer
pub const SCENE_SIZE: f64 = 1000.0;

/// Multiplier applied to surface elevations
pub const ELEVATION_EXAGGERATION: f64 = 2.0;

/// Smallest span used for zoom, avoids dividing by zero
pub const MIN_SPAN: f64 = 0.00001;

pub const DEFAULT_OUTPUT_PATH: &str = "researcher_map.html";

/// Environment variable pointing at a viewer template
pub const TEMPLATE_ENV: &str = "GEOMAP3D_TEMPLATE";

/// Environment variable overriding the output file
pub const OUTPUT_ENV: &str = "GEOMAP3D_OUTPUT";

/// Constants of the flat linear projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub scene_size: f64,
    pub elevation_exaggeration: f64,
    pub min_span: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            scene_size: SCENE_SIZE,
            elevation_exaggeration: ELEVATION_EXAGGERATION,
            min_span: MIN_SPAN,
        }
    }
}

/// How the viewer reacts to the pointer; passed through untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    #[default]
    Hover,
    Click,
}

impl Interaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interaction::Hover => "hover",
            Interaction::Click => "click",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interaction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hover" => Ok(Interaction::Hover),
            "click" => Ok(Interaction::Click),
            other => Err(format!("unknown interaction mode: {other}")),
        }
    }
}

/// Settings for one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the HTML artifact is written
    pub output_path: PathBuf,
    /// Explicit viewer template, searched before the bundled one
    pub template_path: Option<PathBuf>,
    pub interaction: Interaction,
    /// Open the artifact with the host's default handler after writing
    pub open_browser: bool,
    pub projection: ProjectionConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template_path: None,
            interaction: Interaction::default(),
            open_browser: true,
            projection: ProjectionConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Apply `GEOMAP3D_OUTPUT` when set
    ///
    /// `GEOMAP3D_TEMPLATE` is read at template lookup time instead.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(output) = env::var_os(OUTPUT_ENV) {
            self.output_path = PathBuf::from(output);
        }
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_path, PathBuf::from("researcher_map.html"));
        assert_eq!(config.interaction, Interaction::Hover);
        assert!(config.open_browser);
        assert_eq!(config.projection.scene_size, 1000.0);
        assert_eq!(config.projection.elevation_exaggeration, 2.0);
        assert_eq!(config.projection.min_span, 0.00001);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "interaction": "click", "projection": {{ "scene_size": 500.0 }} }}"#
        )
        .unwrap();

        let config = ExportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.interaction, Interaction::Click);
        assert_eq!(config.projection.scene_size, 500.0);
        assert_eq!(config.projection.elevation_exaggeration, 2.0);
        assert_eq!(config.output_path, PathBuf::from("researcher_map.html"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ExportConfig::from_file("/nonexistent/geomap3d.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_interaction_parse() {
        assert_eq!("CLICK".parse::<Interaction>(), Ok(Interaction::Click));
        assert_eq!("hover".parse::<Interaction>(), Ok(Interaction::Hover));
        assert!("drag".parse::<Interaction>().is_err());
        assert_eq!(Interaction::Click.to_string(), "click");
    }
}
