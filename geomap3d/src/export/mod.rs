pub mod color;
pub mod payload;
pub mod sink;
pub mod template;

use tracing::info;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::map::Map;

use color::{ColorNormalizer, CssColorNormalizer};
use payload::MapData;
use sink::{FileSink, OutputSink};
use template::Template;

/// Turns a [`Map`] into a viewer document and hands it to an output sink
pub struct Exporter<S: OutputSink = FileSink> {
    config: ExportConfig,
    sink: S,
    colors: Box<dyn ColorNormalizer>,
}

impl Exporter<FileSink> {
    /// Exporter writing to `config.output_path`
    pub fn new(config: ExportConfig) -> Self {
        let sink = FileSink::new(config.output_path.clone());
        Exporter::with_sink(config, sink)
    }
}

impl<S: OutputSink> Exporter<S> {
    pub fn with_sink(config: ExportConfig, sink: S) -> Self {
        Exporter {
            config,
            sink,
            colors: Box::new(CssColorNormalizer),
        }
    }

    /// Replace the default lowercase/de-hyphen color normalizer
    pub fn with_colors(mut self, colors: impl ColorNormalizer + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Build the payload with colors normalized
    pub fn render(&self, map: &Map) -> MapData {
        let mut data = map.render_with(&self.config.projection);
        data.normalize_colors(self.colors.as_ref());
        data
    }

    /// Render, fill the template and write it; returns the artifact location
    pub fn export(&mut self, map: &Map) -> Result<String> {
        let template = Template::locate(self.config.template_path.as_deref())?;
        let data = self.render(map);
        let document = template.fill(&data.to_json()?, self.config.interaction);
        let location = self.sink.write(&document)?;
        info!(
            shapes = data.shapes.len(),
            surfaces = data.surfaces.len(),
            time_steps = data.time_steps.len(),
            "exported map to {location}"
        );
        Ok(location)
    }

    /// Export, then reveal the artifact when `open_browser` is set
    pub fn show(&mut self, map: &Map) -> Result<String> {
        let location = self.export(map)?;
        if self.config.open_browser {
            self.sink.reveal(&location)?;
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interaction;
    use crate::error::Error;
    use crate::geometric::{Bar, Surface};
    use color::PassthroughColors;
    use sink::MemorySink;

    fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("viewer.html");
        std::fs::write(&path, "<div data-mode={{ INTERACTION }}>{{ MAP_DATA }}</div>").unwrap();
        path
    }

    fn sample_map() -> Map {
        let mut map = Map::new();
        map.add_bar(Bar::new(vec![(1.0, 1.0), (2.0, 2.0)]).with_color("Dark-Green").with_time(5.0));
        map.add_surface(Surface::new(vec![(1.0, 1.0, 3.0)]).with_time(2.0));
        map
    }

    #[test]
    fn test_show_writes_and_reveals() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::default()
            .with_template_path(write_template(dir.path()))
            .with_interaction(Interaction::Click);
        let mut exporter = Exporter::with_sink(config, MemorySink::new());

        let location = exporter.show(&sample_map()).unwrap();
        let sink = exporter.into_sink();
        assert_eq!(sink.revealed, vec![location]);

        let document = sink.last().unwrap();
        assert!(document.starts_with("<div data-mode=\"click\">{"));
        assert!(!document.contains("{{ MAP_DATA }}"));

        let json = document
            .trim_start_matches("<div data-mode=\"click\">")
            .trim_end_matches("</div>");
        let data: MapData = serde_json::from_str(json).unwrap();
        assert_eq!(data.time_steps, vec![2.0, 5.0]);
        assert_eq!(data.max_time_index, 1);
        assert_eq!(data.shapes[0].color, "darkgreen");
    }

    #[test]
    fn test_export_without_reveal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::default()
            .with_template_path(write_template(dir.path()))
            .with_open_browser(false);
        let mut exporter = Exporter::with_sink(config, MemorySink::new());

        exporter.show(&Map::new()).unwrap();
        assert_eq!(exporter.sink().documents.len(), 1);
        assert!(exporter.sink().revealed.is_empty());
    }

    #[test]
    fn test_default_config_uses_bundled_viewer() {
        let config = ExportConfig::default().with_open_browser(false);
        let mut exporter = Exporter::with_sink(config, MemorySink::new());

        exporter.export(&sample_map()).unwrap();
        let document = exporter.sink().last().unwrap();
        assert!(document.contains("const MAP_DATA = {\"shapes\":["));
        assert!(document.contains("const INTERACTION = \"hover\";"));
    }

    #[test]
    fn test_missing_template_fails() {
        let config = ExportConfig::default().with_template_path("/nonexistent/viewer.html");
        let mut exporter = Exporter::with_sink(config, MemorySink::new());

        let err = exporter.show(&sample_map()).unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound { .. }));
        assert!(exporter.sink().documents.is_empty());
    }

    #[test]
    fn test_custom_colors() {
        let exporter = Exporter::with_sink(ExportConfig::default(), MemorySink::new())
            .with_colors(PassthroughColors);
        let data = exporter.render(&sample_map());
        assert_eq!(data.shapes[0].color, "Dark-Green");
    }

    #[test]
    fn test_exports_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::default().with_template_path(write_template(dir.path()));
        let mut exporter = Exporter::with_sink(config, MemorySink::new());
        let map = sample_map();

        exporter.export(&map).unwrap();
        exporter.export(&map).unwrap();
        let sink = exporter.sink();
        assert_eq!(sink.documents[0], sink.documents[1]);
    }

    #[test]
    fn test_file_exporter() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        let config = ExportConfig::default()
            .with_template_path(write_template(dir.path()))
            .with_output_path(&output)
            .with_open_browser(false);

        let location = Exporter::new(config).show(&sample_map()).unwrap();
        assert!(location.starts_with("file://"));
        assert!(std::fs::read_to_string(output).unwrap().contains("\"timeSteps\":[2.0,5.0]"));
    }
}
