use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use geojson::GeoJson;
use tracing::info;
use tracing_subscriber::EnvFilter;

use geomap3d::{ExportConfig, Exporter, GeoJsonOptions, Interaction, Map};

/// Render a GeoJSON file as an interactive 3D map
#[derive(Debug, Parser)]
#[command(name = "geomap3d", version, about)]
struct Args {
    /// GeoJSON file to read
    input: PathBuf,

    /// HTML file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Viewer template to use instead of the bundled one
    #[arg(long)]
    template: Option<PathBuf>,

    /// JSON export config; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewer interaction mode: hover or click
    #[arg(long)]
    interaction: Option<Interaction>,

    /// Property holding the bar height
    #[arg(long, default_value = "height")]
    height_key: String,

    /// Property holding the feature color
    #[arg(long, default_value = "color")]
    color_key: String,

    /// Property holding the time marker
    #[arg(long, default_value = "time")]
    time_key: String,

    /// Height for polygons without a height property
    #[arg(long, default_value_t = geomap3d::geometric::bar::DEFAULT_BAR_HEIGHT)]
    default_height: f64,

    /// Do not open the written map
    #[arg(long)]
    no_open: bool,

    /// Print the map payload as JSON instead of writing HTML
    #[arg(long)]
    dump_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let geojson: GeoJson = text
        .parse()
        .with_context(|| format!("Failed to parse GeoJSON from {:?}", args.input))?;

    let options = GeoJsonOptions {
        height_key: args.height_key,
        color_key: args.color_key,
        time_key: args.time_key,
        default_height: args.default_height,
        ..GeoJsonOptions::default()
    };

    let mut map = Map::new();
    let added = map.add_geojson(&geojson, &options);
    info!(added, time_steps = map.time_steps().len(), "loaded {:?}", args.input);

    let mut config = match &args.config {
        Some(path) => ExportConfig::from_file(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => ExportConfig::default(),
    }
    .with_env_overrides();
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(template) = args.template {
        config.template_path = Some(template);
    }
    if let Some(interaction) = args.interaction {
        config.interaction = interaction;
    }
    if args.no_open {
        config.open_browser = false;
    }

    let mut exporter = Exporter::new(config);

    if args.dump_json {
        println!("{}", exporter.render(&map).to_json_pretty()?);
        return Ok(());
    }

    let location = exporter.show(&map).context("Failed to export map")?;
    println!("Map saved to: {}", location);

    Ok(())
}
