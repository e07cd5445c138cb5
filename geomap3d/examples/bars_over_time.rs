// Three city blocks growing over three time steps
use anyhow::Result;
use geomap3d::{Bar, ExportConfig, Exporter, Map};

fn main() -> Result<()> {
    let mut map = Map::new();

    let blocks = [
        ("north", [(-1.152, 46.162), (-1.150, 46.162), (-1.150, 46.164), (-1.152, 46.164)]),
        ("centre", [(-1.151, 46.159), (-1.149, 46.159), (-1.149, 46.161), (-1.151, 46.161)]),
        ("south", [(-1.150, 46.156), (-1.148, 46.156), (-1.148, 46.158), (-1.150, 46.158)]),
    ];

    for year in 0..3 {
        for (i, (name, footprint)) in blocks.iter().enumerate() {
            let mut bar = Bar::new(footprint.to_vec())
                .with_height(12.0 + 8.0 * (year + i) as f64)
                .with_color(if year == 2 { "Orange-Red" } else { "#4488ff" })
                .with_time(2020.0 + year as f64);
            bar.insert_info("name", *name);
            bar.insert_info("storeys", 4 + year + i);
            map.add_bar(bar);
        }
    }

    println!("Features: {}", map.len());
    println!("Bounds: {:?}", map.bounds());
    println!("Time steps: {:?}", map.time_steps().sorted());

    let config = ExportConfig::default()
        .with_output_path("bars_over_time.html")
        .with_env_overrides();
    let location = Exporter::new(config).show(&map)?;
    println!("Map saved to: {}", location);

    Ok(())
}
