// A sloped surface under a single extruded marker, payload printed as JSON
use anyhow::Result;
use geomap3d::{Bar, Map, Surface, SurfacePoint};

fn main() -> Result<()> {
    let mut map = Map::new();

    let slope: Vec<SurfacePoint> = (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 8.0;
            SurfacePoint::new(6.86 + 0.01 * angle.cos(), 45.83 + 0.01 * angle.sin(), 20.0 * i as f64)
        })
        .collect();
    map.add_surface(Surface::new(slope).with_color("#22aa66").with_opacity(0.8));

    map.add_bar(
        Bar::new([(6.859, 45.829), (6.861, 45.829), (6.861, 45.831), (6.859, 45.831)])
            .with_height(60.0)
            .with_color("#ffffff"),
    );

    let data = map.render();
    println!("{}", data.to_json_pretty()?);

    Ok(())
}
