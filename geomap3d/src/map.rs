use geo::Coord;
use tracing::trace;

use crate::commons::time_steps::TimeSteps;
use crate::config::ProjectionConfig;
use crate::export::payload::MapData;
use crate::geo_core::BoundingBox;
use crate::geometric::{Bar, Surface};

/// Collection of bars and surfaces to be drawn in one scene
///
/// Adding a feature merges its points into the bounds, records its time
/// marker and appends it, all under one `&mut self` borrow. Projected
/// geometry is never stored here; [`Map::render`] derives it from scratch.
/// Wrap the whole map in a single `Mutex` when several producers share it.
#[derive(Debug, Clone, Default)]
pub struct Map {
    bars: Vec<Bar>,
    surfaces: Vec<Surface>,
    bounds: BoundingBox,
    time_steps: TimeSteps,
}

impl Map {
    pub fn new() -> Self {
        Map::default()
    }

    /// Add an extruded shape
    ///
    /// Geometry, height and color are not validated.
    pub fn add_bar(&mut self, bar: Bar) {
        self.bounds.update(bar.footprint.iter().copied());
        self.time_steps.record(bar.time);
        trace!(points = bar.footprint.len(), time = bar.time, "bar added");
        self.bars.push(bar);
    }

    /// Positional shorthand for [`Map::add_bar`]
    pub fn add_data<I, C>(&mut self, footprint: I, height: f64, color: &str, time: f64)
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord<f64>>,
    {
        self.add_bar(
            Bar::new(footprint)
                .with_height(height)
                .with_color(color)
                .with_time(time),
        );
    }

    /// Add a surface; only the lon/lat of its points feed the bounds
    pub fn add_surface(&mut self, surface: Surface) {
        self.bounds.update(surface.footprint());
        self.time_steps.record(surface.time);
        trace!(
            points = surface.points.len(),
            time = surface.time,
            "surface added"
        );
        self.surfaces.push(surface);
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn time_steps(&self) -> &TimeSteps {
        &self.time_steps
    }

    /// Number of features, bars and surfaces together
    pub fn len(&self) -> usize {
        self.bars.len() + self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.surfaces.is_empty()
    }

    /// Project every feature and assemble the viewer payload
    pub fn render(&self) -> MapData {
        self.render_with(&ProjectionConfig::default())
    }

    pub fn render_with(&self, config: &ProjectionConfig) -> MapData {
        MapData::build(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometric::SurfacePoint;

    #[test]
    fn test_map_new() {
        let map = Map::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.bounds().is_empty());
    }

    #[test]
    fn test_bounds_cover_all_points_but_not_elevation() {
        let mut map = Map::new();
        map.add_surface(Surface::new(vec![(-3.0, 44.0, 900.0), (1.0, 43.0, -50.0)]));
        map.add_data(vec![(2.0, 46.0), (2.5, 46.5)], 10.0, "#fff", 0.0);
        map.add_bar(Bar::new([(-1.0, 50.0)]));

        assert_eq!(*map.bounds(), BoundingBox::new(-3.0, 43.0, 2.5, 50.0));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_bounds_independent_of_order() {
        let bars = vec![
            Bar::new([(10.0, 20.0), (11.0, 21.0)]),
            Bar::new([(-5.0, 0.0)]),
            Bar::new([(3.0, 40.0)]),
        ];

        let mut forward = Map::new();
        bars.iter().cloned().for_each(|b| forward.add_bar(b));
        let mut backward = Map::new();
        bars.iter().rev().cloned().for_each(|b| backward.add_bar(b));

        assert_eq!(forward.bounds(), backward.bounds());
    }

    #[test]
    fn test_shared_timeline() {
        let mut map = Map::new();
        map.add_bar(Bar::new([(0.0, 0.0)]).with_time(0.0));
        map.add_bar(Bar::new([(0.0, 0.0)]).with_time(0.0));
        map.add_surface(Surface::new([SurfacePoint::new(0.0, 0.0, 0.0)]).with_time(1.0));
        map.add_bar(Bar::new([(0.0, 0.0)]).with_time(2.0));
        map.add_surface(Surface::new([SurfacePoint::new(0.0, 0.0, 0.0)]).with_time(1.0));

        assert_eq!(map.time_steps().sorted(), vec![0.0, 1.0, 2.0]);
        assert_eq!(map.time_steps().max_index(), 2);
    }

    #[test]
    fn test_empty_footprint_accepted() {
        let mut map = Map::new();
        map.add_bar(Bar::new(Vec::<(f64, f64)>::new()).with_time(4.0));
        assert_eq!(map.bars().len(), 1);
        assert!(map.bounds().is_empty());
        assert_eq!(map.time_steps().sorted(), vec![4.0]);
    }
}
