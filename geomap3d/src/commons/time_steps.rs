use serde::{Deserialize, Serialize};

/// Time markers observed across every feature of a map
///
/// Markers are kept in first-seen order without duplicates; the sorted view
/// used by the viewer is produced by [`TimeSteps::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSteps {
    markers: Vec<f64>,
}

impl TimeSteps {
    pub fn new() -> Self {
        TimeSteps::default()
    }

    /// Record a marker, ignoring it when already present
    ///
    /// Returns true when the marker was new. `-0.0` is stored as `0.0`.
    pub fn record(&mut self, time: f64) -> bool {
        let time = if time == 0.0 { 0.0 } else { time };
        if self.contains(time) {
            return false;
        }
        self.markers.push(time);
        true
    }

    pub fn contains(&self, time: f64) -> bool {
        let time = if time == 0.0 { 0.0 } else { time };
        self.markers
            .iter()
            .any(|m| m.total_cmp(&time).is_eq())
    }

    /// Markers in the order they were first seen
    pub fn as_slice(&self) -> &[f64] {
        &self.markers
    }

    /// Distinct markers, ascending
    pub fn sorted(&self) -> Vec<f64> {
        let mut steps = self.markers.clone();
        steps.sort_by(f64::total_cmp);
        steps.dedup_by(|a, b| a.total_cmp(b).is_eq());
        steps
    }

    /// Highest valid slider index, -1 when no marker exists
    pub fn max_index(&self) -> i64 {
        self.markers.len() as i64 - 1
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut steps = TimeSteps::new();
        for t in [0.0, 0.0, 1.0, 2.0, 1.0] {
            steps.record(t);
        }
        assert_eq!(steps.sorted(), vec![0.0, 1.0, 2.0]);
        assert_eq!(steps.max_index(), 2);
    }

    #[test]
    fn test_first_seen_order_kept() {
        let mut steps = TimeSteps::new();
        assert!(steps.record(2021.0));
        assert!(steps.record(1999.0));
        assert!(!steps.record(2021.0));
        assert_eq!(steps.as_slice(), &[2021.0, 1999.0]);
        assert_eq!(steps.sorted(), vec![1999.0, 2021.0]);
    }

    #[test]
    fn test_signed_zero_is_one_marker() {
        let mut steps = TimeSteps::new();
        assert!(steps.record(0.0));
        assert!(!steps.record(-0.0));
        assert!(steps.contains(-0.0));
        assert_eq!(steps.sorted(), vec![0.0]);
        assert!(steps.sorted()[0].is_sign_positive());
        assert_eq!(steps.max_index(), 0);
    }

    #[test]
    fn test_empty_registry() {
        let steps = TimeSteps::new();
        assert!(steps.is_empty());
        assert!(steps.sorted().is_empty());
        assert_eq!(steps.max_index(), -1);
    }
}
