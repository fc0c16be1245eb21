//! Hazard index: scheduled hazard windows per edge, and the severity table.

mod profile;

use std::collections::HashMap;

use crate::domain::{EdgeId, HazardWindow, Instant};

pub use profile::{Coefficients, SeverityProfile};

/// Errors from hazard lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HazardError {
    /// A hazard referenced a severity label outside the fixed table
    #[error("unknown hazard severity: {0:?}")]
    UnknownSeverity(String),
}

/// Read-only hazard oracle, as consumed by the planner.
///
/// This abstraction allows the planner to be tested with mock hazards.
pub trait HazardProvider {
    /// The first window (in insertion order) on `edge` whose half-open
    /// interval contains `at`.
    fn active_hazard(&self, edge: &EdgeId, at: Instant) -> Option<&HazardWindow>;

    /// Slowdown and risk rate for a severity label.
    fn coefficients(&self, severity: &str) -> Result<Coefficients, HazardError>;
}

/// Hazard windows grouped by edge identifier.
///
/// When several windows on one edge are active at the same instant, lookups
/// return the first one supplied, not the most severe.
#[derive(Debug, Clone)]
pub struct HazardIndex {
    by_edge: HashMap<EdgeId, Vec<HazardWindow>>,
    profile: SeverityProfile,
    window_count: usize,
}

impl HazardIndex {
    /// Build an index from hazard windows, keeping insertion order per edge.
    pub fn build(hazards: impl IntoIterator<Item = HazardWindow>, profile: SeverityProfile) -> Self {
        let mut index = Self {
            by_edge: HashMap::new(),
            profile,
            window_count: 0,
        };
        index.rebuild(hazards);
        index
    }

    /// Replace all windows. The severity profile is kept.
    pub fn rebuild(&mut self, hazards: impl IntoIterator<Item = HazardWindow>) {
        self.by_edge.clear();
        self.window_count = 0;
        for hazard in hazards {
            self.by_edge
                .entry(hazard.edge.clone())
                .or_default()
                .push(hazard);
            self.window_count += 1;
        }
    }

    /// All windows scheduled on `edge`, in insertion order.
    pub fn windows_on(&self, edge: &EdgeId) -> &[HazardWindow] {
        self.by_edge
            .get(edge)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of windows.
    pub fn window_count(&self) -> usize {
        self.window_count
    }

    /// Number of distinct edges with at least one window.
    pub fn edge_count(&self) -> usize {
        self.by_edge.len()
    }
}

impl HazardProvider for HazardIndex {
    fn active_hazard(&self, edge: &EdgeId, at: Instant) -> Option<&HazardWindow> {
        self.windows_on(edge).iter().find(|w| w.is_active_at(at))
    }

    fn coefficients(&self, severity: &str) -> Result<Coefficients, HazardError> {
        self.profile.coefficients(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32) -> Instant {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn hazard(edge: &str, start: u32, end: u32, severity: &str) -> HazardWindow {
        HazardWindow::new(EdgeId::from_raw(edge), at(start), at(end), severity).unwrap()
    }

    fn ab() -> EdgeId {
        EdgeId::from_raw("A-B")
    }

    #[test]
    fn no_hazards_on_unknown_edge() {
        let index = HazardIndex::build(vec![], SeverityProfile::standard());
        assert!(index.active_hazard(&ab(), at(8)).is_none());
        assert!(index.windows_on(&ab()).is_empty());
    }

    #[test]
    fn finds_active_window() {
        let index = HazardIndex::build(vec![hazard("A-B", 8, 12, "low")], SeverityProfile::standard());

        assert!(index.active_hazard(&ab(), at(7)).is_none());
        assert_eq!(index.active_hazard(&ab(), at(8)).unwrap().severity, "low");
        assert!(index.active_hazard(&ab(), at(11)).is_some());
    }

    #[test]
    fn half_open_boundary() {
        let index = HazardIndex::build(vec![hazard("A-B", 8, 12, "low")], SeverityProfile::standard());

        assert!(index.active_hazard(&ab(), at(12)).is_none());
        assert!(
            index
                .active_hazard(&ab(), at(12) - Duration::microseconds(1))
                .is_some()
        );
    }

    #[test]
    fn overlapping_windows_return_first_inserted() {
        let index = HazardIndex::build(
            vec![
                hazard("A-B", 8, 10, "low"),
                hazard("A-B", 6, 14, "high"),
            ],
            SeverityProfile::standard(),
        );

        // Both active at 9: the first supplied wins even though it is milder
        assert_eq!(index.active_hazard(&ab(), at(9)).unwrap().severity, "low");
        // Only the second is active at 11
        assert_eq!(index.active_hazard(&ab(), at(11)).unwrap().severity, "high");
    }

    #[test]
    fn windows_are_per_edge() {
        let index = HazardIndex::build(
            vec![hazard("A-B", 8, 12, "low"), hazard("B-A", 8, 12, "high")],
            SeverityProfile::standard(),
        );

        assert_eq!(index.active_hazard(&ab(), at(9)).unwrap().severity, "low");
        assert_eq!(
            index
                .active_hazard(&EdgeId::from_raw("B-A"), at(9))
                .unwrap()
                .severity,
            "high"
        );
        assert_eq!(index.edge_count(), 2);
        assert_eq!(index.window_count(), 2);
    }

    #[test]
    fn rebuild_replaces_windows() {
        let mut index = HazardIndex::build(vec![hazard("A-B", 8, 12, "low")], SeverityProfile::standard());
        index.rebuild(vec![]);
        assert!(index.active_hazard(&ab(), at(9)).is_none());
        assert_eq!(index.window_count(), 0);
    }

    #[test]
    fn coefficients_from_profile() {
        let index = HazardIndex::build(vec![], SeverityProfile::standard());
        let high = index.coefficients("high").unwrap();
        assert_eq!(high.slowdown, 2.0);
        assert_eq!(high.risk_rate, 3.0);
    }

    #[test]
    fn unknown_severity_is_an_error() {
        let index = HazardIndex::build(vec![], SeverityProfile::standard());
        assert_eq!(
            index.coefficients("extreme"),
            Err(HazardError::UnknownSeverity("extreme".to_string()))
        );
    }
}
