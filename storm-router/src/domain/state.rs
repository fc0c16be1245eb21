//! Search states: immutable snapshots of a partial route.

use super::time::hours_between;
use super::{Instant, NodeId, Segment, Travel, Wait};

/// A partial (or, at the destination, complete) route.
///
/// States are never mutated once built: [`SearchState::extend`] produces a
/// new state.
///
/// # Invariants
///
/// - `path[0]` is the start node and the last path entry is `node`
/// - `total_time` accumulates `hours(time - departure)` step by step;
///   instants are rounded to whole microseconds
/// - `total_time == travel_time + wait_time` only to within about one
///   microsecond per segment, since `travel_time` sums unrounded durations
/// - `risk` equals the sum of segment risks
/// - `segments` reconstructs the path: one travel segment per path step
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    node: NodeId,
    departure: Instant,
    time: Instant,
    risk: f64,
    path: Vec<NodeId>,
    total_time: f64,
    travel_time: f64,
    wait_time: f64,
    segments: Vec<Segment>,
}

impl SearchState {
    /// The seed state: at `start`, at the departure instant, nothing accrued.
    pub fn initial(start: NodeId, departure: Instant) -> Self {
        Self {
            node: start.clone(),
            departure,
            time: departure,
            risk: 0.0,
            path: vec![start],
            total_time: 0.0,
            travel_time: 0.0,
            wait_time: 0.0,
            segments: Vec::new(),
        }
    }

    /// Builds the successor reached by an optional wait followed by `travel`.
    ///
    /// The caller guarantees that `wait` (if any) starts at this state's
    /// time and `travel` starts where the wait ended (or at this state's time).
    pub fn extend(&self, wait: Option<Wait>, travel: Travel) -> Self {
        let elapsed = hours_between(self.time, travel.end);
        let waited = wait.as_ref().map_or(0.0, |w| w.duration);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(travel.to.clone());

        let mut segments = Vec::with_capacity(self.segments.len() + 2);
        segments.extend(self.segments.iter().cloned());
        if let Some(wait) = wait {
            segments.push(Segment::Wait(wait));
        }

        let node = travel.to.clone();
        let time = travel.end;
        let risk = self.risk + travel.risk;
        let travel_time = self.travel_time + travel.actual_time;
        segments.push(Segment::Travel(travel));

        Self {
            node,
            departure: self.departure,
            time,
            risk,
            path,
            total_time: self.total_time + elapsed,
            travel_time,
            wait_time: self.wait_time + waited,
            segments,
        }
    }

    /// Current node (the arrival node for a complete route).
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Instant the route left the start node.
    pub fn departure(&self) -> Instant {
        self.departure
    }

    /// Arrival instant at the current node.
    pub fn time(&self) -> Instant {
        self.time
    }

    /// Cumulative risk.
    pub fn risk(&self) -> f64 {
        self.risk
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Elapsed hours since departure.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Hours spent moving.
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Hours spent waiting for hazards to clear.
    pub fn wait_time(&self) -> f64 {
        self.wait_time
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Travel segments that crossed an active hazard.
    pub fn hazard_segments(&self) -> impl Iterator<Item = &Travel> {
        self.segments
            .iter()
            .filter_map(Segment::as_travel)
            .filter(|t| t.severity.is_some())
    }

    /// Wait segments, in route order.
    pub fn waits(&self) -> impl Iterator<Item = &Wait> {
        self.segments.iter().filter_map(Segment::as_wait)
    }
}
