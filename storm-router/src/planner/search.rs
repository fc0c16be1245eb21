//! Best-first route search under scheduled hazards.
//!
//! Explores (node, arrival time, accumulated risk) states in order of
//! elapsed time. At every edge the search considers going immediately
//! (through any active hazard) and, when a hazard is active, waiting for it
//! to end first. Candidates dominated by an already-accepted state at the
//! same node are pruned.

use tracing::{debug, trace};

use crate::domain::{
    Edge, EdgeId, HazardWindow, Instant, NodeId, SearchState, Travel, Wait, add_hours,
    hours_between,
};
use crate::hazards::{Coefficients, HazardError, HazardProvider};
use crate::network::RouteGraph;

use super::config::SearchConfig;
use super::dominance::AcceptedStates;
use super::frontier::Frontier;

/// Error from route search.
///
/// Only corrupt input surfaces as an error. An unreachable destination is
/// an empty result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// A hazard references a severity label outside the severity profile
    #[error("unknown hazard severity: {0:?}")]
    UnknownSeverity(String),

    /// An arrival instant falls outside the representable calendar
    #[error("time out of range: {hours} hours after {from}")]
    TimeOutOfRange { from: Instant, hours: f64 },
}

impl From<HazardError> for SearchError {
    fn from(err: HazardError) -> Self {
        match err {
            HazardError::UnknownSeverity(label) => SearchError::UnknownSeverity(label),
        }
    }
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub start: NodeId,
    pub end: NodeId,
    pub departure: Instant,

    /// Number of alternatives to return; the configured default when unset.
    pub max_results: Option<usize>,
}

impl SearchRequest {
    /// Create a new search request using the configured result count.
    pub fn new(start: NodeId, end: NodeId, departure: Instant) -> Self {
        Self {
            start,
            end,
            departure,
            max_results: None,
        }
    }

    /// Ask for at most `max_results` alternatives.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Complete routes, in the order they reached the destination
    /// (non-decreasing elapsed time).
    pub routes: Vec<SearchState>,

    /// Number of states popped from the frontier.
    pub states_explored: usize,
}

impl SearchOutcome {
    /// Create an empty outcome.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            states_explored: 0,
        }
    }
}

/// Route planner over a network and its hazard schedule.
///
/// The planner borrows both indices for its whole lifetime, so neither can
/// be rebuilt while a search is running.
pub struct Planner<'a, G: RouteGraph, H: HazardProvider> {
    graph: &'a G,
    hazards: &'a H,
    config: &'a SearchConfig,
}

impl<'a, G: RouteGraph, H: HazardProvider> Planner<'a, G, H> {
    /// Create a new planner.
    pub fn new(graph: &'a G, hazards: &'a H, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            hazards,
            config,
        }
    }

    /// Search for up to `max_results` routes from `start` to `end`.
    ///
    /// Routes are returned fastest first. Risk only prunes, it never orders.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let max_results = request.max_results.unwrap_or(self.config.max_results);
        if max_results == 0 {
            return Ok(SearchOutcome::empty());
        }

        let mut routes = Vec::new();
        let mut states_explored = 0;
        let mut accepted = AcceptedStates::new();
        let mut frontier = Frontier::new();
        frontier.push(SearchState::initial(
            request.start.clone(),
            request.departure,
        ));

        while routes.len() < max_results {
            if self
                .config
                .max_frontier
                .is_some_and(|cap| states_explored >= cap)
            {
                debug!(states_explored, "frontier cap reached");
                break;
            }

            let Some(state) = frontier.pop() else {
                break;
            };
            states_explored += 1;

            if state.node() == &request.end {
                trace!(
                    total_time = state.total_time(),
                    risk = state.risk(),
                    "route reached destination"
                );
                routes.push(state);
                continue;
            }

            for edge in self.graph.edges_from(state.node()) {
                for candidate in self.expand_edge(&state, edge)? {
                    if self
                        .config
                        .max_elapsed_hours
                        .is_some_and(|cap| candidate.total_time() > cap)
                    {
                        continue;
                    }
                    if accepted.admit(&candidate) {
                        frontier.push(candidate);
                    }
                }
            }

            trace!(
                node = %state.node(),
                frontier = frontier.len(),
                "expanded state"
            );
        }

        debug!(
            start = %request.start,
            end = %request.end,
            routes = routes.len(),
            states_explored,
            "route search complete"
        );

        Ok(SearchOutcome {
            routes,
            states_explored,
        })
    }

    /// Successors of `state` along `edge`: go now, and wait-then-go when a
    /// hazard is active.
    fn expand_edge(&self, state: &SearchState, edge: &Edge) -> Result<Vec<SearchState>, SearchError> {
        let edge_id = edge.id();
        let mut successors = Vec::with_capacity(2);

        let hazard = self.hazards.active_hazard(&edge_id, state.time());

        let travel = self.travel(state.node(), edge, state.time(), hazard)?;
        successors.push(state.extend(None, travel));

        if let Some(hazard) = hazard {
            if let Some(successor) = self.wait_then_go(state, edge, &edge_id, hazard)? {
                successors.push(successor);
            }
        }

        Ok(successors)
    }

    /// Wait at the current node until `hazard` ends, then traverse `edge`
    /// under whatever window is active at that point. Only one wait is
    /// taken per expansion.
    fn wait_then_go(
        &self,
        state: &SearchState,
        edge: &Edge,
        edge_id: &EdgeId,
        hazard: &HazardWindow,
    ) -> Result<Option<SearchState>, SearchError> {
        let wait_until = hazard.end();
        if wait_until <= state.time() {
            return Ok(None);
        }

        let wait = Wait {
            node: state.node().clone(),
            start: state.time(),
            end: wait_until,
            duration: hours_between(state.time(), wait_until),
        };

        let after_wait = self.hazards.active_hazard(edge_id, wait_until);
        let travel = self.travel(state.node(), edge, wait_until, after_wait)?;

        Ok(Some(state.extend(Some(wait), travel)))
    }

    /// Traverse `edge` starting at `start`, slowed by `hazard` if present.
    fn travel(
        &self,
        from: &NodeId,
        edge: &Edge,
        start: Instant,
        hazard: Option<&HazardWindow>,
    ) -> Result<Travel, SearchError> {
        let (coefficients, severity) = match hazard {
            Some(hazard) => (
                self.hazards.coefficients(&hazard.severity)?,
                Some(hazard.severity.clone()),
            ),
            None => (Coefficients::CLEAR, None),
        };

        let base_time = edge.base_time();
        let actual_time = base_time * coefficients.slowdown;
        let end = add_hours(start, actual_time).ok_or(SearchError::TimeOutOfRange {
            from: start,
            hours: actual_time,
        })?;

        Ok(Travel {
            from: from.clone(),
            to: edge.to.clone(),
            start,
            end,
            base_time,
            actual_time,
            risk: base_time * coefficients.risk_rate,
            severity,
            slowdown: coefficients.slowdown,
        })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
