//! Per-node record of accepted states, used for dominance pruning.

use std::collections::HashMap;

use crate::domain::{Instant, NodeId, SearchState};

/// Arrival time and risk of every state accepted into the frontier,
/// grouped by node.
///
/// Only accepted states are checked. A state already in the frontier is
/// never removed when a better one arrives later.
#[derive(Debug, Default)]
pub(super) struct AcceptedStates {
    by_node: HashMap<NodeId, Vec<(Instant, f64)>>,
}

impl AcceptedStates {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Whether an accepted state at the same node arrives no later and with
    /// no more risk than `candidate`.
    pub(super) fn dominates(&self, candidate: &SearchState) -> bool {
        self.by_node.get(candidate.node()).is_some_and(|accepted| {
            accepted
                .iter()
                .any(|&(time, risk)| time <= candidate.time() && risk <= candidate.risk())
        })
    }

    /// Record `state` as accepted.
    pub(super) fn record(&mut self, state: &SearchState) {
        self.by_node
            .entry(state.node().clone())
            .or_default()
            .push((state.time(), state.risk()));
    }

    /// Record `candidate` unless it is dominated. Returns whether it was
    /// accepted.
    pub(super) fn admit(&mut self, candidate: &SearchState) -> bool {
        if self.dominates(candidate) {
            return false;
        }
        self.record(candidate);
        true
    }
}
