//! Directed edges of the route network.

use super::{DomainError, EdgeId, NodeId};

/// A directed edge `from → to`.
///
/// `distance` is carried for consumers such as reports and never influences
/// the search. `base_time` is the nominal traversal duration in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    base_time: f64,
}

impl Edge {
    /// Creates an edge, rejecting negative or non-finite base times.
    pub fn new(from: NodeId, to: NodeId, distance: f64, base_time: f64) -> Result<Self, DomainError> {
        if !base_time.is_finite() || base_time < 0.0 {
            return Err(DomainError::InvalidBaseTime {
                edge: EdgeId::between(&from, &to),
                base_time,
            });
        }
        Ok(Self {
            from,
            to,
            distance,
            base_time,
        })
    }

    /// Nominal traversal duration in hours.
    pub fn base_time(&self) -> f64 {
        self.base_time
    }

    /// The identifier hazards use to refer to this edge.
    pub fn id(&self) -> EdgeId {
        EdgeId::between(&self.from, &self.to)
    }
}
