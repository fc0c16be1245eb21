//! Domain error types.
//!
//! These errors represent validation failures in the input data. They are
//! raised while loading a network, before any search runs.

use super::EdgeId;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A node identifier was empty
    #[error("node identifier must not be empty")]
    EmptyNodeId,

    /// Edge base time is negative or not a finite number
    #[error("edge {edge} has invalid base time {base_time}")]
    InvalidBaseTime { edge: EdgeId, base_time: f64 },

    /// Hazard window does not end after it starts
    #[error("hazard on {edge} must end after it starts")]
    InvalidHazardWindow { edge: EdgeId },
}
