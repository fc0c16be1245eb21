//! Hazard windows scheduled on edges.

use super::{DomainError, EdgeId, Instant};

/// A time interval during which traversal of one edge is slowed and
/// accrues risk.
///
/// The window is half-open: active at `start`, inactive at `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardWindow {
    pub edge: EdgeId,
    start: Instant,
    end: Instant,
    /// Severity label, resolved against the severity profile at search time.
    pub severity: String,
}

impl HazardWindow {
    /// Creates a window, requiring `end > start`.
    pub fn new(
        edge: EdgeId,
        start: Instant,
        end: Instant,
        severity: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidHazardWindow { edge });
        }
        Ok(Self {
            edge,
            start,
            end,
            severity: severity.into(),
        })
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Whether the hazard is active at `at` (`start <= at < end`).
    pub fn is_active_at(&self, at: Instant) -> bool {
        self.start <= at && at < self.end
    }
}
