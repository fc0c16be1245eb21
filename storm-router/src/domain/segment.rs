//! Route segments: travel along an edge or wait at a node.

use super::{Instant, NodeId};

/// Movement along one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Travel {
    pub from: NodeId,
    pub to: NodeId,
    pub start: Instant,
    pub end: Instant,
    /// Nominal traversal duration in hours.
    pub base_time: f64,
    /// `base_time * slowdown`, in hours.
    pub actual_time: f64,
    /// Risk accrued on this edge: `base_time * risk_rate`.
    pub risk: f64,
    /// Severity of the hazard traversed, if any.
    pub severity: Option<String>,
    /// 1.0 when no hazard was active.
    pub slowdown: f64,
}

/// Waiting at a node for a hazard window to close.
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    pub node: NodeId,
    pub start: Instant,
    pub end: Instant,
    /// Wait duration in hours.
    pub duration: f64,
}

/// An atomic leg of a route.
///
/// A wait, when present, always immediately precedes the travel segment it
/// enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Travel(Travel),
    Wait(Wait),
}

impl Segment {
    /// Node the segment starts at.
    pub fn from_node(&self) -> &NodeId {
        match self {
            Segment::Travel(travel) => &travel.from,
            Segment::Wait(wait) => &wait.node,
        }
    }

    /// Node the segment ends at (same as the start for waits).
    pub fn to_node(&self) -> &NodeId {
        match self {
            Segment::Travel(travel) => &travel.to,
            Segment::Wait(wait) => &wait.node,
        }
    }

    pub fn start(&self) -> Instant {
        match self {
            Segment::Travel(travel) => travel.start,
            Segment::Wait(wait) => wait.start,
        }
    }

    pub fn end(&self) -> Instant {
        match self {
            Segment::Travel(travel) => travel.end,
            Segment::Wait(wait) => wait.end,
        }
    }

    /// Duration in hours.
    pub fn duration(&self) -> f64 {
        match self {
            Segment::Travel(travel) => travel.actual_time,
            Segment::Wait(wait) => wait.duration,
        }
    }

    /// Risk accrued by the segment. Waiting is always risk-free.
    pub fn risk(&self) -> f64 {
        match self {
            Segment::Travel(travel) => travel.risk,
            Segment::Wait(_) => 0.0,
        }
    }

    pub fn is_travel(&self) -> bool {
        matches!(self, Segment::Travel(_))
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, Segment::Wait(_))
    }

    pub fn as_travel(&self) -> Option<&Travel> {
        match self {
            Segment::Travel(travel) => Some(travel),
            Segment::Wait(_) => None,
        }
    }

    pub fn as_wait(&self) -> Option<&Wait> {
        match self {
            Segment::Travel(_) => None,
            Segment::Wait(wait) => Some(wait),
        }
    }
}
