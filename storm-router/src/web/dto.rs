//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Instant, SearchState, Segment, Travel, Wait};
use crate::input::{InputData, NetworkData};

/// Request to plan routes over a network supplied inline.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRoutesRequest {
    #[serde(flatten)]
    pub input: InputData,

    /// Number of alternatives; negative values ask for none
    #[serde(default)]
    pub max_results: Option<i64>,
}

/// Request to search the currently loaded network.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRoutesRequest {
    pub start_point: String,
    pub end_point: String,
    pub departure_time: Instant,

    #[serde(default)]
    pub max_results: Option<i64>,
}

/// Request to replace the loaded network.
pub type LoadNetworkRequest = NetworkData;

/// Response after loading a network.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadNetworkResponse {
    /// Number of edges indexed
    pub edges: usize,

    /// Number of hazard windows indexed
    pub hazards: usize,
}

/// Response for route search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesResponse {
    /// Found routes, fastest first
    pub routes: Vec<RouteResult>,

    /// Number of states explored
    pub states_explored: usize,
}

/// A complete route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Visited nodes, start first
    pub path: Vec<String>,

    pub departure_time: Instant,
    pub arrival_time: Instant,

    /// Elapsed hours, including waits
    pub total_time: f64,
    pub travel_time: f64,
    pub wait_time: f64,

    /// Accumulated risk
    pub risk: f64,

    pub segments: Vec<SegmentResult>,
}

/// A segment of a route.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SegmentResult {
    Travel(TravelResult),
    Wait(WaitResult),
}

/// Traversal of one edge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelResult {
    pub from: String,
    pub to: String,
    pub start_time: Instant,
    pub end_time: Instant,
    pub base_time: f64,
    pub actual_time: f64,
    pub risk: f64,

    /// Severity of the hazard traversed, if any
    pub severity: Option<String>,
    pub slowdown: f64,
}

/// A stay at a node.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitResult {
    pub node: String,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Clamp a requested result count. Negative means none.
pub fn clamp_max_results(requested: Option<i64>) -> Option<usize> {
    requested.map(|n| usize::try_from(n).unwrap_or(0))
}

// Conversion implementations

impl RouteResult {
    /// Create from a completed search state.
    pub fn from_state(state: &SearchState) -> Self {
        Self {
            path: state.path().iter().map(|n| n.to_string()).collect(),
            departure_time: state.departure(),
            arrival_time: state.time(),
            total_time: state.total_time(),
            travel_time: state.travel_time(),
            wait_time: state.wait_time(),
            risk: state.risk(),
            segments: state
                .segments()
                .iter()
                .map(|s| match s {
                    Segment::Travel(travel) => {
                        SegmentResult::Travel(TravelResult::from_travel(travel))
                    }
                    Segment::Wait(wait) => SegmentResult::Wait(WaitResult::from_wait(wait)),
                })
                .collect(),
        }
    }
}

impl TravelResult {
    fn from_travel(travel: &Travel) -> Self {
        Self {
            from: travel.from.to_string(),
            to: travel.to.to_string(),
            start_time: travel.start,
            end_time: travel.end,
            base_time: travel.base_time,
            actual_time: travel.actual_time,
            risk: travel.risk,
            severity: travel.severity.clone(),
            slowdown: travel.slowdown,
        }
    }
}

impl WaitResult {
    fn from_wait(wait: &Wait) -> Self {
        Self {
            node: wait.node.to_string(),
            start_time: wait.start,
            end_time: wait.end,
            duration: wait.duration,
        }
    }
}
