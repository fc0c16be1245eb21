//! JSON input: the route network, its hazard schedule and a trip request.
//!
//! Field names follow the camelCase layout of the route data files:
//!
//! ```json
//! {
//!   "startPoint": "A",
//!   "endPoint": "B",
//!   "departureTime": "2024-01-01T08:00:00",
//!   "routes": [{ "from": "A", "to": "B", "distance": 120, "baseTime": 10 }],
//!   "storms": [{ "routeId": "A-B", "startTime": "2024-01-01T07:00:00",
//!                "endTime": "2024-01-01T12:00:00", "severity": "high" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DomainError, Edge, EdgeId, HazardWindow, Instant, NodeId};
use crate::hazards::{HazardIndex, SeverityProfile};
use crate::network::NetworkIndex;
use crate::planner::SearchRequest;

/// Errors from loading input data.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON of the expected shape
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),

    /// The input decoded but violates a domain rule
    #[error("invalid input: {0}")]
    Invalid(#[from] DomainError),
}

/// A directed route as it appears in input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub distance: f64,
    pub base_time: f64,
}

/// A hazard window as it appears in input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormRecord {
    /// Edge identifier, `"{from}-{to}"`.
    pub route_id: String,
    pub start_time: Instant,
    pub end_time: Instant,
    pub severity: String,
}

/// The network part of an input: routes and storms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub storms: Vec<StormRecord>,
}

impl NetworkData {
    /// Validated edges, in input order.
    pub fn edges(&self) -> Result<Vec<Edge>, DomainError> {
        self.routes
            .iter()
            .map(|r| {
                Edge::new(
                    NodeId::parse(&r.from)?,
                    NodeId::parse(&r.to)?,
                    r.distance,
                    r.base_time,
                )
            })
            .collect()
    }

    /// Validated hazard windows, in input order.
    ///
    /// Severity labels are not checked here; an unknown label only fails
    /// the search that runs into it.
    pub fn hazard_windows(&self) -> Result<Vec<HazardWindow>, DomainError> {
        self.storms
            .iter()
            .map(|s| {
                HazardWindow::new(
                    EdgeId::from_raw(s.route_id.as_str()),
                    s.start_time,
                    s.end_time,
                    s.severity.as_str(),
                )
            })
            .collect()
    }

    /// Validate the data and build both indices.
    pub fn into_indices(
        self,
        profile: SeverityProfile,
    ) -> Result<(NetworkIndex, HazardIndex), InputError> {
        let network = NetworkIndex::build(self.edges()?);
        let hazards = HazardIndex::build(self.hazard_windows()?, profile);

        info!(
            nodes = network.origin_count(),
            edges = network.edge_count(),
            hazards = hazards.window_count(),
            "network loaded"
        );

        Ok((network, hazards))
    }
}

/// A complete input file: trip request plus network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    pub start_point: String,
    pub end_point: String,
    pub departure_time: Instant,
    #[serde(flatten)]
    pub network: NetworkData,
}

impl InputData {
    /// Decode input from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode an input file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The trip described by this input, with the configured result count.
    pub fn request(&self) -> Result<SearchRequest, InputError> {
        Ok(SearchRequest::new(
            NodeId::parse(&self.start_point)?,
            NodeId::parse(&self.end_point)?,
            self.departure_time,
        ))
    }
}
