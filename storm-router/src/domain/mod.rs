//! Domain types for the storm router.
//!
//! This module contains the validated network model (nodes, edges, hazard
//! windows) and the route representation produced by the search (segments
//! and search states). Types enforce their invariants at construction time.

mod edge;
mod error;
mod hazard;
mod node;
mod segment;
mod state;
mod time;

pub use edge::Edge;
pub use error::DomainError;
pub use hazard::HazardWindow;
pub use node::{EDGE_ID_SEPARATOR, EdgeId, NodeId};
pub use segment::{Segment, Travel, Wait};
pub use state::SearchState;
pub use time::{Instant, add_hours, hours_between, hours_to_duration};
