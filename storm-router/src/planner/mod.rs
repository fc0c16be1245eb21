//! Route planner using best-first search over (node, time, risk) states.
//!
//! This module implements the core routing algorithm that answers:
//! "Leaving now, what are the fastest ways to get there given the hazard
//! schedule, and what risk does each carry?"
//!
//! States are expanded in order of elapsed time. At each edge the planner
//! may go immediately or wait out an active hazard, and states dominated in
//! both arrival time and risk are pruned.

mod config;
mod dominance;
mod frontier;
mod search;

pub use config::{
    ConfigError, ENV_MAX_ELAPSED_HOURS, ENV_MAX_FRONTIER, ENV_MAX_RESULTS, SearchConfig,
};
pub use search::{Planner, SearchError, SearchOutcome, SearchRequest};
