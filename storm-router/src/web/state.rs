//! Application state for the web layer.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::hazards::{HazardIndex, SeverityProfile};
use crate::input::{InputError, NetworkData};
use crate::network::NetworkIndex;
use crate::planner::SearchConfig;

/// A network and its hazard schedule, indexed together.
#[derive(Debug)]
pub struct LoadedNetwork {
    pub network: NetworkIndex,
    pub hazards: HazardIndex,
}

/// Shared application state.
///
/// The loaded network is replaced wholesale on every load. Searches hold
/// their own `Arc` to the version they started with, so a reload never
/// changes the data under a running search.
#[derive(Clone)]
pub struct AppState {
    /// Currently loaded network, if any
    network: Arc<RwLock<Option<Arc<LoadedNetwork>>>>,

    /// Severity table used when building hazard indices
    pub profile: Arc<SeverityProfile>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state with no network loaded.
    pub fn new(config: SearchConfig, profile: SeverityProfile) -> Self {
        Self {
            network: Arc::new(RwLock::new(None)),
            profile: Arc::new(profile),
            config: Arc::new(config),
        }
    }

    /// Validate `data`, index it and make it the loaded network.
    pub fn load_network(&self, data: NetworkData) -> Result<Arc<LoadedNetwork>, InputError> {
        let (network, hazards) = data.into_indices((*self.profile).clone())?;
        let loaded = Arc::new(LoadedNetwork { network, hazards });

        *self
            .network
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());

        info!(
            edges = loaded.network.edge_count(),
            hazards = loaded.hazards.window_count(),
            "network replaced"
        );
        Ok(loaded)
    }

    /// The loaded network, if any.
    pub fn current_network(&self) -> Option<Arc<LoadedNetwork>> {
        self.network
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
