//! Application state for the web layer.

use std::sync::Arc;

use crate::ranking::RankingConfig;
use crate::store::StationStore;

/// Shared application state.
///
/// Holds the injected station store and the ranking parameters.
pub struct AppState<S> {
    /// Station store, opened once at startup
    pub store: Arc<S>,

    /// Nearest-station ranking parameters
    pub ranking: Arc<RankingConfig>,
}

impl<S: StationStore> AppState<S> {
    /// Create a new app state.
    pub fn new(store: S, ranking: RankingConfig) -> Self {
        Self {
            store: Arc::new(store),
            ranking: Arc::new(ranking),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ranking: Arc::clone(&self.ranking),
        }
    }
}
