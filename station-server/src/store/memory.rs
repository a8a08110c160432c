//! In-memory station store.

use std::sync::Arc;

use crate::domain::{LatLng, Station};
use crate::ranking::{RankingConfig, rank_by_distance};

use super::{StationRow, StationStore, StoreError};

/// Station store backed by a fixed list.
///
/// Ranks with the same metric as the SQL query. Ties keep insertion order,
/// which makes results fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStationStore {
    stations: Arc<Vec<Station>>,
}

impl MemoryStationStore {
    /// Create a store holding `stations`.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }

    /// Number of stations held.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationStore for MemoryStationStore {
    async fn query_nearest(
        &self,
        at: &LatLng,
        config: &RankingConfig,
    ) -> Result<Vec<StationRow>, StoreError> {
        let ranked = rank_by_distance(self.stations.iter(), at, config, |s| s.location);
        Ok(ranked.into_iter().map(StationRow::from).collect())
    }
}
