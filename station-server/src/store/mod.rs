//! Station storage.
//!
//! The rest of the crate only needs one thing from storage: "give me the
//! stations nearest to this point". [`StationStore`] is that seam, with a
//! SQLite implementation for the server and an in-memory one for tests.

mod error;
mod memory;
mod sqlite;

use std::future::Future;

pub use error::StoreError;
pub use memory::MemoryStationStore;
pub use sqlite::SqliteStationStore;
#[cfg(test)]
pub(crate) use sqlite::test_support;

use crate::domain::{LatLng, Station};
use crate::ranking::RankingConfig;

/// A station as the store holds it, coordinates still string-encoded.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StationRow {
    #[sqlx(rename = "StationName")]
    pub name: String,

    #[sqlx(rename = "Latitude")]
    pub latitude: String,

    #[sqlx(rename = "Longitude")]
    pub longitude: String,
}

impl StationRow {
    pub fn new(
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl From<&Station> for StationRow {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            latitude: station.location.latitude().to_string(),
            longitude: station.location.longitude().to_string(),
        }
    }
}

/// Read-only source of ranked stations.
///
/// Implementations are shared across concurrent requests, so any
/// serialisation of access to an underlying connection is theirs to do.
pub trait StationStore: Send + Sync + 'static {
    /// Return rows nearest to `at`, ordered by
    /// [`distance_metric`](crate::ranking::distance_metric) ascending, at
    /// most `config.limit` of them.
    ///
    /// Order among rows at equal distance is up to the implementation.
    fn query_nearest(
        &self,
        at: &LatLng,
        config: &RankingConfig,
    ) -> impl Future<Output = Result<Vec<StationRow>, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_from_station() {
        let station = Station::new("Salford Central", LatLng::new(53.483, -2.2547).unwrap());
        let row = StationRow::from(&station);

        assert_eq!(row, StationRow::new("Salford Central", "53.483", "-2.2547"));
    }
}
