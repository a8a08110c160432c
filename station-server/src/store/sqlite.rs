//! SQLite-backed station store.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::LatLng;
use crate::ranking::RankingConfig;

use super::{StationRow, StationStore, StoreError};

/// Ranked-nearest query.
///
/// Coordinates are stored as text; SQLite coerces them to numbers for the
/// arithmetic. Parameters: lat, lat, aspect correction, lng, lng, limit.
const NEAREST_QUERY: &str = "\
SELECT CAST(StationName AS TEXT) AS StationName, \
       CAST(Latitude AS TEXT) AS Latitude, \
       CAST(Longitude AS TEXT) AS Longitude, \
       ((? - Latitude) * (? - Latitude)) + (? * ((? - Longitude) * (? - Longitude))) AS DistanceMetric \
FROM stations \
ORDER BY DistanceMetric \
LIMIT ?";

const COUNT_QUERY: &str = "SELECT COUNT(*) FROM stations";

/// Station store reading from a SQLite database.
///
/// Rows at equal distance come back in whatever order SQLite scans them,
/// so ties are not guaranteed to be stable across database rebuilds.
#[derive(Debug, Clone)]
pub struct SqliteStationStore {
    pool: SqlitePool,
}

impl SqliteStationStore {
    /// Open the database at `path` read-only.
    ///
    /// Fails if the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new().filename(path).read_only(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        info!(path = %path.display(), "opened station database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of stations in the table.
    pub async fn station_count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar(COUNT_QUERY)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// Close the pool. Queries issued afterwards fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl StationStore for SqliteStationStore {
    async fn query_nearest(
        &self,
        at: &LatLng,
        config: &RankingConfig,
    ) -> Result<Vec<StationRow>, StoreError> {
        let limit = i64::try_from(config.limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, StationRow>(NEAREST_QUERY)
            .bind(at.latitude())
            .bind(at.latitude())
            .bind(config.aspect_correction)
            .bind(at.longitude())
            .bind(at.longitude())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
