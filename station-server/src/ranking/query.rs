//! Nearest-station query against a [`StationStore`].

use tracing::debug;

use crate::domain::LatLng;
use crate::store::{StationRow, StationStore, StoreError};

use super::RankingConfig;

/// Fetch the stations nearest to `at`, nearest first.
///
/// Returns at most `config.limit` rows. Failures from the store are
/// returned as-is; nothing is retried.
pub async fn rank_nearest<S: StationStore>(
    store: &S,
    at: &LatLng,
    config: &RankingConfig,
) -> Result<Vec<StationRow>, StoreError> {
    let mut rows = store.query_nearest(at, config).await?;
    rows.truncate(config.limit);

    debug!(%at, count = rows.len(), "ranked nearest stations");
    Ok(rows)
}
