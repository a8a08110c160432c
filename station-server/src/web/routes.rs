//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::store::StationStore;

use super::dto::StationResult;
use super::handler::{LookupError, lookup_nearest};
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: StationStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(nearest_stations::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Nearest stations to `?lat=<decimal>&lng=<decimal>`.
///
/// The raw query string is parsed positionally, so it is taken unparsed
/// rather than through `Query`.
async fn nearest_stations<S: StationStore>(
    State(state): State<AppState<S>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<StationResult>>, LookupError> {
    let stations = lookup_nearest(state.store.as_ref(), &state.ranking, query.as_deref()).await?;
    debug!(count = stations.len(), "returning nearest stations");

    Ok(Json(stations.iter().map(StationResult::from_station).collect()))
}
