//! Nearest-stations request pipeline.
//!
//! A request moves through parse → query → map → respond. Any step can
//! fail, and every failure ends the request with a 400 and a fixed message.
//! Nothing is retried.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::{InvalidLatLng, LatLng, Station};
use crate::mapper::{MappingError, map_rows};
use crate::ranking::{RankingConfig, rank_nearest};
use crate::store::{StationStore, StoreError};

use super::dto::ErrorResult;

/// Message returned when the query string is malformed.
pub const INVALID_PARAMETERS_MESSAGE: &str =
    "The Lat/Lng provided is incorrect. Check key and value.";

/// Message returned when stations could not be fetched or decoded.
pub const RETRIEVAL_FAILED_MESSAGE: &str = "Failed to retrieve results from database.";

/// Why a nearest-stations lookup failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Query string missing, malformed or non-numeric
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidLatLng),

    /// Store unreachable or query failed
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Store returned a row that is not a valid station
    #[error("mapping failure: {0}")]
    MappingFailure(#[from] MappingError),
}

impl LookupError {
    /// Message shown to the caller.
    ///
    /// Store and mapping failures share a message; they differ only in logs.
    pub fn message(&self) -> &'static str {
        match self {
            LookupError::InvalidParameters(_) => INVALID_PARAMETERS_MESSAGE,
            LookupError::StoreUnavailable(_) | LookupError::MappingFailure(_) => {
                RETRIEVAL_FAILED_MESSAGE
            }
        }
    }

    /// HTTP status for the response.
    ///
    /// Store failures are reported as 400 as well, which existing clients
    /// depend on.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match &self {
            LookupError::InvalidParameters(e) => warn!(error = %e, "rejected station query"),
            LookupError::StoreUnavailable(e) => error!(error = %e, "station store query failed"),
            LookupError::MappingFailure(e) => error!(error = %e, "station row mapping failed"),
        }

        let status = self.status();
        let body = Json([ErrorResult {
            status: status.as_u16(),
            message: self.message().to_string(),
        }]);
        (status, body).into_response()
    }
}

/// Run the whole lookup for a raw query string.
///
/// Returns up to `config.limit` stations, nearest first.
pub async fn lookup_nearest<S: StationStore>(
    store: &S,
    config: &RankingConfig,
    query: Option<&str>,
) -> Result<Vec<Station>, LookupError> {
    let at = LatLng::from_query(query)?;
    let rows = rank_nearest(store, &at, config).await?;
    let stations = map_rows(rows)?;
    Ok(stations)
}
