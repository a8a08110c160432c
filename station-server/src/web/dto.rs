//! Data transfer objects for web responses.
//!
//! Field names are PascalCase on the wire.

use serde::Serialize;

use crate::domain::Station;

/// A station in a nearest-stations response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    /// Station name
    #[serde(rename = "StationName")]
    pub station_name: String,

    /// Latitude in decimal degrees, as a string
    #[serde(rename = "Latitude")]
    pub latitude: String,

    /// Longitude in decimal degrees, as a string
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            station_name: station.name.clone(),
            latitude: station.location.latitude().to_string(),
            longitude: station.location.longitude().to_string(),
        }
    }
}

/// Body element of an error response.
///
/// Always sent as a single-element array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResult {
    /// HTTP status code, repeated in the body
    #[serde(rename = "Status")]
    pub status: u16,

    /// Human-readable message
    #[serde(rename = "Message")]
    pub message: String,
}
