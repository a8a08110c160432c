//! Domain types for the station lookup.
//!
//! Types validate at construction time, so code holding a `LatLng` can
//! trust that both components are finite numbers.

mod latlng;
mod station;

pub use latlng::{InvalidLatLng, LAT_KEY, LNG_KEY, LatLng};
pub use station::Station;
