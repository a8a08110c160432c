//! Station record type.

use super::LatLng;

/// A named station and where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Display name, e.g. "Manchester Piccadilly"
    pub name: String,

    /// Station location
    pub location: LatLng,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, location: LatLng) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}
