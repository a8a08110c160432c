//! Coordinate pair type.

use std::fmt;

/// Query-string key that must come first.
pub const LAT_KEY: &str = "lat";

/// Query-string key that must come second.
pub const LNG_KEY: &str = "lng";

/// Error returned when a coordinate pair cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLatLng {
    /// No query string was supplied at all
    #[error("no query parameters supplied")]
    Missing,

    /// The query did not split into exactly two `&`-separated tokens
    #[error("expected 2 parameters, found {0}")]
    ParameterCount(usize),

    /// A token had no `=` separating key and value
    #[error("parameter {0:?} has no value")]
    MissingValue(String),

    /// Keys were not `lat` then `lng`
    #[error("expected keys lat, lng but found {first:?}, {second:?}")]
    WrongKeys { first: String, second: String },

    /// A value was not a finite decimal number
    #[error("{value:?} is not a number")]
    NotANumber { value: String },
}

/// A latitude/longitude pair in decimal degrees.
///
/// Both components are finite. No range check is applied: a latitude of
/// 200 is accepted and ranks like any other point.
///
/// # Examples
///
/// ```
/// use station_server::domain::LatLng;
///
/// let here = LatLng::from_query(Some("lat=53.4808&lng=-2.2426")).unwrap();
/// assert_eq!(here.latitude(), 53.4808);
/// assert_eq!(here.longitude(), -2.2426);
///
/// // Keys are positional
/// assert!(LatLng::from_query(Some("lng=-2.2426&lat=53.4808")).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl LatLng {
    /// Build from already-typed values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidLatLng> {
        Ok(Self {
            latitude: finite(latitude, || latitude.to_string())?,
            longitude: finite(longitude, || longitude.to_string())?,
        })
    }

    /// Parse a pair of decimal strings.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InvalidLatLng> {
        Ok(Self {
            latitude: parse_decimal(latitude)?,
            longitude: parse_decimal(longitude)?,
        })
    }

    /// Parse a raw query string of the form `lat=<decimal>&lng=<decimal>`.
    ///
    /// Parsing is positional: exactly two parameters, `lat` first and `lng`
    /// second. Values are taken verbatim, without percent-decoding.
    pub fn from_query(query: Option<&str>) -> Result<Self, InvalidLatLng> {
        let query = query.ok_or(InvalidLatLng::Missing)?;

        let tokens: Vec<&str> = query.split('&').collect();
        let [lat_token, lng_token] = tokens.as_slice() else {
            return Err(InvalidLatLng::ParameterCount(tokens.len()));
        };

        let (lat_key, lat_value) = split_pair(lat_token)?;
        let (lng_key, lng_value) = split_pair(lng_token)?;

        if lat_key != LAT_KEY || lng_key != LNG_KEY {
            return Err(InvalidLatLng::WrongKeys {
                first: lat_key.to_string(),
                second: lng_key.to_string(),
            });
        }

        Self::parse(lat_value, lng_value)
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

fn split_pair(token: &str) -> Result<(&str, &str), InvalidLatLng> {
    token
        .split_once('=')
        .ok_or_else(|| InvalidLatLng::MissingValue(token.to_string()))
}

fn parse_decimal(value: &str) -> Result<f64, InvalidLatLng> {
    let parsed = value.parse::<f64>().map_err(|_| InvalidLatLng::NotANumber {
        value: value.to_string(),
    })?;
    finite(parsed, || value.to_string())
}

// `f64::from_str` accepts "NaN" and "inf"; neither orders against a station.
fn finite(value: f64, original: impl FnOnce() -> String) -> Result<f64, InvalidLatLng> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidLatLng::NotANumber { value: original() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_query() {
        let ll = LatLng::from_query(Some("lat=53.47&lng=-2.24")).unwrap();
        assert_eq!(ll.latitude(), 53.47);
        assert_eq!(ll.longitude(), -2.24);
    }

    #[test]
    fn accepts_integers_and_exponents() {
        let ll = LatLng::from_query(Some("lat=53&lng=-2e0")).unwrap();
        assert_eq!(ll.latitude(), 53.0);
        assert_eq!(ll.longitude(), -2.0);
    }

    #[test]
    fn accepts_out_of_range_values() {
        let ll = LatLng::from_query(Some("lat=200&lng=-540.5")).unwrap();
        assert_eq!(ll.latitude(), 200.0);
        assert_eq!(ll.longitude(), -540.5);
    }

    #[test]
    fn reject_missing_query() {
        assert_eq!(LatLng::from_query(None), Err(InvalidLatLng::Missing));
    }

    #[test]
    fn reject_wrong_parameter_count() {
        assert_eq!(
            LatLng::from_query(Some("")),
            Err(InvalidLatLng::ParameterCount(1))
        );
        assert_eq!(
            LatLng::from_query(Some("lat=53.47")),
            Err(InvalidLatLng::ParameterCount(1))
        );
        assert_eq!(
            LatLng::from_query(Some("lat=53.47&lng=-2.24&x=1")),
            Err(InvalidLatLng::ParameterCount(3))
        );
        assert_eq!(
            LatLng::from_query(Some("lat=53.47&lng=-2.24&")),
            Err(InvalidLatLng::ParameterCount(3))
        );
    }

    #[test]
    fn reject_missing_equals() {
        assert_eq!(
            LatLng::from_query(Some("lat&lng=-2.24")),
            Err(InvalidLatLng::MissingValue("lat".into()))
        );
        assert_eq!(
            LatLng::from_query(Some("lat=53.47&lng")),
            Err(InvalidLatLng::MissingValue("lng".into()))
        );
    }

    #[test]
    fn reject_wrong_keys() {
        assert!(matches!(
            LatLng::from_query(Some("lng=-2.24&lat=53.47")),
            Err(InvalidLatLng::WrongKeys { .. })
        ));
        assert!(matches!(
            LatLng::from_query(Some("dog=53.47&lng=-2.24")),
            Err(InvalidLatLng::WrongKeys { .. })
        ));
        assert!(matches!(
            LatLng::from_query(Some("LAT=53.47&LNG=-2.24")),
            Err(InvalidLatLng::WrongKeys { .. })
        ));
        assert!(matches!(
            LatLng::from_query(Some("lat=53.47&lon=-2.24")),
            Err(InvalidLatLng::WrongKeys { .. })
        ));
    }

    #[test]
    fn reject_non_numeric_values() {
        for query in [
            "lat=abc&lng=-2.24",
            "lat=53.47&lng=west",
            "lat=&lng=-2.24",
            "lat=53.47&lng=",
            "lat=53.47=1&lng=-2.24",
            "lat= 53.47&lng=-2.24",
        ] {
            assert!(
                matches!(
                    LatLng::from_query(Some(query)),
                    Err(InvalidLatLng::NotANumber { .. })
                ),
                "{query} should be rejected"
            );
        }
    }

    #[test]
    fn reject_non_finite_values() {
        assert!(LatLng::from_query(Some("lat=NaN&lng=0")).is_err());
        assert!(LatLng::from_query(Some("lat=0&lng=inf")).is_err());
        assert!(LatLng::from_query(Some("lat=-infinity&lng=0")).is_err());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn parse_string_pair() {
        let ll = LatLng::parse("53.4773", "-2.2309").unwrap();
        assert_eq!(ll, LatLng::new(53.4773, -2.2309).unwrap());
    }

    #[test]
    fn display_and_debug() {
        let ll = LatLng::new(53.4773, -2.2309).unwrap();
        assert_eq!(ll.to_string(), "53.4773,-2.2309");
        assert_eq!(format!("{:?}", ll), "LatLng(53.4773, -2.2309)");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidLatLng::ParameterCount(3).to_string(),
            "expected 2 parameters, found 3"
        );
        let err = InvalidLatLng::NotANumber {
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "\"abc\" is not a number");
    }
}
