//! Server configuration.
//!
//! Read from environment variables, each with a default:
//!
//! | Variable | Default |
//! |---|---|
//! | `STATION_DB_PATH` | `trainstations.db` |
//! | `STATION_LISTEN_ADDR` | `0.0.0.0:8080` |
//! | `STATION_ASPECT_CORRECTION` | `0.59` |

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::ranking::RankingConfig;

pub const DB_PATH_VAR: &str = "STATION_DB_PATH";
pub const LISTEN_ADDR_VAR: &str = "STATION_LISTEN_ADDR";
pub const ASPECT_CORRECTION_VAR: &str = "STATION_ASPECT_CORRECTION";

const DEFAULT_DB_PATH: &str = "trainstations.db";
const DEFAULT_PORT: u16 = 8080;

/// A configuration variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a socket address: {value:?}")]
    InvalidAddr { name: &'static str, value: String },

    #[error("{name} must be a non-negative number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuration for the station server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// SQLite database holding the `stations` table
    pub database_path: PathBuf,

    /// Address to listen on
    pub listen_addr: SocketAddr,

    /// Ranking parameters
    pub ranking: RankingConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(LISTEN_ADDR_VAR) {
            config.listen_addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                name: LISTEN_ADDR_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(ASPECT_CORRECTION_VAR) {
            let factor = value
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .ok_or(ConfigError::InvalidNumber {
                    name: ASPECT_CORRECTION_VAR,
                    value,
                })?;
            config.ranking = config.ranking.with_aspect_correction(factor);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            ranking: RankingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_path, PathBuf::from("trainstations.db"));
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.ranking, RankingConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/var/lib/stations/uk.db"),
            (LISTEN_ADDR_VAR, "127.0.0.1:3000"),
            (ASPECT_CORRECTION_VAR, "0.4"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/stations/uk.db"));
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.ranking.aspect_correction, 0.4);
        assert_eq!(config.ranking.limit, 5);
    }

    #[test]
    fn rejects_bad_address() {
        let err = ServerConfig::from_lookup(lookup(&[(LISTEN_ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                name: LISTEN_ADDR_VAR,
                value: "localhost".into()
            }
        );
    }

    #[test]
    fn rejects_bad_aspect_correction() {
        for value in ["abc", "-0.5", "NaN", "inf"] {
            let result = ServerConfig::from_lookup(lookup(&[(ASPECT_CORRECTION_VAR, value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidNumber { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidNumber {
            name: ASPECT_CORRECTION_VAR,
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "STATION_ASPECT_CORRECTION must be a non-negative number: \"abc\""
        );
    }
}
