//! Ranking configuration.

/// Weight applied to the squared longitude difference.
///
/// Longitude degrees are shorter than latitude degrees away from the
/// equator. 0.59 is close to cos(53.5°), the latitude the network sits at.
pub const ASPECT_CORRECTION: f64 = 0.59;

/// Number of stations returned per query.
pub const DEFAULT_LIMIT: usize = 5;

/// Parameters for the nearest-station query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Longitude weighting factor in the distance metric.
    pub aspect_correction: f64,

    /// Maximum number of stations to return.
    pub limit: usize,
}

impl RankingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(aspect_correction: f64, limit: usize) -> Self {
        Self {
            aspect_correction,
            limit,
        }
    }

    /// Set a custom aspect correction.
    pub fn with_aspect_correction(mut self, aspect_correction: f64) -> Self {
        self.aspect_correction = aspect_correction;
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            aspect_correction: ASPECT_CORRECTION,
            limit: DEFAULT_LIMIT,
        }
    }
}
