//! Nearest-station ranking.
//!
//! Stations are ranked with a cheap planar metric rather than a true
//! geodesic distance. This holds up for a network that covers a small area,
//! where the only correction needed is for longitude foreshortening.

mod config;
mod metric;
mod query;

pub use config::{ASPECT_CORRECTION, DEFAULT_LIMIT, RankingConfig};
pub use metric::{distance_metric, rank_by_distance};
pub use query::rank_nearest;
