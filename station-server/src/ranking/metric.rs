//! Planar distance approximation.

use std::cmp::Ordering;

use crate::domain::LatLng;

use super::RankingConfig;

/// Weighted squared distance between two points.
///
/// `d = (Δlat)² + k·(Δlng)²`. Only useful for ordering points within a
/// small region; it is not a distance in any unit.
pub fn distance_metric(from: &LatLng, to: &LatLng, aspect_correction: f64) -> f64 {
    let d_lat = from.latitude() - to.latitude();
    let d_lng = from.longitude() - to.longitude();
    d_lat * d_lat + aspect_correction * d_lng * d_lng
}

/// Order `items` by distance from `at`, nearest first, keeping at most
/// `config.limit`.
///
/// The sort is stable: items at equal distance keep their input order.
pub fn rank_by_distance<T>(
    items: impl IntoIterator<Item = T>,
    at: &LatLng,
    config: &RankingConfig,
    location: impl Fn(&T) -> LatLng,
) -> Vec<T> {
    let mut ranked: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (distance_metric(at, &location(&item), config.aspect_correction), item))
        .collect();

    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    ranked.truncate(config.limit);
    ranked.into_iter().map(|(_, item)| item).collect()
}
