//! Conversion from store rows to domain stations.

use crate::domain::{InvalidLatLng, LatLng, Station};
use crate::store::StationRow;

/// A store row that could not be turned into a [`Station`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {index} ({name:?}) has invalid coordinates: {source}")]
pub struct MappingError {
    /// Position of the row in the query result
    pub index: usize,
    /// Station name as stored
    pub name: String,
    #[source]
    pub source: InvalidLatLng,
}

/// Convert a single row.
pub fn map_row(row: StationRow) -> Result<Station, InvalidLatLng> {
    let location = LatLng::parse(&row.latitude, &row.longitude)?;
    Ok(Station::new(row.name, location))
}

/// Convert every row, preserving order.
///
/// Stops at the first bad row: a shorter list would look like a valid
/// answer with stations missing.
pub fn map_rows(rows: Vec<StationRow>) -> Result<Vec<Station>, MappingError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let name = row.name.clone();
            map_row(row).map_err(|source| MappingError {
                index,
                name,
                source,
            })
        })
        .collect()
}
