//! Station store error types.

/// Errors that can occur when querying the station store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot serve queries at all
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}
