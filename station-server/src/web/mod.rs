//! Web layer for the station lookup.
//!
//! Provides the HTTP endpoint for nearest-station queries.

mod dto;
mod handler;
mod routes;
mod state;

pub use dto::*;
pub use handler::{INVALID_PARAMETERS_MESSAGE, LookupError, RETRIEVAL_FAILED_MESSAGE, lookup_nearest};
pub use routes::create_router;
pub use state::AppState;
