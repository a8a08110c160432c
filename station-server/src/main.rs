use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use station_server::config::{ConfigError, ServerConfig};
use station_server::store::{SqliteStationStore, StoreError};
use station_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "station_server=info,tower_http=info";

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("station database: {0}")]
    Store(#[from] StoreError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    info!(
        database = %config.database_path.display(),
        aspect_correction = config.ranking.aspect_correction,
        "starting station server"
    );

    // Open the station database (fail fast if unavailable)
    let store = SqliteStationStore::open(&config.database_path).await?;
    info!("Loaded {} stations", store.station_count().await?);

    let state = AppState::new(store, config.ranking);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Station server listening on http://{}", config.listen_addr);
    info!("  GET /health                       - Health check");
    info!("  GET /stations?lat=<lat>&lng=<lng> - Nearest stations");

    axum::serve(listener, app).await?;
    Ok(())
}
