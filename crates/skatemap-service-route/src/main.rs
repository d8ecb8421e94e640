//! Skating route planning HTTP service.
//!
//! # Configuration
//!
//! - `SKATEMAP_NETWORK_PATH` - Path to the raw network JSON (default: /data/network.json)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `SKATEMAP_AVG_SPEED_KMH`, `SKATEMAP_HEURISTIC`, `SKATEMAP_SNAP` - routing options
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use skatemap_service_shared::{init_logging, AppState, LoggingConfig, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();
    info!(
        network_path = %config.network_path.display(),
        port = config.port,
        heuristic = %config.routing.heuristic,
        snap = %config.routing.snap,
        "starting route service"
    );

    let state = AppState::load(&config.network_path, config.routing).map_err(|e| {
        error!(error = %e, path = %config.network_path.display(), "failed to load application state");
        e
    })?;

    info!(nodes = state.node_count(), "application state loaded");

    let app = skatemap_service_route::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
