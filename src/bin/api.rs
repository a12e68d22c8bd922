//! Fleet API Server
//!
//! Run with: cargo run --bin fleetview-api
//!
//! Serves the demo fleet over the same read-only REST API the dashboard
//! consumes.
//!
//! # Configuration
//!
//! Config file in the standard locations, overridden by:
//! - `FLEETVIEW_HOST`: Host to bind to (default: 127.0.0.1)
//! - `FLEETVIEW_PORT`: Port to listen on (default: 8080)
//! - `FLEETVIEW_LATENCY_MS`: Simulated delay per store lookup (default: 0)
//! - `FLEETVIEW_LOG_LEVEL` / `FLEETVIEW_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full log filter (takes precedence)

use fleetview::api::{serve, AppState};
use fleetview::config::Config;
use fleetview::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    telemetry::init(&loaded.config.logging);
    loaded.report();
    let config = loaded.config;

    tracing::info!("Starting Fleet API server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config.server);
    tracing::info!(
        clients = state.store.client_count(),
        vehicles = state.store.vehicle_count(),
        latency_ms = config.server.latency_ms,
        "Fleet store ready"
    );

    serve(state, &config.server).await?;

    Ok(())
}
