//! Fleet REST API
//!
//! Read-only HTTP API the dashboard consumes, built with Axum and backed by
//! an in-memory [`FleetStore`].
//!
//! # Endpoints
//!
//! - `GET /clients` - All clients with vehicle counts
//! - `GET /clients/:name` - One client
//! - `GET /clients/:name/vehicles` - A client's vehicles with their largest weight
//! - `GET /vehicles/:vin` - One vehicle with owner details and weight readings
//! - `GET /health` - Health status
//!
//! Unknown clients and vehicles answer 404 with a `message` body.
//!
//! # Example
//!
//! ```rust,no_run
//! use fleetview::api::{serve, AppState};
//! use fleetview::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::from_config(&config), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use store::FleetStore;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/clients", get(routes::clients::list_clients))
        .route("/clients/:name", get(routes::clients::get_client))
        .route(
            "/clients/:name/vehicles",
            get(routes::clients::list_client_vehicles),
        )
        .route("/vehicles/:vin", get(routes::vehicles::get_vehicle))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Fleet API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Fleet API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
