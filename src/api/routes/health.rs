//! Health Routes
//!
//! - GET /health - Liveness plus store statistics

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        clients: state.store.client_count(),
        vehicles: state.store.vehicle_count(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::store::FleetStore;

    #[tokio::test]
    async fn test_health_reports_store_size() {
        let state = Arc::new(AppState::new(FleetStore::seeded()));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.clients, 3);
        assert_eq!(body.vehicles, 9);
    }
}
