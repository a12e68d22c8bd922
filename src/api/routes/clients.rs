//! Client Routes
//!
//! - GET /clients - List all clients with vehicle counts
//! - GET /clients/:name - Get one client
//! - GET /clients/:name/vehicles - List a client's vehicles

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::{ClientDetail, ClientSummary, ClientVehicles};

/// GET /clients
pub async fn list_clients(State(state): State<Arc<AppState>>) -> Json<Vec<ClientSummary>> {
    Json(state.store.clients().await)
}

/// GET /clients/:name
///
/// 404 with `client does not exist` for an unknown name.
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ClientDetail>> {
    state
        .store
        .client(&name)
        .await
        .map(Json)
        .ok_or_else(ApiError::client_not_found)
}

/// GET /clients/:name/vehicles
///
/// An unknown client simply has no vehicles.
pub async fn list_client_vehicles(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<ClientVehicles> {
    Json(state.store.client_vehicles(&name).await)
}
