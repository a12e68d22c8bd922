//! Vehicle Routes
//!
//! - GET /vehicles/:vin - Get one vehicle with its owner and weight readings

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::VehicleDetail;

/// GET /vehicles/:vin
///
/// 404 with `vehicle does not exist` for an unknown VIN.
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(vin): Path<String>,
) -> ApiResult<Json<VehicleDetail>> {
    state
        .store
        .vehicle(&vin)
        .await
        .map(Json)
        .ok_or_else(ApiError::vehicle_not_found)
}
