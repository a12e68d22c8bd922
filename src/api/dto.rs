//! Data Transfer Objects
//!
//! Response types that are not fleet entities. Entity bodies are the
//! [`crate::model`] types serialized as-is.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of clients in the store
    pub clients: usize,
    /// Number of vehicles in the store
    pub vehicles: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
