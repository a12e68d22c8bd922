//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::store::FleetStore;
use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fleet data served by the API
    pub store: Arc<FleetStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: FleetStore) -> Self {
        Self {
            store: Arc::new(store),
            start_time: Instant::now(),
        }
    }

    /// Seeded store with the configured lookup latency
    pub fn from_config(config: &ServerConfig) -> Self {
        let store =
            FleetStore::seeded().with_latency(Duration::from_millis(config.latency_ms));
        Self::new(store)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
