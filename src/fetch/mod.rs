//! Remote Fetch Client
//!
//! Issues single GET requests against the fleet API and hands back raw JSON
//! or a [`FetchError`]. Stateless between calls: no retry, no cache, and no
//! deadline beyond what the transport imposes.
//!
//! - **client**: `HttpFetcher`, the reqwest-backed implementation
//! - **memory**: `MemoryFetcher`, an in-process implementation with scripted responses
//! - **endpoint**: the endpoints the dashboard consumes
//! - **error**: error types

mod client;
mod endpoint;
mod error;
mod memory;

pub use client::HttpFetcher;
pub use endpoint::Endpoint;
pub use error::{ErrorKind, FetchError, FetchResult};
pub use memory::MemoryFetcher;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Source of raw entity data
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `path` (relative to the API base) and return the JSON body
    async fn fetch(&self, path: &str) -> FetchResult<serde_json::Value>;
}

/// Decode a JSON body into an entity type
pub fn decode<T: DeserializeOwned>(body: serde_json::Value) -> FetchResult<T> {
    Ok(serde_json::from_value(body)?)
}
