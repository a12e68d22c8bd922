//! In-process fetch client
//!
//! Serves scripted responses keyed by request path. Each path can carry a
//! delay so tests can make responses arrive out of order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{Fetch, FetchError, FetchResult};

#[derive(Clone)]
struct Scripted {
    response: FetchResult<serde_json::Value>,
    delay: Duration,
}

/// [`Fetch`] implementation backed by a path → response table
///
/// Unknown paths answer 404 without a message.
#[derive(Default)]
pub struct MemoryFetcher {
    routes: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    /// Create an empty fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a JSON body
    pub fn respond(self, path: impl Into<String>, body: serde_json::Value) -> Self {
        self.script(path.into(), Ok(body), Duration::ZERO)
    }

    /// Answer `path` with an error
    pub fn fail(self, path: impl Into<String>, error: FetchError) -> Self {
        self.script(path.into(), Err(error), Duration::ZERO)
    }

    /// Answer `path` with a JSON body after `delay`
    pub fn respond_after(
        self,
        path: impl Into<String>,
        body: serde_json::Value,
        delay: Duration,
    ) -> Self {
        self.script(path.into(), Ok(body), delay)
    }

    /// Answer `path` with an error after `delay`
    pub fn fail_after(self, path: impl Into<String>, error: FetchError, delay: Duration) -> Self {
        self.script(path.into(), Err(error), delay)
    }

    /// Paths requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn script(self, path: String, response: FetchResult<serde_json::Value>, delay: Duration) -> Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(path, Scripted { response, delay });
        }
        self
    }
}

#[async_trait]
impl Fetch for MemoryFetcher {
    async fn fetch(&self, path: &str) -> FetchResult<serde_json::Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }

        let scripted = self
            .routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(path).cloned());

        match scripted {
            Some(Scripted { response, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Err(FetchError::server(404, None)),
        }
    }
}
