//! HTTP fetch client
//!
//! reqwest-backed [`Fetch`] implementation for the fleet REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{Fetch, FetchError, FetchResult};

/// Fleet API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

/// Error body sent by the API alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpFetcher {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// API base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, path: &str) -> FetchResult<serde_json::Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, "fetching");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() || e.is_request() {
                FetchError::Network(e.to_string())
            } else {
                FetchError::from(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            // Body may be empty or not JSON at all; the message is then absent
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(FetchError::server(status.as_u16(), message));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::ErrorKind;

    #[test]
    fn test_base_url_normalized() {
        let fetcher = HttpFetcher::new("http://localhost:8080/");
        assert_eq!(fetcher.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_url_joining() {
        let fetcher = HttpFetcher::new("http://localhost:8080/api");
        assert_eq!(fetcher.url("/clients"), "http://localhost:8080/api/clients");
        assert_eq!(fetcher.url("clients"), "http://localhost:8080/api/clients");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_failure() {
        // Reserve a port, then release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let fetcher = HttpFetcher::new(format!("http://127.0.0.1:{}", port));
        let err = fetcher.fetch("/clients").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
        assert_eq!(err.user_message(), "could not reach the server");
    }
}
