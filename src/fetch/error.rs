//! Fetch error types
//!
//! Every failure of a remote fetch lands in [`FetchError`]. The view layer
//! only ever shows [`FetchError::user_message`], so a transport failure and a
//! non-2xx response end up in the same `Error` state.

use thiserror::Error;

/// Classification of fetch failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received (connection refused, DNS, reset)
    NetworkFailure,
    /// The server answered with a non-2xx status or an unusable body
    ServerError,
    /// The requested client or vehicle does not exist (HTTP 404)
    NotFound,
}

/// Errors returned by a [`Fetch`](super::Fetch) implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure, no response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, with the server's `message` field when it sent one
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build a server error from a status code and optional message
    pub fn server(status: u16, message: Option<String>) -> Self {
        FetchError::Server {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Build a 404 with a server message
    pub fn not_found(message: impl Into<String>) -> Self {
        FetchError::server(404, Some(message.into()))
    }

    /// Classify the failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) => ErrorKind::NetworkFailure,
            FetchError::Server { status: 404, .. } => ErrorKind::NotFound,
            FetchError::Server { .. } | FetchError::Decode(_) => ErrorKind::ServerError,
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Best message to show the user
    ///
    /// The server's own message wins; otherwise a generic description.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            FetchError::Server {
                status: 404,
                message: None,
            } => "not found".to_string(),
            FetchError::Server {
                status,
                message: None,
            } => format!("request failed with status {}", status),
            FetchError::Network(_) => "could not reach the server".to_string(),
            FetchError::Decode(_) => "unexpected response from the server".to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::server(status.as_u16(), None),
            None if err.is_decode() => FetchError::Decode(err.to_string()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            FetchError::Network("refused".into()).kind(),
            ErrorKind::NetworkFailure
        );
        assert_eq!(FetchError::not_found("gone").kind(), ErrorKind::NotFound);
        assert_eq!(FetchError::server(500, None).kind(), ErrorKind::ServerError);
        assert_eq!(FetchError::Decode("eof".into()).kind(), ErrorKind::ServerError);
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = FetchError::not_found("vehicle not found");
        assert_eq!(err.user_message(), "vehicle not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_user_message_fallbacks() {
        assert_eq!(
            FetchError::server(503, None).user_message(),
            "request failed with status 503"
        );
        assert_eq!(FetchError::server(404, None).user_message(), "not found");
        assert_eq!(
            FetchError::Network("connection refused".into()).user_message(),
            "could not reach the server"
        );
    }

    #[test]
    fn test_blank_server_message_is_absent() {
        let err = FetchError::server(500, Some("   ".to_string()));
        assert_eq!(err, FetchError::Server { status: 500, message: None });
    }

    #[test]
    fn test_error_display() {
        let err = FetchError::server(404, Some("client does not exist".to_string()));
        assert_eq!(err.to_string(), "Server error 404: client does not exist");

        let err = FetchError::server(500, None);
        assert_eq!(err.to_string(), "Server error 500: no message");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
