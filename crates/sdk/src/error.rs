//! Error types for the e-Stat SDK.

use serde::{Serialize, Serializer};
use std::fmt;

/// Result type for client construction.
pub type EStatResult<T> = Result<T, EStatError>;

/// Outcome of one upstream call: the decoded body or a normalized failure.
pub type UpstreamResult = Result<serde_json::Value, ErrorResult>;

/// Errors raised while building a client. Request failures are never
/// raised; they come back as [`ErrorResult`] values.
#[derive(Debug, thiserror::Error)]
pub enum EStatError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Reason code attached to an [`ErrorResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// Upstream answered with a non-2xx status.
    Http(u16),
    /// The request exceeded the configured timeout.
    Timeout,
    /// DNS or TCP connection failure.
    ConnectionError,
    /// Anything else.
    UnknownError,
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(code) => write!(f, "{}", code),
            Self::Timeout => f.write_str("timeout"),
            Self::ConnectionError => f.write_str("connection_error"),
            Self::UnknownError => f.write_str("unknown_error"),
        }
    }
}

impl Serialize for ErrorStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalized failure record returned in place of an upstream body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
    pub status: ErrorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResult {
    pub fn http_status(code: u16) -> Self {
        Self {
            error: format!("HTTP error! status: {}", code),
            status: ErrorStatus::Http(code),
            details: None,
        }
    }

    pub fn timeout() -> Self {
        Self {
            error: "Request timeout. Please try again.".to_string(),
            status: ErrorStatus::Timeout,
            details: None,
        }
    }

    pub fn connection_error() -> Self {
        Self {
            error: "Cannot connect to e-Stat API. Please check your internet connection."
                .to_string(),
            status: ErrorStatus::ConnectionError,
            details: None,
        }
    }

    pub fn unknown(message: impl fmt::Display, details: impl Into<String>) -> Self {
        Self {
            error: format!("Error occurred: {}", message),
            status: ErrorStatus::UnknownError,
            details: Some(details.into()),
        }
    }

    /// Classify a transport error.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout()
        } else if error.is_connect() {
            Self::connection_error()
        } else {
            Self::unknown(error, error_chain(error))
        }
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.status)
    }
}

/// Render an error followed by its sources, separated by `: `.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_status_shape() {
        let result = ErrorResult::http_status(404);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "HTTP error! status: 404", "status": "404"})
        );
    }

    #[test]
    fn test_timeout_shape() {
        assert_eq!(
            serde_json::to_value(ErrorResult::timeout()).unwrap(),
            json!({"error": "Request timeout. Please try again.", "status": "timeout"})
        );
    }

    #[test]
    fn test_connection_error_shape() {
        assert_eq!(
            serde_json::to_value(ErrorResult::connection_error()).unwrap(),
            json!({
                "error": "Cannot connect to e-Stat API. Please check your internet connection.",
                "status": "connection_error"
            })
        );
    }

    #[test]
    fn test_unknown_error_carries_details() {
        let result = ErrorResult::unknown("boom", "io error: boom");

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "error": "Error occurred: boom",
                "status": "unknown_error",
                "details": "io error: boom"
            })
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("request failed")]
        struct Outer(#[source] std::io::Error);

        let inner = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");

        assert_eq!(error_chain(&Outer(inner)), "request failed: socket closed");
    }
}
