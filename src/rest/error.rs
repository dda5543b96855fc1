//! REST client errors

use std::time::Duration;
use thiserror::Error;

/// Failures while talking to the exchange over HTTP
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The exchange did not answer within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Connection, TLS or protocol failure
    #[error("Network error: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },
    /// The response body was not JSON
    #[error("HTTP {status}: response body is not JSON: {body}")]
    InvalidBody { status: u16, body: String },
}

impl TransportError {
    /// HTTP status code, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Timeout(_) => None,
            TransportError::Network { status, .. } => *status,
            TransportError::InvalidBody { status, .. } => Some(*status),
        }
    }
}

/// Error returned by every client call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RestError {
    /// Missing or invalid credentials or client settings; nothing was sent
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Arguments rejected before the request was signed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The exchange answered with `success: false`
    #[error("API error: {message}")]
    Api { message: String },
    /// The result could not be mapped onto the requested type
    #[error("Failed to decode result: {0}")]
    Decode(String),
}

impl RestError {
    pub fn api(message: impl Into<String>) -> Self {
        RestError::Api {
            message: message.into(),
        }
    }

    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RestError::Configuration(_) => "configuration_error",
            RestError::InvalidRequest(_) => "invalid_request",
            RestError::Transport(TransportError::Timeout(_)) => "timeout",
            RestError::Transport(_) => "transport_error",
            RestError::Api { .. } => "api_error",
            RestError::Decode(_) => "decode_error",
        }
    }

    /// HTTP status code carried by transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Transport(TransportError::Timeout(_)))
    }
}

pub type Result<T> = std::result::Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status() {
        let err = TransportError::InvalidBody {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(TransportError::Timeout(Duration::from_secs(1)).status(), None);
    }

    #[test]
    fn test_rest_error_kind() {
        let timeout: RestError = TransportError::Timeout(Duration::from_millis(10)).into();
        assert_eq!(timeout.kind(), "timeout");
        assert!(timeout.is_timeout());

        assert_eq!(RestError::api("Invalid parameter").kind(), "api_error");
        assert_eq!(
            RestError::Configuration("no secret".into()).kind(),
            "configuration_error"
        );
    }

    #[test]
    fn test_rest_error_display() {
        let err = RestError::api("Not enough balances");
        assert_eq!(err.to_string(), "API error: Not enough balances");

        let err: RestError = TransportError::InvalidBody {
            status: 502,
            body: "<html>".to_string(),
        }
        .into();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("HTTP 502"));
    }
}
