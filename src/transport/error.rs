//! Transport error types

use serde::Deserialize;
use thiserror::Error;

/// Errors raised by a transport call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request never got a response (unreachable host, refused, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Body of a non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl RequestError {
    /// A failed read. The body is never consulted.
    pub fn read_failed(path: &str, status: u16) -> Self {
        Self::Status {
            status,
            message: format!("GET {} failed: {}", path, status),
        }
    }

    /// A failed write, preferring the server's `error` message
    pub fn write_failed(path: &str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("POST {} failed: {}", path, status));

        Self::Status { status, message }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}
