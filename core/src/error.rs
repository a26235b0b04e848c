//! Error types for the todo API client.
//!
//! # Design
//! The facade does not invent a domain taxonomy. A call either produced a
//! response with a non-2xx status (`Status`, carrying the raw status and
//! body) or never produced a response at all (`Transport`). Callers that
//! care about specific codes inspect `status()`.

use thiserror::Error;

/// Errors returned by `TodoApi` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received (connection refused, DNS, IO, bad URL).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A response body could not be decoded by `HttpResponse::json`.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
