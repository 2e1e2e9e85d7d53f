//! Telemetry API errors

use thiserror::Error;

/// Errors that can occur while talking to the telemetry API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// Body did not match the expected records
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },

    /// Request succeeded with zero records
    #[error("No {what} available")]
    Empty { what: String },

    /// A spawned request task panicked or was cancelled
    #[error("Request task failed: {0}")]
    TaskFailed(String),

    /// Any other failure
    #[error("API error: {0}")]
    Other(String),
}

impl ApiError {
    /// Build an empty-result error for a kind of record
    pub fn empty(what: impl Into<String>) -> Self {
        ApiError::Empty { what: what.into() }
    }

    /// True when the remote answered but had no records
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ApiError::Empty { .. })
    }
}
