//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, reset, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body is not a valid response envelope
    #[error("Invalid response (status {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Network-level failure, as opposed to a local storage/config problem
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::InvalidResponse { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
