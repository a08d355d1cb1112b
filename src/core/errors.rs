//! Custom error types for AIWF client operations

use thiserror::Error;

/// Errors raised while talking to an AIWF server
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server answered with a non-200 status
    #[error("HTTP Error {status}: {body}")]
    Api {
        status: u16,
        body: String,
    },

    /// Connection could not be established or was dropped
    #[error("Network error: {message}")]
    Network {
        message: String,
    },

    /// Response body is not JSON
    #[error("Invalid JSON response: {body}")]
    InvalidJson {
        body: String,
    },

    /// Response JSON does not match the expected shape
    #[error("Unexpected response from agent {agent}: {message}")]
    Decode {
        agent: String,
        message: String,
    },

    /// Agent name cannot be used as a path segment
    #[error("Invalid agent name: {name:?}")]
    InvalidAgent {
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
