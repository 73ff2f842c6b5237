use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to callers for every local or transport failure.
pub const GENERIC_REQUEST_FAILURE: &str = "An error occurred during your request.";

/// Errors raised by a chat completion client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The endpoint answered, but with an error status.
    #[error("Remote endpoint returned status {status}: {payload}")]
    Remote {
        status: u16,
        payload: serde_json::Value,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn remote(status: u16, payload: serde_json::Value) -> Self {
        Error::Remote { status, payload }
    }

    /// Status and payload of the structured remote response, if there is one.
    pub fn remote_response(&self) -> Option<(u16, &serde_json::Value)> {
        match self {
            Error::Remote { status, payload } => Some((*status, payload)),
            _ => None,
        }
    }
}

/// Normalized failure surfaced to callers of the completion service.
///
/// Serializes as `{"error": {"message": "..."}}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .error.message)]
pub struct ServiceError {
    pub error: ServiceErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ServiceErrorBody {
                message: message.into(),
            },
        }
    }

    /// The error every unstructured failure collapses into.
    pub fn request_failed() -> Self {
        Self::new(GENERIC_REQUEST_FAILURE)
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }
}
