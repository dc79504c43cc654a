//! Error types.

use thiserror::Error;

/// Failure of a printing-details retrieval.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// No access token in storage.
    #[error("missing credential: no access token stored under '{key}'")]
    MissingCredential { key: String },

    /// The API answered with a non-success HTTP status.
    #[error("fetch failed with HTTP status {status}")]
    Transport { status: u16 },

    /// The response body did not have the expected shape.
    #[error("unexpected response format: {0}")]
    Format(String),

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RetrievalError {
    /// Whether this is an authentication problem (missing token or 401/403).
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            RetrievalError::MissingCredential { .. }
                | RetrievalError::Transport { status: 401 | 403 }
        )
    }
}

/// Failure of the key-value storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
pub type StoreResult<T> = Result<T, StoreError>;
