//! Error types for the API layer and the storage backends.

use thiserror::Error;

/// Failure of a call to one of the remote services.
///
/// The variants carry what the transport produced without interpreting it:
/// no retries happen and no status code gets special treatment.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered with a non-2xx status. `body` is the raw text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// A 2xx body that does not have the expected shape.
    #[error("unexpected response body: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Failure of a persistent storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}
