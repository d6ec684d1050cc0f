//! Persistence seam for the report collection.

use crate::Report;
use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by report store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (connect failure, timeout, TLS, ...)
    #[error("store request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store answered with a non-success status
    #[error("store returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the store
        message: String,
    },

    /// The document could not be (de)serialized
    #[error("malformed store document: {0}")]
    Document(#[from] serde_json::Error),

    /// Configuration error
    #[error("store configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

impl StoreError {
    /// Wrap a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Create an API response error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error.
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }
}

/// Full-document persistence for the report collection.
///
/// Both operations move the whole collection at once: `load` reads the
/// entire document, `save` replaces it wholesale. There is no partial
/// update and no version check, so concurrent writers race last-write-wins
/// at the remote store. Implementations do not retry.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Reads the complete report collection.
    async fn load(&self) -> StoreResult<Vec<Report>>;

    /// Replaces the persisted collection with `reports`.
    async fn save(&self, reports: &[Report]) -> StoreResult<()>;
}
