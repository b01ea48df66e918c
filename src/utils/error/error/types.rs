//! Error types for the relay

use crate::core::invite::{BatchError, StoreError};
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Invitation store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream system-of-record errors
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// One or more invitations in a batch failed
    #[error("{0}")]
    Batch(#[from] BatchError),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Migration errors
    #[error("Migration error: {0}")]
    Migration(String),
}
