//! Error types for ordr
//!
//! Centralized error handling using thiserror.
//!
//! A missing order is not an error: `update` returns `Ok(None)` and `delete`
//! returns `Ok(false)`. The caller decides what absence means.

use thiserror::Error;

/// All error types that can occur in ordr
#[derive(Debug, Error)]
pub enum OrdrError {
    /// Input rejected before it reached the store
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The orders file header line does not match the expected schema
    #[error("Unexpected CSV header in orders file: {found:?}")]
    SchemaMismatch {
        /// The header line actually present in the file
        found: String,
    },

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML config parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ordr operations
pub type Result<T> = std::result::Result<T, OrdrError>;
