//! Error types for hcademo
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DemoError
pub type Result<T> = std::result::Result<T, DemoError>;

/// Unified error type for dataset generation and lookup
#[derive(Debug, Error)]
pub enum DemoError {
    // -------------------------------------------------------------------------
    // Parameter Errors
    // -------------------------------------------------------------------------
    /// A count, name or distribution parameter was rejected before any work began
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    /// A content key is already taken by an object holding different samples
    #[error("Storage conflict at {container}/{object}: {reason}")]
    StorageConflict {
        container: String,
        object: String,
        reason: String,
    },

    /// The blob store refused or failed a call
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Object not found: {container}/{object}")]
    ObjectNotFound { container: String, object: String },

    #[error("Sample not indexed: {0}")]
    SampleNotFound(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Concurrency Errors
    // -------------------------------------------------------------------------
    #[error("Worker failed: {0}")]
    Worker(String),
}

impl DemoError {
    /// Shorthand for an [`DemoError::InvalidParameter`]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DemoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for errors that abort a run because of a key collision
    pub fn is_conflict(&self) -> bool {
        matches!(self, DemoError::StorageConflict { .. })
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::Serialization(err.to_string())
    }
}
