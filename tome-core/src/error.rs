//! Error types for Tome Core

use thiserror::Error;

/// Result type alias using TomeError
pub type Result<T> = std::result::Result<T, TomeError>;

/// Top-level error type for catalogue operations
///
/// The bucketer and sanitizer are total over their inputs; errors only come
/// from the catalogue's file persistence.
#[derive(Debug, Error)]
pub enum TomeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
