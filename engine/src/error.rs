//! Error handling for the analysis engine
//!
//! The analysis path itself never fails: unmatched foods, empty candidate
//! lists and malformed geometry are all reported inside the output, not as
//! errors. Errors only arise when building a catalog from untrusted data.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Food catalog contains no records")]
    EmptyCatalog,

    #[error("Duplicate food key: {0}")]
    DuplicateKey(String),

    #[error("Invalid food record '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("Malformed catalog data: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
