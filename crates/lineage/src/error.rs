//! Error types for lineage operations.
//!
//! The engine itself only fails on caller mistakes: an unknown root or impact
//! target, or invalid options. Partial lineage data (edges pointing at assets
//! that were not loaded) is skipped, not reported as an error. The remaining
//! variants come from loading records and configuration from disk.

use std::io;
use thiserror::Error;

use crate::domain::AssetId;

/// Result type for lineage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for lineage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Root or impact target is not present
    #[error("asset not found: {0}")]
    AssetNotFound(AssetId),

    /// Build options or arguments failed validation
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Configuration file could not be parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
