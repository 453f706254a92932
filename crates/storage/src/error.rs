//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (backend unreachable, rejected
//! key, query failure) instead of downcasting opaque boxes. Statistics
//! failures must never take down the reading experience, so the HTTP layer
//! inspects these variants to decide between degrading and failing.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing database cannot be opened, or no pooled connection is
    /// available within the pool timeout.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] r2d2::Error),

    /// Empty `category` or `title`; rejected before any storage access.
    #[error("invalid key: {field} must not be empty")]
    InvalidKey { field: &'static str },

    /// SQL execution or commit failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
