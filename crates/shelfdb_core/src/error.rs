//! Error types for catalog store operations.

use crate::storage::StorageError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in catalog store operations.
///
/// Both variants cover the fatal persistence path: a save that cannot
/// complete must surface, since silently continuing would desynchronize the
/// in-memory catalog from the persisted document. A missing or unparsable
/// document at load time is not an error - the store degrades to an empty
/// catalog and records a [`crate::LoadOutcome`] instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not read or write the document.
    #[error("persistence error: {0}")]
    Persist(#[from] StorageError),

    /// The catalog could not be serialized.
    #[error("catalog encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
