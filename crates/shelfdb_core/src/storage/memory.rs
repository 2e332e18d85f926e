//! In-memory storage backend for testing.

use super::backend::CatalogBackend;
use super::error::StorageResult;

/// An in-memory storage backend.
///
/// Holds the document in a plain buffer. Suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral catalogs that don't need persistence
///
/// # Example
///
/// ```rust
/// use shelfdb_core::storage::{CatalogBackend, MemoryBackend};
///
/// let mut backend = MemoryBackend::new();
/// backend.write(b"[]").unwrap();
/// assert_eq!(backend.document(), Some(&b"[]"[..]));
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Option<Vec<u8>>,
}

impl MemoryBackend {
    /// Creates a new backend with no document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding a pre-existing document.
    ///
    /// Useful for testing load behavior against prepared contents.
    #[must_use]
    pub fn with_document(document: Vec<u8>) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Returns the current document, if any.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn document(&self) -> Option<&[u8]> {
        self.document.as_deref()
    }

    /// Drops the document, returning the backend to its initial state.
    pub fn clear(&mut self) {
        self.document = None;
    }
}

impl CatalogBackend for MemoryBackend {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &[u8]) -> StorageResult<()> {
        self.document = Some(document.to_vec());
        Ok(())
    }
}
