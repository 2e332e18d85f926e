//! Storage backend trait definition.

use crate::storage::StorageResult;

/// A whole-document storage backend.
///
/// Backends are **opaque document stores**. They hold at most one byte
/// document and expose exactly two operations: read the whole document and
/// replace it wholesale. The catalog store owns all format interpretation -
/// backends do not understand books or JSON.
///
/// # Invariants
///
/// - `read` after a successful `write` returns exactly the bytes written
/// - `write` replaces the entire document; there is no append or partial
///   update
/// - A backend with no document yet reads as `None`, not as an error
///
/// # Implementors
///
/// - [`super::FileBackend`] - persistent storage
/// - [`super::MemoryBackend`] - for testing
pub trait CatalogBackend: Send + std::fmt::Debug {
    /// Reads the current document.
    ///
    /// Returns `None` when no document has been written yet (for a file
    /// backend, when the file does not exist).
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read.
    fn read(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the document with `document`.
    ///
    /// After this returns successfully, a subsequent `read` returns exactly
    /// these bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn write(&mut self, document: &[u8]) -> StorageResult<()>;
}
