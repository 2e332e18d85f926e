//! Whole-document storage backends.
//!
//! Backends are **opaque document stores** - they hold a single byte
//! document and do not interpret it. The store owns all catalog format
//! interpretation; backends only read the whole document and replace it
//! wholesale.
//!
//! ## Available backends
//!
//! - [`FileBackend`] - one file on disk, replaced atomically on every write
//! - [`MemoryBackend`] - in-process buffer for tests and ephemeral catalogs
//!
//! ## Example
//!
//! ```rust
//! use shelfdb_core::storage::{CatalogBackend, MemoryBackend};
//!
//! let mut backend = MemoryBackend::new();
//! assert!(backend.read().unwrap().is_none());
//! backend.write(b"[]").unwrap();
//! assert_eq!(backend.read().unwrap().as_deref(), Some(&b"[]"[..]));
//! ```

mod backend;
mod error;
mod file;
mod memory;

pub use backend::CatalogBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
