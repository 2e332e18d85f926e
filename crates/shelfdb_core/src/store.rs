//! The book catalog store.

use crate::book::{Book, BookPatch};
use crate::config::Config;
use crate::error::StoreResult;
use crate::stats::ReadingStats;
use crate::storage::{CatalogBackend, FileBackend};
use tracing::{debug, warn};

/// Why a store started with an empty catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No persisted document existed yet.
    NoDocument,
    /// A document existed but could not be parsed; its contents were ignored.
    Unparsable,
}

/// The result of loading the persisted document at construction.
///
/// Distinguishes "no books yet" from "the document was corrupt" even though
/// both yield the same observable empty catalog. Neither is an error: the
/// store degrades silently and this outcome is the only trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The persisted document parsed cleanly.
    Loaded {
        /// Number of books loaded.
        books: usize,
    },
    /// The store started empty.
    StartedEmpty {
        /// Why no books were loaded.
        reason: EmptyReason,
    },
}

impl LoadOutcome {
    /// True when an existing document had to be discarded as unparsable.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            Self::StartedEmpty {
                reason: EmptyReason::Unparsable
            }
        )
    }
}

/// An ordered book catalog synchronized to a persisted document.
///
/// `BookStore` owns the in-memory sequence of [`Book`] records and a storage
/// backend. The sequence is populated once at construction and rewritten to
/// the backend after every successful mutation, so the persisted document
/// always equals the serialization of the current sequence. Insertion order
/// is preserved; it is the display order.
///
/// Title is the lookup key for [`delete`](Self::delete) and
/// [`update`](Self::update): case-insensitive exact match, first match in
/// stored order, duplicates allowed.
///
/// # Example
///
/// ```rust
/// use shelfdb_core::storage::MemoryBackend;
/// use shelfdb_core::{Book, BookStore};
///
/// let mut store = BookStore::with_backend(Box::new(MemoryBackend::new())).unwrap();
/// store.add(Book::new("Dune", "Frank Herbert", "1965", "Science Fiction", true)).unwrap();
///
/// assert_eq!(store.list().len(), 1);
/// assert_eq!(store.stats().completion_rate(), 100.0);
/// ```
pub struct BookStore {
    /// The catalog, in insertion order.
    books: Vec<Book>,
    /// Persistence backend.
    backend: Box<dyn CatalogBackend>,
    /// How the initial load went.
    load_outcome: LoadOutcome,
}

impl BookStore {
    /// Opens a store over the catalog file named by `config`.
    ///
    /// A missing or unparsable document is not an error: the store starts
    /// empty and records the fact in [`load_outcome`](Self::load_outcome).
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created, or if the
    /// document exists but cannot be read (for example, permissions).
    pub fn open(config: Config) -> StoreResult<Self> {
        let backend = if config.create_parent_dirs {
            FileBackend::with_create_dirs(config.path)?
        } else {
            FileBackend::new(config.path)
        };
        Self::with_backend(Box::new(backend))
    }

    /// Opens a store over an arbitrary backend.
    ///
    /// This is the injectable constructor used by tests and ephemeral
    /// catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read an existing document.
    pub fn with_backend(backend: Box<dyn CatalogBackend>) -> StoreResult<Self> {
        let (books, load_outcome) = match backend.read()? {
            None => (
                Vec::new(),
                LoadOutcome::StartedEmpty {
                    reason: EmptyReason::NoDocument,
                },
            ),
            Some(document) => match serde_json::from_slice::<Vec<Book>>(&document) {
                Ok(books) => {
                    debug!(books = books.len(), "catalog loaded");
                    let outcome = LoadOutcome::Loaded { books: books.len() };
                    (books, outcome)
                }
                Err(err) => {
                    warn!(%err, "catalog document is unparsable, starting empty");
                    (
                        Vec::new(),
                        LoadOutcome::StartedEmpty {
                            reason: EmptyReason::Unparsable,
                        },
                    )
                }
            },
        };

        Ok(Self {
            books,
            backend,
            load_outcome,
        })
    }

    /// Returns how the initial load went.
    #[must_use]
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Appends a book to the catalog and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be persisted.
    pub fn add(&mut self, book: Book) -> StoreResult<()> {
        debug!(title = %book.title, "adding book");
        self.books.push(book);
        self.save()
    }

    /// Removes the first book whose title matches `title` case-insensitively.
    ///
    /// Returns `true` if a book was removed. At most one book is removed per
    /// call, even when duplicates share the title. When nothing matches, the
    /// catalog is untouched and nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be persisted after a removal.
    pub fn delete(&mut self, title: &str) -> StoreResult<bool> {
        let Some(position) = self.books.iter().position(|b| b.title_matches(title)) else {
            return Ok(false);
        };

        let removed = self.books.remove(position);
        debug!(title = %removed.title, "deleted book");
        self.save()?;
        Ok(true)
    }

    /// Updates the first book whose title matches `title` case-insensitively.
    ///
    /// Fields left empty in the patch keep their current values; see
    /// [`Book::apply`]. Returns `true` if a book was updated. When nothing
    /// matches, the catalog is untouched and nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be persisted after the update.
    pub fn update(&mut self, title: &str, patch: BookPatch) -> StoreResult<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.title_matches(title)) else {
            return Ok(false);
        };

        book.apply(patch);
        debug!(title = %book.title, "updated book");
        self.save()?;
        Ok(true)
    }

    /// Returns every book whose title or author contains `query`
    /// case-insensitively, in stored order.
    ///
    /// Both fields are always searched; an empty result is a valid outcome,
    /// not an error.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.matches_query(&needle))
            .collect()
    }

    /// Returns the full catalog in stored order.
    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true when the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the current reading statistics.
    #[must_use]
    pub fn stats(&self) -> ReadingStats {
        let read = self.books.iter().filter(|book| book.read).count();
        ReadingStats {
            total: self.books.len(),
            read,
        }
    }

    /// Saves the current catalog even when nothing changed.
    ///
    /// Mutations already save; this exists for an explicit final flush at
    /// shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be persisted.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.save()
    }

    /// Serializes the full catalog and replaces the persisted document.
    fn save(&mut self) -> StoreResult<()> {
        let document = serde_json::to_vec_pretty(&self.books)?;
        self.backend.write(&document)?;
        debug!(books = self.books.len(), "catalog saved");
        Ok(())
    }
}

impl std::fmt::Debug for BookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books.len())
            .field("load_outcome", &self.load_outcome)
            .finish_non_exhaustive()
    }
}
