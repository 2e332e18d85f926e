//! The book record and its update semantics.

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// The title is the lookup key for delete and update operations, matched
/// case-insensitively against the first record in stored order. Titles are
/// not unique; duplicates may coexist.
///
/// `year` is deliberately text and unvalidated - the catalog stores whatever
/// the user typed, numeric or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Publication year, stored as text.
    pub year: String,
    /// Genre label.
    pub genre: String,
    /// Whether the user has read the book.
    pub read: bool,
}

impl Book {
    /// Creates a new book record.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Returns true if this book's title equals `title` case-insensitively.
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Returns true if the title or author contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased; both fields are matched
    /// regardless of which one the caller nominally searches.
    #[must_use]
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.author.to_lowercase().contains(needle_lower)
    }

    /// Applies a field-update set to this book.
    ///
    /// For each text field, `None` or an empty replacement keeps the current
    /// value. For the read flag, `None` keeps the current value.
    pub fn apply(&mut self, patch: BookPatch) {
        apply_text(&mut self.title, patch.title);
        apply_text(&mut self.author, patch.author);
        apply_text(&mut self.year, patch.year);
        apply_text(&mut self.genre, patch.genre);
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

fn apply_text(field: &mut String, replacement: Option<String>) {
    if let Some(value) = replacement {
        if !value.is_empty() {
            *field = value;
        }
    }
}

/// A keep-or-replace update set for [`Book::apply`].
///
/// Text fields: `None` or `Some("")` keeps the current value, anything else
/// replaces it. Read flag: `None` keeps, `Some(flag)` replaces. Use
/// [`read_flag_from_answer`] to derive the read flag from a free-text
/// yes/no answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement author.
    pub author: Option<String>,
    /// Replacement year.
    pub year: Option<String>,
    /// Replacement genre.
    pub genre: Option<String>,
    /// Replacement read flag.
    pub read: Option<bool>,
}

impl BookPatch {
    /// Creates an empty patch that keeps every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Interprets a free-text answer to "Have you read this book? (yes/no)".
///
/// An empty (after trimming) answer means "keep the current value" and
/// yields `None`. Any other answer yields `Some(true)` only when it equals
/// "yes" case-insensitively; every other non-empty answer, typos included,
/// yields `Some(false)`.
#[must_use]
pub fn read_flag_from_answer(answer: &str) -> Option<bool> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.eq_ignore_ascii_case("yes"))
    }
}
