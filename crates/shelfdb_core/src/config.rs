//! Store configuration.

use std::path::PathBuf;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "books_data.json";

/// Configuration for opening a [`crate::BookStore`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the catalog document.
    pub path: PathBuf,

    /// Whether to create missing parent directories on open.
    pub create_parent_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
            create_parent_dirs: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog document path.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets whether missing parent directories are created on open.
    #[must_use]
    pub const fn create_parent_dirs(mut self, value: bool) -> Self {
        self.create_parent_dirs = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_CATALOG_FILE));
        assert!(config.create_parent_dirs);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .path("library/catalog.json")
            .create_parent_dirs(false);

        assert_eq!(config.path, PathBuf::from("library/catalog.json"));
        assert!(!config.create_parent_dirs);
    }
}
