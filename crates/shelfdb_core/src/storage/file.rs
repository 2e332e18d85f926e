//! File-based storage backend for persistent catalogs.

use super::backend::CatalogBackend;
use super::error::{StorageError, StorageResult};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A file-based storage backend.
///
/// The document lives in a single file. Every write replaces the file
/// contents wholesale: the new document is written to a temporary file in
/// the same directory, synced, and renamed over the target, so a crash
/// mid-write leaves the previous document intact ("last full write wins").
///
/// A missing file is not an error - it reads as `None`, the way a catalog
/// that has never been saved should.
///
/// # Example
///
/// ```no_run
/// use shelfdb_core::storage::{CatalogBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::new(Path::new("books_data.json"));
/// backend.write(b"[]").unwrap();
/// assert!(backend.read().unwrap().is_some());
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the document at `path`.
    ///
    /// The file itself is not touched until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a backend for `path`, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_create_dirs(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> StorageResult<PathBuf> {
        let Some(name) = self.path.file_name() else {
            return Err(StorageError::InvalidPath(self.path.display().to_string()));
        };
        let mut temp_name = name.to_owned();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

impl CatalogBackend for FileBackend {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&mut self, document: &[u8]) -> StorageResult<()> {
        let temp = self.temp_path()?;

        let mut file = File::create(&temp)?;
        file.write_all(document)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("catalog.json"));

        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("catalog.json"));

        backend.write(b"[{\"title\":\"Dune\"}]").unwrap();
        let document = backend.read().unwrap();
        assert_eq!(document.as_deref(), Some(&b"[{\"title\":\"Dune\"}]"[..]));
    }

    #[test]
    fn write_replaces_the_whole_document() {
        let dir = tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("catalog.json"));

        backend.write(b"first document, quite long").unwrap();
        backend.write(b"second").unwrap();

        assert_eq!(backend.read().unwrap().as_deref(), Some(&b"second"[..]));
    }

    #[test]
    fn document_survives_backend_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        {
            let mut backend = FileBackend::new(&path);
            backend.write(b"persistent").unwrap();
        }

        let backend = FileBackend::new(&path);
        assert_eq!(backend.read().unwrap().as_deref(), Some(&b"persistent"[..]));
    }

    #[test]
    fn temp_file_is_not_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut backend = FileBackend::new(&path);
        backend.write(b"data").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec!["catalog.json"]);
    }

    #[test]
    fn create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("library").join("catalog.json");

        let mut backend = FileBackend::with_create_dirs(&path).unwrap();
        backend.write(b"[]").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn write_to_path_without_file_name_fails() {
        let mut backend = FileBackend::new("/");
        let result = backend.write(b"[]");
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }

    #[test]
    fn path_accessor() {
        let backend = FileBackend::new("library/catalog.json");
        assert_eq!(backend.path(), Path::new("library/catalog.json"));
    }
}
