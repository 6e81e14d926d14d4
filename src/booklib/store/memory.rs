use super::{decode_library, encode_library, LibraryStore, LoadedLibrary};
use crate::error::{BooklibError, Result};
use crate::model::Book;
use std::io;
use std::path::Path;

const MEMORY_LOCATION: &str = "<memory>";

/// Keeps the serialized library in memory. Goes through the same encode and
/// decode path as [`super::fs::FileStore`], so tolerant loading can be tested
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw JSON, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            fail_writes: false,
        }
    }

    pub fn with_books(books: &[Book]) -> Result<Self> {
        Ok(Self::with_raw(encode_library(books)?))
    }

    /// Makes every following `save` fail, as a read-only disk would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&mut self) -> Result<LoadedLibrary> {
        if self.raw.is_none() {
            self.raw = Some(encode_library(&[])?);
        }
        let raw = self.raw.as_deref().unwrap_or_default();
        decode_library(raw.as_bytes(), Path::new(MEMORY_LOCATION))
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(BooklibError::StorageWrite {
                path: MEMORY_LOCATION.into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.raw = Some(encode_library(books)?);
        Ok(())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_initializes_empty_list() {
        let mut store = InMemoryStore::new();
        assert!(store.load().unwrap().library.is_empty());
        assert_eq!(store.raw().map(str::trim), Some("[]"));
    }

    #[test]
    fn failed_save_keeps_previous_contents() {
        let book = Book::new(1, "T", "A", 2000, None).unwrap();
        let mut store = InMemoryStore::with_books(&[book]).unwrap().failing_writes();
        let before = store.raw().unwrap().to_string();

        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, BooklibError::StorageWrite { .. }));
        assert_eq!(store.raw().unwrap(), before);
    }
}
