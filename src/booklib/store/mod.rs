//! # Storage Layer
//!
//! The [`LibraryStore`] trait is the persistence boundary: the whole collection
//! is loaded at the start of a run and written back in full at the end.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in `<data dir>/library.json`
//!   - Created (with an empty list) on first load
//!   - Saved through a temp file + rename so a failed write never clobbers
//!     the previous contents
//!
//! - [`memory::InMemoryStore`]: keeps the serialized JSON in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── library.json   # Pretty-printed JSON array of books, keys sorted
//! └── config.json    # Optional configuration
//! ```
//!
//! ## Tolerant Loading
//!
//! The file as a whole must be valid JSON holding an array, otherwise loading
//! fails with [`BooklibError::CorruptStorage`]. Individual entries are decoded
//! one by one; an entry that is malformed, fails validation or repeats an
//! earlier id is skipped and reported in [`LoadedLibrary::skipped`].

use crate::error::{BooklibError, Result};
use crate::library::Library;
use crate::model::Book;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// An entry that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the stored array.
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadedLibrary {
    pub library: Library,
    pub skipped: Vec<SkippedRecord>,
}

/// Abstract interface for library persistence.
pub trait LibraryStore {
    /// Load every readable book, creating empty storage if there is none.
    fn load(&mut self) -> Result<LoadedLibrary>;

    /// Replace the stored library with `books`, all or nothing.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human readable location of the storage, for messages.
    fn location(&self) -> String;
}

/// Invalid UTF-8 is reported as corrupt storage, like any other parse error.
pub(crate) fn decode_library(raw: &[u8], source: &Path) -> Result<LoadedLibrary> {
    let corrupt = |reason: String| BooklibError::CorruptStorage {
        path: source.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_slice(raw).map_err(|e| corrupt(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(corrupt("expected a JSON list of books".to_string()));
    };

    let mut loaded = LoadedLibrary::default();
    let mut seen = HashSet::new();

    for (position, entry) in entries.into_iter().enumerate() {
        let reason = match serde_json::from_value::<Book>(entry) {
            Ok(book) if seen.insert(book.id()) => {
                loaded.library.push(book);
                continue;
            }
            Ok(book) => format!("duplicate id {}", book.id()),
            Err(e) => e.to_string(),
        };
        warn!(position, %reason, "skipping malformed book entry");
        loaded.skipped.push(SkippedRecord { position, reason });
    }

    debug!(
        books = loaded.library.len(),
        skipped = loaded.skipped.len(),
        source = %source.display(),
        "library decoded"
    );
    Ok(loaded)
}

pub(crate) fn encode_library(books: &[Book]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(books)?;
    content.push('\n');
    Ok(content)
}
