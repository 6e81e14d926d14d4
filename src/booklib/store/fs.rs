use super::{decode_library, encode_library, LibraryStore, LoadedLibrary};
use crate::error::{BooklibError, Result};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const LIBRARY_FILENAME: &str = "library.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn library_path(&self) -> PathBuf {
        self.data_dir.join(LIBRARY_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            debug!(dir = %self.data_dir.display(), "creating data directory");
            fs::create_dir_all(&self.data_dir).map_err(BooklibError::Io)?;
        }
        Ok(())
    }

    /// Makes sure the library file exists, writing an empty list if needed.
    pub fn ensure_file(&self) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.library_path();
        if !path.exists() {
            debug!(path = %path.display(), "creating empty library file");
            self.write_atomic(&encode_library(&[])?)?;
        }
        Ok(path)
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let target = self.library_path();
        let write_error = |source| BooklibError::StorageWrite {
            path: target.clone(),
            source,
        };

        let tmp_file = self.data_dir.join(format!(".library-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(write_error(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(write_error(e));
        }
        Ok(())
    }
}

impl LibraryStore for FileStore {
    fn load(&mut self) -> Result<LoadedLibrary> {
        let path = self.ensure_file()?;
        let content = fs::read(&path).map_err(BooklibError::Io)?;
        decode_library(&content, &path)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let content = encode_library(books)?;
        self.ensure_dir().map_err(|e| match e {
            BooklibError::Io(source) => BooklibError::StorageWrite {
                path: self.library_path(),
                source,
            },
            other => other,
        })?;
        self.write_atomic(&content)?;
        debug!(books = books.len(), path = %self.library_path().display(), "library saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.library_path().display().to_string()
    }
}
