use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BooklibError {
    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("Unknown sort key: {0} (expected one of: id, title, author, year, genre)")]
    InvalidSortKey(String),

    #[error("Library file {path} is corrupt: {reason}. Fix or remove the file and try again.")]
    CorruptStorage { path: PathBuf, reason: String },

    #[error("Could not write library file {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BooklibError>;
