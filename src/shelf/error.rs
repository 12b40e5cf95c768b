use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Index out of bounds: {index} (catalog holds {len} books)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Malformed snapshot at {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write snapshot at {}: {source}", path.display())]
    Persistence {
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

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
