//! # Dictionary Server
//!
//! Read-only HTTP service over a local SQLite dictionary.
//!
//! Provides:
//! - A fixed-shape `dictionaryData` table, created on startup if absent
//! - A single `GET /gatherDictionaryData` route returning every row as JSON
//! - Permissive CORS so browser front-ends on any origin can read it

pub mod entry;
pub mod storage;
pub mod server;
pub mod config;

// Re-exports for convenient access
pub use entry::{DictionaryEntry, NewEntry};
pub use storage::SqliteStore;

use std::net::SocketAddr;
use std::path::PathBuf;

/// Result type alias for dictionary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dictionary operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open store at {}: {source}", path.display())]
    StoreInit {
        path: PathBuf,
        #[source]
        source: StoreInitCause,
    },

    #[error("Store query failed: {0}")]
    StoreQuery(#[from] rusqlite::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Why the backing store could not be created or opened
#[derive(Debug, thiserror::Error)]
pub enum StoreInitCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}
