//! Storage Layer - SQLite-backed persistence
//!
//! A single table:
//! - dictionaryData(id, originalWord, definition, species, example, relation, story)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, DbStats};
