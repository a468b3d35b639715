//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, params};
use crate::{Result, Error, StoreInitCause};
use crate::entry::{DictionaryEntry, NewEntry};
use super::schema;

/// SQLite-backed storage for dictionary entries
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open a database file (creates it and the table if they don't exist).
    ///
    /// An existing table is left untouched; no migration is attempted.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::StoreInit {
                    path: path.to_path_buf(),
                    source: StoreInitCause::Io(e),
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|e| Error::StoreInit {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let store = Self { conn, path: Some(path.to_path_buf()) };
        store.initialize_schema()?;
        tracing::debug!("Store ready at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::StoreInit {
            path: PathBuf::from(":memory:"),
            source: e.into(),
        })?;
        let store = Self { conn, path: None };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, []).map_err(|e| Error::StoreInit {
                path: self.path.clone().unwrap_or_else(|| PathBuf::from(":memory:")),
                source: e.into(),
            })?;
        }
        Ok(())
    }

    /// Path of the backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ========== Entry Operations ==========

    /// Fetch every entry in id order
    pub fn fetch_all(&self) -> Result<Vec<DictionaryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, originalWord, definition, species, example, relation, story
             FROM dictionaryData
             ORDER BY id"
        )?;

        let entries = stmt
            .query_map([], |row| self.row_to_entry(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Insert a new entry, returning the assigned id.
    ///
    /// Used to provision fixtures; the HTTP surface never writes.
    pub fn insert_entry(&self, entry: &NewEntry) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO dictionaryData (originalWord, definition, species, example, relation, story)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                entry.original_word,
                entry.definition,
                entry.species,
                entry.example,
                entry.relation,
                entry.story,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Count all entries
    pub fn count_entries(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM dictionaryData", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Column names of the dictionary table, in declaration order
    pub fn table_columns(&self) -> Result<Vec<String>> {
        let sql = format!("PRAGMA table_info({})", schema::DICTIONARY_TABLE);
        let mut stmt = self.conn.prepare(&sql)?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(columns)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            entries: self.count_entries()?,
            path: self.path.clone(),
        })
    }

    /// Helper to convert a row to a DictionaryEntry
    fn row_to_entry(&self, row: &rusqlite::Row) -> rusqlite::Result<DictionaryEntry> {
        Ok(DictionaryEntry {
            id: row.get(0)?,
            original_word: row.get(1)?,
            definition: row.get(2)?,
            species: row.get(3)?,
            example: row.get(4)?,
            relation: row.get(5)?,
            story: row.get(6)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub entries: usize,
    pub path: Option<PathBuf>,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        match &self.path {
            Some(path) => writeln!(f, "  Path: {}", path.display())?,
            None => writeln!(f, "  Path: (in memory)")?,
        }
        writeln!(f, "  Entries: {}", self.entries)
    }
}
