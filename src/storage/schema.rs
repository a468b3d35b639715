//! Database schema definitions

/// Name of the only table
pub const DICTIONARY_TABLE: &str = "dictionaryData";

/// SQL to create the dictionary table.
/// No timestamp columns; the text columns carry no constraints.
pub const CREATE_DICTIONARY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS dictionaryData (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    originalWord VARCHAR(255),
    definition VARCHAR(255),
    species VARCHAR(255),
    example VARCHAR(255),
    relation VARCHAR(255),
    story VARCHAR(255)
)
"#;

/// Columns of the dictionary table, in declaration order
pub const DICTIONARY_COLUMNS: &[&str] = &[
    "id",
    "originalWord",
    "definition",
    "species",
    "example",
    "relation",
    "story",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_DICTIONARY_TABLE]
}
