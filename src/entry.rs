//! Dictionary entry types
//!
//! A `DictionaryEntry` is one row of the `dictionaryData` table. Every text
//! column is nullable; only `id` is guaranteed to be present.

use serde::{Deserialize, Serialize};

/// A persisted dictionary row.
///
/// Field order is the JSON key order: `id, originalWord, definition,
/// species, example, relation, story`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: i64,
    pub original_word: Option<String>,
    pub definition: Option<String>,
    pub species: Option<String>,
    pub example: Option<String>,
    pub relation: Option<String>,
    pub story: Option<String>,
}

/// A row that has not been stored yet (no id assigned).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub original_word: Option<String>,
    pub definition: Option<String>,
    pub species: Option<String>,
    pub example: Option<String>,
    pub relation: Option<String>,
    pub story: Option<String>,
}

impl NewEntry {
    /// Build an entry with every field set
    pub fn new(
        original_word: impl Into<String>,
        definition: impl Into<String>,
        species: impl Into<String>,
        example: impl Into<String>,
        relation: impl Into<String>,
        story: impl Into<String>,
    ) -> Self {
        Self {
            original_word: Some(original_word.into()),
            definition: Some(definition.into()),
            species: Some(species.into()),
            example: Some(example.into()),
            relation: Some(relation.into()),
            story: Some(story.into()),
        }
    }

    /// Attach the id the store assigned
    pub fn with_id(self, id: i64) -> DictionaryEntry {
        DictionaryEntry {
            id,
            original_word: self.original_word,
            definition: self.definition,
            species: self.species,
            example: self.example,
            relation: self.relation,
            story: self.story,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys_in_column_order() {
        let entry = NewEntry::new(
            "cromulent",
            "fine, acceptable",
            "adjective",
            "that's a perfectly cromulent word",
            "embiggen",
            "",
        )
        .with_id(1);

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"originalWord":"cromulent","definition":"fine, acceptable","species":"adjective","example":"that's a perfectly cromulent word","relation":"embiggen","story":""}"#
        );
    }

    #[test]
    fn test_null_columns_serialize_as_null() {
        let entry = NewEntry {
            original_word: Some("snark".to_string()),
            ..Default::default()
        }
        .with_id(7);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["originalWord"], "snark");
        assert!(value["definition"].is_null());
        assert!(value["story"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 7);
    }
}
