//! Core types for the daily vocabulary drill.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EntryError, Result};

/// One definition of a word, optionally with a usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Definition {
    pub fn new(definition: impl Into<String>, example: Option<String>) -> Self {
        Self {
            definition: definition.into(),
            example: example.filter(|e| !e.is_empty()),
        }
    }
}

/// Entry from the local word corpus (`words.json`).
///
/// Corpus files usually carry a single flat `definition`; a structured
/// `definitions` list is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub word: String,
    #[serde(default, rename = "pos", alias = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Dictionary API entry (subset of the dictionaryapi.dev schema).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<RemotePhonetic>,
    #[serde(default)]
    pub meanings: Vec<RemoteMeaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePhonetic {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMeaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<RemoteDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Canonical word entry, the single schema stored in `entry_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalWordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default, rename = "pos")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl CanonicalWordEntry {
    /// Decode an entry from its stored JSON form.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(EntryError::Decode)
    }

    /// Encode the entry for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(EntryError::Encode)
    }

    /// Whether the quiz can run on this entry.
    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// First definition text, or empty if none.
    pub fn primary_definition(&self) -> &str {
        self.definitions
            .first()
            .map(|d| d.definition.as_str())
            .unwrap_or("")
    }

    /// All usage examples across definitions.
    pub fn examples(&self) -> Vec<String> {
        self.definitions
            .iter()
            .filter_map(|d| d.example.clone())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

/// Persisted row for a word that has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub date_shown: NaiveDate,
    pub date_completed: Option<NaiveDate>,
    /// Raw stored entry JSON; may be stale or missing.
    pub entry_data: Option<String>,
    pub user_notes: String,
    pub quiz_attempts: u32,
    pub quiz_passed: bool,
}

impl WordRecord {
    /// Decode the stored entry, tolerating absent or malformed data.
    ///
    /// Anything undecodable comes back as an entry carrying only the
    /// record's word, so callers see it as lacking definitions.
    pub fn decode_entry(&self) -> CanonicalWordEntry {
        let decoded = self
            .entry_data
            .as_deref()
            .filter(|data| !data.trim().is_empty())
            .and_then(|data| CanonicalWordEntry::from_json(data).ok());

        match decoded {
            Some(mut entry) => {
                if entry.word.is_empty() {
                    entry.word = self.word.clone();
                }
                entry
            }
            None => CanonicalWordEntry {
                word: self.word.clone(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(entry_data: Option<&str>) -> WordRecord {
        WordRecord {
            word: "ephemeral".to_string(),
            date_shown: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            date_completed: None,
            entry_data: entry_data.map(str::to_string),
            user_notes: String::new(),
            quiz_attempts: 0,
            quiz_passed: false,
        }
    }

    #[test]
    fn test_corpus_entry_accepts_pos_key() {
        let entry: CorpusEntry = serde_json::from_str(
            r#"{"word": "cogent", "pos": "adjective", "definition": "clear and convincing",
                "synonyms": ["compelling"]}"#,
        )
        .unwrap();
        assert_eq!(entry.part_of_speech, "adjective");
        assert_eq!(entry.definition.as_deref(), Some("clear and convincing"));
        assert!(entry.definitions.is_empty());
    }

    #[test]
    fn test_remote_entry_camel_case() {
        let entry: RemoteEntry = serde_json::from_str(
            r#"{"word": "test", "phonetics": [{"text": "/tɛst/"}, {}],
                "meanings": [{"partOfSpeech": "noun",
                              "definitions": [{"definition": "a trial"}],
                              "synonyms": ["trial"]}]}"#,
        )
        .unwrap();
        assert_eq!(entry.phonetics.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(entry.meanings[0].definitions[0].example, None);
    }

    #[test]
    fn test_canonical_entry_keeps_stored_field_names() {
        let entry = CanonicalWordEntry {
            word: "cogent".to_string(),
            phonetic: String::new(),
            part_of_speech: "adjective".to_string(),
            definitions: vec![Definition::new("clear and convincing", None)],
            synonyms: vec![],
        };
        let json = entry.to_json().unwrap();
        assert!(json.contains(r#""pos":"adjective""#));
        assert!(!json.contains("example"));
        assert_eq!(CanonicalWordEntry::from_json(&json).unwrap(), entry);
    }

    #[test]
    fn test_examples_skip_missing() {
        let entry = CanonicalWordEntry {
            word: "w".to_string(),
            definitions: vec![
                Definition::new("one", Some("first example".to_string())),
                Definition::new("two", None),
                Definition::new("three", Some(String::new())),
            ],
            ..Default::default()
        };
        assert_eq!(entry.examples(), vec!["first example".to_string()]);
        assert_eq!(entry.primary_definition(), "one");
    }

    #[test]
    fn test_decode_entry_tolerates_bad_data() {
        for data in [None, Some(""), Some("{}"), Some("not json")] {
            let entry = record(data).decode_entry();
            assert_eq!(entry.word, "ephemeral");
            assert!(!entry.has_definitions());
        }
    }

    #[test]
    fn test_decode_entry_reads_stored_json() {
        let entry = record(Some(
            r#"{"word":"ephemeral","phonetic":"","pos":"adjective",
                "definitions":[{"definition":"lasting a very short time"}],"synonyms":["fleeting"]}"#,
        ))
        .decode_entry();
        assert_eq!(entry.primary_definition(), "lasting a very short time");
        assert_eq!(entry.synonyms, vec!["fleeting".to_string()]);
    }
}
