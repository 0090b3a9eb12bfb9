//! Test fixtures and factory functions for creating test data.

use std::collections::HashMap;

use vocab_core::{CorpusEntry, RemoteDefinition, RemoteEntry, RemoteMeaning};
use vocab_drill::enrichment::Enricher;

/// Answer that overlaps every fixture definition ("lasting", "brief", "moment").
pub const DEFINITION_ANSWER: &str = "something lasting a brief moment";

/// Corpus entry with a flat definition and optional example.
pub fn corpus_entry(word: &str, definition: &str, example: Option<&str>) -> CorpusEntry {
    CorpusEntry {
        word: word.to_string(),
        part_of_speech: "adjective".to_string(),
        definition: Some(definition.to_string()),
        example: example.map(str::to_string),
        synonyms: vec!["transient".to_string(), "momentary".to_string()],
        ..Default::default()
    }
}

/// Two words whose definitions both accept [`DEFINITION_ANSWER`].
pub fn sample_corpus() -> Vec<CorpusEntry> {
    vec![
        corpus_entry(
            "ephemeral",
            "lasting for a very brief moment",
            Some("The ephemeral beauty of the sunset."),
        ),
        corpus_entry("fleeting", "passing swiftly, lasting a brief moment", None),
    ]
}

/// Dictionary entry with one meaning.
pub fn remote_entry(word: &str, phonetic: &str, definitions: &[&str]) -> RemoteEntry {
    RemoteEntry {
        word: Some(word.to_string()),
        phonetic: Some(phonetic.to_string()),
        phonetics: vec![],
        meanings: vec![RemoteMeaning {
            part_of_speech: Some("adjective".to_string()),
            definitions: definitions
                .iter()
                .map(|d| RemoteDefinition {
                    definition: d.to_string(),
                    example: None,
                })
                .collect(),
            synonyms: vec!["short-lived".to_string()],
        }],
    }
}

/// Enricher answering from a fixed map.
#[derive(Default)]
pub struct MapEnricher {
    entries: HashMap<String, RemoteEntry>,
}

impl MapEnricher {
    pub fn with(mut self, word: &str, entry: RemoteEntry) -> Self {
        self.entries.insert(word.to_string(), entry);
        self
    }
}

impl Enricher for MapEnricher {
    fn lookup(&self, word: &str) -> Option<RemoteEntry> {
        self.entries.get(word).cloned()
    }
}

/// Stdin script for a full, first-try session on `word`.
pub fn happy_path_script(word: &str) -> String {
    [
        "",
        "sounds like a brief moment in time",
        word,
        DEFINITION_ANSWER,
        format!("Her {word} smile vanished within seconds.").as_str(),
    ]
    .join("\n")
        + "\n"
}
