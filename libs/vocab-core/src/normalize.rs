//! Merge corpus data with optional dictionary data into a canonical entry.

use crate::types::{CanonicalWordEntry, CorpusEntry, Definition, RemoteEntry};

/// Build the canonical entry for a word.
///
/// The corpus entry is the baseline. A flat `definition` string becomes a
/// one-element definitions list so the quiz always has something to ask.
/// Remote data, when present and non-empty, replaces definitions and
/// synonyms outright rather than merging with them.
pub fn normalize(remote: Option<&RemoteEntry>, fallback: &CorpusEntry) -> CanonicalWordEntry {
    let mut entry = CanonicalWordEntry {
        word: fallback.word.clone(),
        phonetic: fallback.phonetic.clone(),
        part_of_speech: fallback.part_of_speech.clone(),
        definitions: fallback_definitions(fallback),
        synonyms: fallback.synonyms.clone(),
    };

    if let Some(remote) = remote {
        apply_remote(&mut entry, remote);
    }

    entry
}

fn fallback_definitions(fallback: &CorpusEntry) -> Vec<Definition> {
    if !fallback.definitions.is_empty() {
        return fallback.definitions.clone();
    }

    match fallback.definition.as_deref() {
        Some(definition) if !definition.is_empty() => {
            vec![Definition::new(definition, fallback.example.clone())]
        }
        _ => Vec::new(),
    }
}

fn apply_remote(entry: &mut CanonicalWordEntry, remote: &RemoteEntry) {
    if let Some(word) = remote.word.as_deref().filter(|w| !w.is_empty()) {
        entry.word = word.to_string();
    }

    if let Some(phonetic) = remote.phonetic.as_deref().filter(|p| !p.is_empty()) {
        entry.phonetic = phonetic.to_string();
    }
    if entry.phonetic.is_empty() {
        if let Some(text) = remote
            .phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.is_empty())
        {
            entry.phonetic = text.to_string();
        }
    }

    for meaning in &remote.meanings {
        if entry.part_of_speech.is_empty() {
            if let Some(pos) = meaning.part_of_speech.as_deref() {
                entry.part_of_speech = pos.to_string();
            }
        }

        let definitions: Vec<Definition> = meaning
            .definitions
            .iter()
            .map(|d| Definition::new(d.definition.clone(), d.example.clone()))
            .collect();
        // Last non-empty meaning wins
        if !definitions.is_empty() {
            entry.definitions = definitions;
        }

        if !meaning.synonyms.is_empty() {
            entry.synonyms = meaning.synonyms.clone();
        }
    }
}
