//! Word corpus loaded from `words.json`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use vocab_core::CorpusEntry;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed pool of candidate words for one run.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Load a JSON array of corpus entries.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let data = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = serde_json::from_str(&data).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, word: &str) -> Option<&CorpusEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    /// Entries whose word is not in `used`, in corpus order.
    pub fn unused<'a>(&'a self, used: &HashSet<String>) -> Vec<&'a CorpusEntry> {
        self.entries
            .iter()
            .filter(|e| !used.contains(&e.word))
            .collect()
    }
}
