//! Picks the word of the day.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;
use vocab_core::{normalize, CanonicalWordEntry, WordRecord};

use crate::corpus::Corpus;
use crate::db::{DbError, WordRepository};
use crate::enrichment::{Enricher, NoEnrichment};

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no unused words remain")]
    PoolExhausted,

    #[error(transparent)]
    Storage(#[from] DbError),
}

/// Today's word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWord {
    /// Key the word is stored under.
    pub key: String,
    pub entry: CanonicalWordEntry,
    /// Whether this continues a word already shown today.
    pub resumed: bool,
}

pub struct WordSelector<'a, R> {
    repo: &'a R,
    corpus: &'a Corpus,
    enricher: &'a dyn Enricher,
}

impl<'a, R: WordRepository> WordSelector<'a, R> {
    pub fn new(repo: &'a R, corpus: &'a Corpus) -> Self {
        Self {
            repo,
            corpus,
            enricher: &NoEnrichment,
        }
    }

    pub fn with_enricher(mut self, enricher: &'a dyn Enricher) -> Self {
        self.enricher = enricher;
        self
    }

    /// Resume today's unfinished word, or draw and record a new one.
    pub fn pick_word<G: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut G,
    ) -> Result<SelectedWord, SelectError> {
        if let Some(record) = self.repo.todays_active_word(date)? {
            return self.resume(record);
        }

        let used = self.repo.used_words()?;
        let available = self.corpus.unused(&used);
        let chosen = *available.choose(rng).ok_or(SelectError::PoolExhausted)?;

        let remote = self.enricher.lookup(&chosen.word);
        let entry = normalize(remote.as_ref(), chosen);
        self.repo.record_shown(&chosen.word, &entry, date)?;
        tracing::info!(
            "selected {:?} ({} of {} words unused, enriched: {})",
            chosen.word,
            available.len(),
            self.corpus.len(),
            remote.is_some()
        );

        Ok(SelectedWord {
            key: chosen.word.clone(),
            entry,
            resumed: false,
        })
    }

    fn resume(&self, record: WordRecord) -> Result<SelectedWord, SelectError> {
        let entry = record.decode_entry();
        if entry.has_definitions() {
            return Ok(SelectedWord {
                key: record.word,
                entry,
                resumed: true,
            });
        }

        // Entries stored before the flat-definition fallback have no definitions
        let fallback = self
            .corpus
            .find(&record.word)
            .or_else(|| self.corpus.find(&entry.word));
        let entry = match fallback {
            Some(fallback) => {
                let repaired = normalize(None, fallback);
                self.repo.update_entry(&record.word, &repaired)?;
                tracing::info!("repaired stored entry for {:?}", record.word);
                repaired
            }
            None => {
                tracing::warn!(
                    "stored entry for {:?} has no definitions and the word is not in the corpus",
                    record.word
                );
                entry
            }
        };

        Ok(SelectedWord {
            key: record.word,
            entry,
            resumed: true,
        })
    }
}
