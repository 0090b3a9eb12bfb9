//! Optional dictionary lookups that enrich corpus entries.
//!
//! Lookups are best-effort: every failure collapses to `None`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use vocab_core::RemoteEntry;

/// Default dictionary API base URL.
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default lookup timeout.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Lookup errors, never surfaced past this module.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid dictionary url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dictionary returned status {0}")]
    Status(u16),

    #[error("dictionary returned no entries")]
    Empty,
}

/// Source of richer word data.
pub trait Enricher {
    fn lookup(&self, word: &str) -> Option<RemoteEntry>;
}

/// Enricher that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

impl Enricher for NoEnrichment {
    fn lookup(&self, _word: &str) -> Option<RemoteEntry> {
        None
    }
}

/// HTTP client for a dictionaryapi.dev compatible service.
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL for a word, with the word as an escaped path segment.
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    fn fetch(&self, word: &str) -> Result<RemoteEntry, LookupError> {
        let url = self.entry_url(word)?;
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let entries: Vec<RemoteEntry> = response.json()?;
        entries.into_iter().next().ok_or(LookupError::Empty)
    }
}

impl Enricher for DictionaryClient {
    fn lookup(&self, word: &str) -> Option<RemoteEntry> {
        match self.fetch(word) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("dictionary lookup for {:?} unavailable: {}", word, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        let client = DictionaryClient::new(DEFAULT_DICTIONARY_URL, DEFAULT_LOOKUP_TIMEOUT).unwrap();
        assert_eq!(
            client.entry_url("ephemeral").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ephemeral"
        );

        let trailing = DictionaryClient::new("http://localhost/entries/", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        assert_eq!(
            trailing.entry_url("ice cream").unwrap().as_str(),
            "http://localhost/entries/ice%20cream"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = DictionaryClient::new("not a url", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        assert!(matches!(client.entry_url("word"), Err(LookupError::InvalidUrl(_))));
        assert!(client.lookup("word").is_none());
    }

    #[test]
    fn test_unreachable_service_degrades() {
        let client = DictionaryClient::new("http://127.0.0.1:9/entries", Duration::from_millis(500)).unwrap();
        assert!(client.lookup("ephemeral").is_none());
    }

    #[test]
    fn test_no_enrichment() {
        assert!(NoEnrichment.lookup("anything").is_none());
    }
}
