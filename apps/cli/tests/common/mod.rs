//! Common test utilities and fixtures for integration tests.
//!
//! Each [`TestContext`] owns a temporary data directory, an in-memory
//! store and a corpus, so tests never touch the real `~/vocab-agent`.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;
use vocab_core::{CorpusEntry, Judge};
use vocab_drill::corpus::Corpus;
use vocab_drill::db::SqliteRepository;
use vocab_drill::session::{Session, SessionOutcome};
use vocab_drill::terminal::Console;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub struct TestContext {
    pub dir: TempDir,
    pub repo: SqliteRepository,
    pub corpus: Corpus,
}

impl TestContext {
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            repo: SqliteRepository::open_in_memory().expect("Failed to open database"),
            corpus: Corpus::new(entries),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn session<'a>(
        &'a self,
        judge: &'a dyn Judge,
        script: impl AsRef<[u8]>,
        today: NaiveDate,
    ) -> Session<'a, Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(&self.repo, &self.corpus, judge, console(script), today)
            .with_marker_dir(self.data_dir())
    }

    /// Run one session and return its result with everything it printed.
    pub fn run(
        &self,
        judge: &dyn Judge,
        script: impl AsRef<[u8]>,
        today: NaiveDate,
    ) -> (
        Result<SessionOutcome, vocab_drill::session::SessionError>,
        String,
    ) {
        let mut session = self.session(judge, script, today);
        let result = session.run();
        let output = String::from_utf8(session.into_output()).expect("output is utf-8");
        (result, output)
    }
}

pub fn console(script: impl AsRef<[u8]>) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_ref().to_vec()), Vec::new())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}
