//! Repository pattern for database access.

use crate::db::date_utils::{format_date, parse_date};
use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use vocab_core::{consecutive_days, CanonicalWordEntry, WordRecord};

type Result<T> = std::result::Result<T, DbError>;

/// Repository for word history operations.
///
/// Every write is a single statement, so an interrupted write leaves the
/// previous state intact.
pub trait WordRepository {
    /// Insert a shown word. Returns false if the word was already recorded.
    fn record_shown(&self, word: &str, entry: &CanonicalWordEntry, date: NaiveDate) -> Result<bool>;
    /// Overwrite the notes of an existing word.
    fn record_notes(&self, word: &str, notes: &str) -> Result<()>;
    /// Mark a word passed on `date` and count the completing attempt.
    fn record_completion(&self, word: &str, date: NaiveDate) -> Result<()>;
    fn increment_attempts(&self, word: &str) -> Result<()>;
    /// Replace the stored entry of an existing word.
    fn update_entry(&self, word: &str, entry: &CanonicalWordEntry) -> Result<()>;
    fn used_words(&self) -> Result<HashSet<String>>;
    fn get_word(&self, word: &str) -> Result<Option<WordRecord>>;
    /// The word shown on `date` that has not been passed yet.
    fn todays_active_word(&self, date: NaiveDate) -> Result<Option<WordRecord>>;
    fn is_date_completed(&self, date: NaiveDate) -> Result<bool>;
    fn completion_dates(&self) -> Result<HashSet<NaiveDate>>;

    /// Consecutive completed days ending at `date`.
    fn streak(&self, date: NaiveDate) -> Result<usize> {
        Ok(consecutive_days(&self.completion_dates()?, date))
    }
}

/// Overall drill statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillStats {
    pub words_seen: usize,
    pub words_completed: usize,
    pub total_attempts: usize,
    pub streak_days: usize,
    pub completed_today: bool,
}

/// Repository for statistics operations.
pub trait StatsRepository {
    fn get_drill_stats(&self, today: NaiveDate) -> Result<DrillStats>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;
        Ok(())
    }

    fn query_record(&self, sql: &str, param: &str) -> Result<Option<WordRecord>> {
        let raw = self
            .conn
            .query_row(sql, params![param], RawRecord::from_row)
            .optional()?;
        raw.map(RawRecord::into_record).transpose()
    }
}

const RECORD_COLUMNS: &str =
    "word, date_shown, date_completed, api_data, user_notes, quiz_attempts, quiz_passed";

/// Row as stored, before date parsing.
struct RawRecord {
    word: String,
    date_shown: String,
    date_completed: Option<String>,
    entry_data: Option<String>,
    user_notes: Option<String>,
    quiz_attempts: u32,
    quiz_passed: bool,
}

impl RawRecord {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            word: row.get(0)?,
            date_shown: row.get(1)?,
            date_completed: row.get(2)?,
            entry_data: row.get(3)?,
            user_notes: row.get(4)?,
            quiz_attempts: row.get::<_, Option<u32>>(5)?.unwrap_or(0),
            quiz_passed: row.get::<_, Option<bool>>(6)?.unwrap_or(false),
        })
    }

    fn into_record(self) -> Result<WordRecord> {
        let date_shown = parse_date(&self.date_shown).ok_or_else(|| {
            DbError::InvalidData(format!("bad date_shown for {}: {}", self.word, self.date_shown))
        })?;
        let date_completed = match self.date_completed.as_deref() {
            Some(value) => Some(parse_date(value).ok_or_else(|| {
                DbError::InvalidData(format!("bad date_completed for {}: {}", self.word, value))
            })?),
            None => None,
        };

        Ok(WordRecord {
            word: self.word,
            date_shown,
            date_completed,
            entry_data: self.entry_data,
            user_notes: self.user_notes.unwrap_or_default(),
            quiz_attempts: self.quiz_attempts,
            quiz_passed: self.quiz_passed,
        })
    }
}

fn encode_entry(entry: &CanonicalWordEntry) -> Result<String> {
    entry
        .to_json()
        .map_err(|e| DbError::InvalidData(e.to_string()))
}

impl WordRepository for SqliteRepository {
    fn record_shown(&self, word: &str, entry: &CanonicalWordEntry, date: NaiveDate) -> Result<bool> {
        let data = encode_entry(entry)?;
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO words_seen (word, date_shown, api_data) VALUES (?1, ?2, ?3)",
            params![word, format_date(date), data],
        )?;
        Ok(inserted > 0)
    }

    fn record_notes(&self, word: &str, notes: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE words_seen SET user_notes = ?1 WHERE word = ?2",
            params![notes, word],
        )?;
        Ok(())
    }

    fn record_completion(&self, word: &str, date: NaiveDate) -> Result<()> {
        self.conn.execute(
            "UPDATE words_seen SET quiz_passed = 1, date_completed = ?1,
             quiz_attempts = quiz_attempts + 1 WHERE word = ?2",
            params![format_date(date), word],
        )?;
        Ok(())
    }

    fn increment_attempts(&self, word: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE words_seen SET quiz_attempts = quiz_attempts + 1 WHERE word = ?1",
            params![word],
        )?;
        Ok(())
    }

    fn update_entry(&self, word: &str, entry: &CanonicalWordEntry) -> Result<()> {
        let data = encode_entry(entry)?;
        let updated = self.conn.execute(
            "UPDATE words_seen SET api_data = ?1 WHERE word = ?2",
            params![data, word],
        )?;
        if updated == 0 {
            return Err(DbError::WordNotFound(word.to_string()));
        }
        Ok(())
    }

    fn used_words(&self) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT word FROM words_seen")?;
        let words = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<HashSet<String>, _>>()?;
        Ok(words)
    }

    fn get_word(&self, word: &str) -> Result<Option<WordRecord>> {
        self.query_record(
            &format!("SELECT {RECORD_COLUMNS} FROM words_seen WHERE word = ?1"),
            word,
        )
    }

    fn todays_active_word(&self, date: NaiveDate) -> Result<Option<WordRecord>> {
        self.query_record(
            &format!(
                "SELECT {RECORD_COLUMNS} FROM words_seen
                 WHERE date_shown = ?1 AND quiz_passed = 0 ORDER BY id LIMIT 1"
            ),
            &format_date(date),
        )
    }

    fn is_date_completed(&self, date: NaiveDate) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM words_seen WHERE date_completed = ?1 LIMIT 1",
                params![format_date(date)],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn completion_dates(&self) -> Result<HashSet<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT date_completed FROM words_seen WHERE date_completed IS NOT NULL",
        )?;
        let values = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let dates = values
            .iter()
            .filter_map(|value| {
                let parsed = parse_date(value);
                if parsed.is_none() {
                    tracing::warn!("ignoring unparseable completion date {:?}", value);
                }
                parsed
            })
            .collect();
        Ok(dates)
    }
}

impl StatsRepository for SqliteRepository {
    fn get_drill_stats(&self, today: NaiveDate) -> Result<DrillStats> {
        let (words_seen, words_completed, total_attempts): (i64, i64, i64) = self.conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(CASE WHEN quiz_passed = 1 THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(quiz_attempts), 0)
             FROM words_seen",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        Ok(DrillStats {
            words_seen: words_seen.max(0) as usize,
            words_completed: words_completed.max(0) as usize,
            total_attempts: total_attempts.max(0) as usize,
            streak_days: self.streak(today)?,
            completed_today: self.is_date_completed(today)?,
        })
    }
}
