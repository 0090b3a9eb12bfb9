//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local SQLite database.
pub const SCHEMA: &str = r#"
-- Every word ever shown, one row per word
CREATE TABLE IF NOT EXISTS words_seen (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT UNIQUE NOT NULL,
    date_shown TEXT NOT NULL,
    date_completed TEXT,
    api_data TEXT,
    user_notes TEXT DEFAULT '',
    quiz_attempts INTEGER DEFAULT 0,
    quiz_passed INTEGER DEFAULT 0
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_words_seen_shown ON words_seen(date_shown, quiz_passed);
CREATE INDEX IF NOT EXISTS idx_words_seen_completed ON words_seen(date_completed);
"#;
