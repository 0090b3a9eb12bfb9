//! Core library for the daily vocabulary drill.
//!
//! Provides:
//! - Text metrics for grading (Levenshtein distance, keyword overlap)
//! - Canonical word entries and the corpus/dictionary merge
//! - Streak arithmetic over completion dates
//! - The recall/define/sentence quiz state machine
//! - The advisory judge contract and interrupt guard

pub mod error;
pub mod interrupt;
pub mod judge;
pub mod matching;
pub mod normalize;
pub mod quiz;
pub mod streak;
pub mod types;

pub use error::{EntryError, Result};
pub use interrupt::{InterruptAction, InterruptGuard};
pub use judge::{build_prompt, FixedJudge, Judge, Verdict};
pub use matching::{keyword_overlap, levenshtein_distance};
pub use normalize::normalize;
pub use quiz::{QuizSession, QuizStep, Stage};
pub use streak::consecutive_days;
pub use types::{
    CanonicalWordEntry, CorpusEntry, Definition, RemoteDefinition, RemoteEntry, RemoteMeaning,
    RemotePhonetic, WordRecord,
};
