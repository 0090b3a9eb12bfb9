//! Part A: recall the word from its definition.

use crate::matching::levenshtein_distance;

/// Answers within this distance get a spelling nudge.
pub const CLOSE_DISTANCE: usize = 2;

/// Failures before the letter-count hint.
pub const HINT_AFTER: u32 = 3;

/// Failures before the word is revealed.
pub const REVEAL_AFTER: u32 = 5;

/// Result of one recall answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallOutcome {
    Correct,
    /// Wrong but within spelling distance.
    Close,
    /// Wrong, with a first-letter hint such as `e________`.
    Hint(String),
    Miss,
    /// Too many failures: the word is shown and must be retyped.
    Revealed(String),
    /// Retyped the revealed word.
    Confirmed,
    /// Retyped the revealed word incorrectly.
    ConfirmMismatch(String),
}

impl RecallOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Correct | Self::Confirmed)
    }
}

/// Recall phase state.
#[derive(Debug, Clone)]
pub struct RecallPhase {
    target: String,
    failures: u32,
    revealed: bool,
}

impl RecallPhase {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            target: word.into(),
            failures: 0,
            revealed: false,
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Whether the phase is waiting for the revealed word to be retyped.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn submit(&mut self, answer: &str) -> RecallOutcome {
        let answer = answer.trim().to_lowercase();
        let target = self.target.to_lowercase();

        if self.revealed {
            return if answer == target {
                RecallOutcome::Confirmed
            } else {
                RecallOutcome::ConfirmMismatch(self.target.clone())
            };
        }

        if answer == target {
            return RecallOutcome::Correct;
        }

        self.failures += 1;

        if !answer.is_empty() && levenshtein_distance(&answer, &target) <= CLOSE_DISTANCE {
            RecallOutcome::Close
        } else if self.failures >= REVEAL_AFTER {
            self.revealed = true;
            RecallOutcome::Revealed(self.target.clone())
        } else if self.failures >= HINT_AFTER {
            RecallOutcome::Hint(letter_hint(&self.target))
        } else {
            RecallOutcome::Miss
        }
    }
}

/// First letter followed by one underscore per remaining letter.
pub fn letter_hint(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(first)
            .chain(chars.map(|_| '_'))
            .collect(),
        None => String::new(),
    }
}
