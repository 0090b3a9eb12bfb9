//! Part B: define the word in your own words.

use crate::matching::keyword_overlap;
use crate::types::Definition;

/// Definitions shorter than this are rejected without counting a failure.
pub const MIN_DEFINITION_CHARS: usize = 15;

/// Counted failures before the definitions are shown again.
pub const REVEAL_AFTER: u32 = 3;

/// Result of one definition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineOutcome {
    Accepted,
    /// Rejected for length; not counted.
    TooShort,
    /// Rejected for using the word itself; not counted.
    UsesWord,
    Miss,
    /// Third counted miss: show the definitions and start over.
    Reveal,
}

impl DefineOutcome {
    pub fn is_pass(self) -> bool {
        self == Self::Accepted
    }
}

/// Define phase state.
#[derive(Debug, Clone)]
pub struct DefinePhase {
    word: String,
    reference: String,
    failures: u32,
}

impl DefinePhase {
    pub fn new(word: impl Into<String>, definitions: &[Definition]) -> Self {
        let reference = definitions
            .iter()
            .map(|d| d.definition.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            word: word.into(),
            reference,
            failures: 0,
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn submit(&mut self, answer: &str) -> DefineOutcome {
        let answer = answer.trim();

        if answer.chars().count() < MIN_DEFINITION_CHARS {
            return DefineOutcome::TooShort;
        }
        if answer.to_lowercase().contains(&self.word.to_lowercase()) {
            return DefineOutcome::UsesWord;
        }
        if keyword_overlap(answer, &self.reference) {
            return DefineOutcome::Accepted;
        }

        self.failures += 1;
        if self.failures >= REVEAL_AFTER {
            self.failures = 0;
            DefineOutcome::Reveal
        } else {
            DefineOutcome::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase() -> DefinePhase {
        DefinePhase::new(
            "ephemeral",
            &[
                Definition::new("lasting a very short time", None),
                Definition::new("living for only a day", None),
            ],
        )
    }

    #[test]
    fn test_accepts_overlapping_definition() {
        let mut phase = phase();
        assert_eq!(phase.submit("something that is brief and short"), DefineOutcome::Accepted);
    }

    #[test]
    fn test_matches_any_definition() {
        let mut phase = phase();
        assert_eq!(phase.submit("a creature living briefly"), DefineOutcome::Accepted);
    }

    #[test]
    fn test_short_answer_not_counted() {
        let mut phase = phase();
        assert_eq!(phase.submit("short time"), DefineOutcome::TooShort);
        assert_eq!(phase.failures(), 0);
    }

    #[test]
    fn test_using_word_not_counted() {
        let mut phase = phase();
        assert_eq!(
            phase.submit("something quite EPHEMERAL indeed"),
            DefineOutcome::UsesWord
        );
        assert_eq!(phase.failures(), 0);
    }

    #[test]
    fn test_reveal_resets_counter() {
        let mut phase = phase();
        assert_eq!(phase.submit("a large green vegetable"), DefineOutcome::Miss);
        assert_eq!(phase.submit("a large green vegetable"), DefineOutcome::Miss);
        assert_eq!(phase.submit("a large green vegetable"), DefineOutcome::Reveal);
        assert_eq!(phase.failures(), 0);
        assert_eq!(phase.submit("a large green vegetable"), DefineOutcome::Miss);
        assert_eq!(phase.failures(), 1);
    }
}
