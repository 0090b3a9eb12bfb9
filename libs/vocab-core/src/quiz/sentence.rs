//! Part C: use the word in an original sentence.

use thiserror::Error;

use crate::judge::{Judge, Verdict};

/// Minimum whitespace-separated tokens in a sentence.
pub const MIN_SENTENCE_WORDS: usize = 5;

/// Local reasons to reject a sentence before asking the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeuristicFailure {
    #[error("Your sentence must contain the word.")]
    MissingWord,

    #[error("Please write a longer sentence (at least 5 words).")]
    TooShort,

    #[error("Please write your own original sentence.")]
    Plagiarized,
}

/// Check a sentence against the local rules.
pub fn check_sentence_heuristics(
    sentence: &str,
    word: &str,
    examples: &[String],
) -> Result<(), HeuristicFailure> {
    let lowered = sentence.to_lowercase();

    if !lowered.contains(&word.to_lowercase()) {
        return Err(HeuristicFailure::MissingWord);
    }
    if sentence.split_whitespace().count() < MIN_SENTENCE_WORDS {
        return Err(HeuristicFailure::TooShort);
    }

    let copied = examples
        .iter()
        .map(|e| e.to_lowercase())
        .filter(|e| !e.is_empty())
        .any(|e| lowered.contains(&e) || e.contains(&lowered));
    if copied {
        return Err(HeuristicFailure::Plagiarized);
    }

    Ok(())
}

/// Result of one sentence attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceOutcome {
    /// Blank input, silently re-prompted.
    Empty,
    Rejected(HeuristicFailure),
    /// The judge returned an explicit fail.
    Retry(Verdict),
    Accepted(Verdict),
}

impl SentenceOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Sentence phase inputs.
#[derive(Debug, Clone)]
pub struct SentencePhase {
    word: String,
    definition: String,
    examples: Vec<String>,
}

impl SentencePhase {
    pub fn new(word: impl Into<String>, definition: impl Into<String>, examples: Vec<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            examples,
        }
    }

    pub fn submit(&self, sentence: &str, judge: &dyn Judge) -> SentenceOutcome {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return SentenceOutcome::Empty;
        }

        if let Err(failure) = check_sentence_heuristics(sentence, &self.word, &self.examples) {
            return SentenceOutcome::Rejected(failure);
        }

        let verdict = judge.evaluate(sentence, &self.word, &self.definition);
        if verdict.passed {
            SentenceOutcome::Accepted(verdict)
        } else {
            SentenceOutcome::Retry(verdict)
        }
    }
}
