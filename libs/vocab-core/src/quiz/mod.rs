//! Three-part quiz: recall, define, then use the word in a sentence.
//!
//! Stages run strictly in order with no way back. Each stage keeps
//! accepting answers until it is passed; the quiz is complete once the
//! sentence stage accepts. An entry without definitions skips the define
//! stage.

pub mod define;
pub mod recall;
pub mod sentence;

pub use define::{DefineOutcome, DefinePhase};
pub use recall::{letter_hint, RecallOutcome, RecallPhase};
pub use sentence::{check_sentence_heuristics, HeuristicFailure, SentenceOutcome, SentencePhase};

use crate::judge::Judge;
use crate::types::{CanonicalWordEntry, Definition};

/// Current quiz stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Recall,
    Define,
    Sentence,
    Complete,
}

/// Outcome of submitting one answer, tagged by the stage that handled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    Recall(RecallOutcome),
    Define(DefineOutcome),
    Sentence(SentenceOutcome),
    /// Answer submitted after the quiz already completed.
    Finished,
}

/// In-memory quiz state for one word.
#[derive(Debug, Clone)]
pub struct QuizSession {
    word: String,
    definitions: Vec<Definition>,
    stage: Stage,
    recall: RecallPhase,
    define: DefinePhase,
    sentence: SentencePhase,
}

impl QuizSession {
    pub fn new(entry: &CanonicalWordEntry) -> Self {
        let word = entry.word.clone();
        let primary = entry.primary_definition().to_string();

        Self {
            recall: RecallPhase::new(word.clone()),
            define: DefinePhase::new(word.clone(), &entry.definitions),
            sentence: SentencePhase::new(word.clone(), primary, entry.examples()),
            definitions: entry.definitions.clone(),
            stage: Stage::Recall,
            word,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn primary_definition(&self) -> &str {
        self.definitions
            .first()
            .map(|d| d.definition.as_str())
            .unwrap_or("")
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }

    /// Whether the recall stage is waiting for the revealed word to be retyped.
    pub fn awaiting_confirmation(&self) -> bool {
        self.stage == Stage::Recall && self.recall.is_revealed()
    }

    /// Failures counted so far in the recall and define stages.
    pub fn failures(&self) -> (u32, u32) {
        (self.recall.failures(), self.define.failures())
    }

    /// Feed one answer to the current stage, advancing on a pass.
    pub fn submit(&mut self, answer: &str, judge: &dyn Judge) -> QuizStep {
        match self.stage {
            Stage::Recall => {
                let outcome = self.recall.submit(answer);
                if outcome.is_pass() {
                    // Nothing to grade a definition against
                    self.stage = if self.definitions.is_empty() {
                        Stage::Sentence
                    } else {
                        Stage::Define
                    };
                }
                QuizStep::Recall(outcome)
            }
            Stage::Define => {
                let outcome = self.define.submit(answer);
                if outcome.is_pass() {
                    self.stage = Stage::Sentence;
                }
                QuizStep::Define(outcome)
            }
            Stage::Sentence => {
                let outcome = self.sentence.submit(answer, judge);
                if outcome.is_pass() {
                    self.stage = Stage::Complete;
                }
                QuizStep::Sentence(outcome)
            }
            Stage::Complete => QuizStep::Finished,
        }
    }
}
