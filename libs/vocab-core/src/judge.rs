//! Advisory sentence judge contract.
//!
//! The judge is an enrichment, never a gate: every degraded outcome
//! resolves to a pass with an explanatory feedback string.

/// Feedback used when the judge cannot be reached.
pub const UNAVAILABLE_FEEDBACK: &str = "Auto-approved (judge unavailable).";

/// Feedback used when the judge reply has no PASS/FAIL verdict.
pub const UNPARSED_FEEDBACK: &str = "Auto-approved (could not parse response).";

/// Outcome of judging a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub feedback: String,
}

impl Verdict {
    pub fn pass(feedback: impl Into<String>) -> Self {
        Self {
            passed: true,
            feedback: feedback.into(),
        }
    }

    pub fn fail(feedback: impl Into<String>) -> Self {
        Self {
            passed: false,
            feedback: feedback.into(),
        }
    }

    /// Fail-open verdict for a missing, slow or failing judge.
    pub fn unavailable() -> Self {
        Self::pass(UNAVAILABLE_FEEDBACK)
    }

    /// Parse a judge reply by the leading token of its first line.
    pub fn parse(output: &str) -> Self {
        let first_line = output.trim().lines().next().unwrap_or("").trim();
        let upper = first_line.to_uppercase();

        if upper.starts_with("PASS") {
            Self::pass(first_line)
        } else if upper.starts_with("FAIL") {
            Self::fail(first_line)
        } else {
            Self::pass(UNPARSED_FEEDBACK)
        }
    }
}

/// Evaluates whether a sentence shows understanding of a word.
pub trait Judge {
    fn evaluate(&self, sentence: &str, word: &str, definition: &str) -> Verdict;
}

/// Judge that always returns the same verdict.
#[derive(Debug, Clone)]
pub struct FixedJudge {
    verdict: Verdict,
}

impl FixedJudge {
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    pub fn passing() -> Self {
        Self::new(Verdict::pass("PASS"))
    }
}

impl Judge for FixedJudge {
    fn evaluate(&self, _sentence: &str, _word: &str, _definition: &str) -> Verdict {
        self.verdict.clone()
    }
}

/// Build the grading prompt sent to the judge.
pub fn build_prompt(sentence: &str, word: &str, definition: &str) -> String {
    format!(
        "You are evaluating whether a sentence correctly uses the word \"{word}\" \
         (meaning: {definition}).\n\n\
         Sentence: \"{sentence}\"\n\n\
         Does this sentence demonstrate understanding of the word's meaning? \
         Be lenient - accept creative or informal usage as long as the meaning \
         is roughly correct.\n\n\
         Reply with exactly one line: PASS or FAIL followed by a brief explanation."
    )
}
