//! One day's drill: learn, take notes, pass the quiz, record completion.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use crossterm::style::Stylize;
use thiserror::Error;
use vocab_core::quiz::{DefineOutcome, RecallOutcome, SentenceOutcome};
use vocab_core::{CanonicalWordEntry, Judge, QuizSession, QuizStep, Stage};

use crate::corpus::Corpus;
use crate::db::date_utils::format_date;
use crate::db::{DbError, SqliteRepository, WordRepository};
use crate::enrichment::{Enricher, NoEnrichment};
use crate::selector::{SelectError, SelectedWord, WordSelector};
use crate::terminal::{days, Console};

/// Minimum words accepted as notes.
pub const MIN_NOTE_WORDS: usize = 5;

/// Synonyms shown on the word card.
const MAX_SYNONYMS: usize = 6;

const RULE_WIDTH: usize = 50;

/// Narrowest interior of the victory box.
const VICTORY_WIDTH: usize = 38;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Storage(#[from] DbError),

    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    AlreadyCompleted { streak: usize },
    PoolExhausted,
    Completed { word: String, streak: usize },
}

pub struct Session<'a, I, W> {
    repo: &'a SqliteRepository,
    corpus: &'a Corpus,
    judge: &'a dyn Judge,
    enricher: &'a dyn Enricher,
    console: Console<I, W>,
    today: NaiveDate,
    marker_dir: Option<PathBuf>,
}

impl<'a, I: BufRead, W: Write> Session<'a, I, W> {
    pub fn new(
        repo: &'a SqliteRepository,
        corpus: &'a Corpus,
        judge: &'a dyn Judge,
        console: Console<I, W>,
        today: NaiveDate,
    ) -> Self {
        Self {
            repo,
            corpus,
            judge,
            enricher: &NoEnrichment,
            console,
            today,
            marker_dir: None,
        }
    }

    pub fn with_enricher(mut self, enricher: &'a dyn Enricher) -> Self {
        self.enricher = enricher;
        self
    }

    /// Touch `.done-YYYY-MM-DD` in `dir` on completion.
    pub fn with_marker_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.marker_dir = Some(dir.into());
        self
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        if self.repo.is_date_completed(self.today)? {
            let streak = self.repo.streak(self.today)?;
            self.show_already_completed(streak)?;
            return Ok(SessionOutcome::AlreadyCompleted { streak });
        }

        let selected = match WordSelector::new(self.repo, self.corpus)
            .with_enricher(self.enricher)
            .pick_word(self.today, &mut rand::rng())
        {
            Ok(selected) => selected,
            Err(SelectError::PoolExhausted) => {
                self.console.blank()?;
                self.console
                    .say(format!("  {}", "You've learned all the words! Impressive.".green()))?;
                return Ok(SessionOutcome::PoolExhausted);
            }
            Err(SelectError::Storage(e)) => return Err(e.into()),
        };

        let streak = self.repo.streak(self.today)?;
        self.console.clear_screen()?;
        self.show_header(&selected.entry.word, streak)?;

        self.learn(&selected.entry)?;
        self.notes(&selected)?;
        self.quiz(&selected.entry)?;

        self.repo.record_completion(&selected.key, self.today)?;
        self.write_marker();
        tracing::info!("completed {:?} on {}", selected.key, self.today);

        let streak = self.repo.streak(self.today)?;
        self.show_victory(&selected.entry.word, streak)?;
        Ok(SessionOutcome::Completed {
            word: selected.entry.word,
            streak,
        })
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        self.console
            .read_line(format!("  {} ", label.cyan()))?
            .ok_or(SessionError::InputClosed)
    }

    fn learn(&mut self, entry: &CanonicalWordEntry) -> Result<()> {
        self.show_word_card(entry)?;
        self.console.say(format!(
            "  {}",
            "Take a moment to read and absorb. Press Enter when ready to take notes.".dim()
        ))?;
        self.console
            .read_line("")?
            .ok_or(SessionError::InputClosed)?;
        Ok(())
    }

    fn notes(&mut self, selected: &SelectedWord) -> Result<()> {
        self.console.blank()?;
        self.console.say(format!("  {}", "Notes Phase".bold()))?;
        self.console.say(format!(
            "  {}",
            "Think about: mnemonics, personal associations, similar words, when you'd use it".dim()
        ))?;
        self.console.blank()?;

        loop {
            let notes = self.prompt("Your notes:")?;
            if notes.split_whitespace().count() >= MIN_NOTE_WORDS {
                self.repo.record_notes(&selected.key, &notes)?;
                self.console.say(format!("  {}", "Notes saved.".green()))?;
                self.console.blank()?;
                return Ok(());
            }
            self.console.say(format!(
                "  {}",
                format!("Please write at least {MIN_NOTE_WORDS} words in your notes.").yellow()
            ))?;
        }
    }

    fn quiz(&mut self, entry: &CanonicalWordEntry) -> Result<()> {
        let rule = "=".repeat(40);
        self.console.blank()?;
        self.console.say(format!("  {}", rule.as_str().bold()))?;
        self.console.say(format!("  {}", "QUIZ TIME".bold()))?;
        self.console.say(format!("  {}", rule.as_str().bold()))?;

        let mut quiz = QuizSession::new(entry);
        let mut announced = None;
        loop {
            let stage = quiz.stage();
            if announced != Some(stage) {
                self.announce(&quiz)?;
                announced = Some(stage);
            }

            let label = match stage {
                Stage::Recall if quiz.awaiting_confirmation() => "Type it:",
                Stage::Recall => "Word:",
                Stage::Define => "Your definition:",
                Stage::Sentence => "Sentence:",
                Stage::Complete => break,
            };
            let answer = self.prompt(label)?;
            let step = quiz.submit(&answer, self.judge);
            self.show_step(&quiz, &step)?;
        }

        let (recall_failures, define_failures) = quiz.failures();
        tracing::debug!(
            "quiz passed with {} recall and {} define failures",
            recall_failures,
            define_failures
        );
        Ok(())
    }

    fn announce(&mut self, quiz: &QuizSession) -> Result<()> {
        let word = quiz.word().to_string();
        self.console.blank()?;
        match quiz.stage() {
            Stage::Recall => {
                self.console
                    .say(format!("  {}", "Quiz Part A: Recall".bold()))?;
                self.console.say(format!("  {}", "Definition:".dim()))?;
                if quiz.definitions().is_empty() {
                    self.console
                        .say(format!("    {}", "(no definition available)".dim()))?;
                } else {
                    self.console
                        .say(format!("    {}", quiz.primary_definition()))?;
                }
                self.console.say(format!(
                    "  {}",
                    "Type the word that matches this definition.".dim()
                ))?;
            }
            Stage::Define => {
                self.console
                    .say(format!("  {}", "Quiz Part B: Define".bold()))?;
                self.console.say(format!(
                    "  {} {}",
                    "Define the word:".dim(),
                    word.bold().magenta()
                ))?;
            }
            Stage::Sentence => {
                if quiz.definitions().is_empty() {
                    self.console.say(format!(
                        "  {}",
                        "No definitions are stored for this word, so Part B is skipped.".yellow()
                    ))?;
                    self.console.blank()?;
                }
                self.console
                    .say(format!("  {}", "Quiz Part C: Use It".bold()))?;
                self.console.say(format!(
                    "  {} {}",
                    "Write a sentence using the word:".dim(),
                    word.bold().magenta()
                ))?;
            }
            Stage::Complete => return Ok(()),
        }
        self.console.blank()?;
        Ok(())
    }

    fn show_step(&mut self, quiz: &QuizSession, step: &QuizStep) -> Result<()> {
        match step {
            QuizStep::Recall(outcome) => match outcome {
                RecallOutcome::Correct => self.console.say(format!("  {}", "Correct!".green()))?,
                RecallOutcome::Close => self
                    .console
                    .say(format!("  {}", "Close! Check your spelling.".yellow()))?,
                RecallOutcome::Hint(hint) => self
                    .console
                    .say(format!("  {}", format!("Hint: {hint}").yellow()))?,
                RecallOutcome::Miss => self
                    .console
                    .say(format!("  {}", "Not quite. Try again.".red()))?,
                RecallOutcome::Revealed(word) => {
                    self.console.say(format!(
                        "  {} {}",
                        "The word was:".red(),
                        word.as_str().bold().red()
                    ))?;
                    self.console
                        .say(format!("  {}", "Type it below to confirm.".dim()))?;
                }
                RecallOutcome::Confirmed => self.console.say(format!("  {}", "Got it.".green()))?,
                RecallOutcome::ConfirmMismatch(word) => self.console.say(format!(
                    "  {}",
                    format!("Try again. The word is: {word}").yellow()
                ))?,
            },
            QuizStep::Define(outcome) => match outcome {
                DefineOutcome::Accepted => self
                    .console
                    .say(format!("  {}", "Good definition!".green()))?,
                DefineOutcome::TooShort => self.console.say(format!(
                    "  {}",
                    "Please provide a more detailed definition (at least 15 characters).".yellow()
                ))?,
                DefineOutcome::UsesWord => self.console.say(format!(
                    "  {}",
                    "Try defining it without using the word itself.".yellow()
                ))?,
                DefineOutcome::Miss => self.console.say(format!(
                    "  {}",
                    "Not quite. Try to capture the core meaning.".yellow()
                ))?,
                DefineOutcome::Reveal => {
                    self.console.blank()?;
                    self.console
                        .say(format!("  {}", "Here are the definitions again:".yellow()))?;
                    for (i, def) in quiz.definitions().iter().enumerate() {
                        self.console
                            .say(format!("  {}. {}", i + 1, def.definition))?;
                    }
                    self.console.blank()?;
                    self.console.say(format!(
                        "  {}",
                        "Try rephrasing one of these in your own words.".dim()
                    ))?;
                    self.console.blank()?;
                }
            },
            QuizStep::Sentence(outcome) => match outcome {
                SentenceOutcome::Empty => {}
                SentenceOutcome::Rejected(reason) => self
                    .console
                    .say(format!("  {}", reason.to_string().yellow()))?,
                SentenceOutcome::Retry(verdict) => {
                    self.console
                        .say(format!("  {}", verdict.feedback.as_str().red()))?;
                    self.console
                        .say(format!("  {}", "Try again with a different sentence.".dim()))?;
                }
                SentenceOutcome::Accepted(verdict) => self
                    .console
                    .say(format!("  {}", verdict.feedback.as_str().green()))?,
            },
            QuizStep::Finished => {}
        }
        Ok(())
    }

    fn write_marker(&self) {
        let Some(dir) = &self.marker_dir else {
            return;
        };
        let path = dir.join(format!(".done-{}", format_date(self.today)));
        if let Err(e) = OpenOptions::new().create(true).append(true).open(&path) {
            tracing::warn!("failed to write completion marker {}: {}", path.display(), e);
        }
    }

    fn show_header(&mut self, word: &str, streak: usize) -> Result<()> {
        let double = "=".repeat(RULE_WIDTH);
        let single = "-".repeat(RULE_WIDTH);
        self.console.blank()?;
        self.console.say(double.as_str().cyan())?;
        self.console.say(format!(
            "  {}  {}  {}",
            "VOCAB AGENT".bold().cyan(),
            "|".cyan(),
            format!("Streak: {}", days(streak)).yellow()
        ))?;
        self.console.say(double.as_str().cyan())?;
        self.console
            .say(format!("  Today's word: {}", word.bold().magenta()))?;
        self.console.say(single.as_str().cyan())?;
        self.console.blank()?;
        Ok(())
    }

    fn show_word_card(&mut self, entry: &CanonicalWordEntry) -> Result<()> {
        let mut title = format!("  {}", entry.word.as_str().bold().magenta());
        if !entry.phonetic.is_empty() {
            title.push_str(&format!("  {}", entry.phonetic.as_str().dim()));
        }
        if !entry.part_of_speech.is_empty() {
            title.push_str(&format!("  {}", format!("({})", entry.part_of_speech).cyan()));
        }
        self.console.say(title)?;
        self.console.blank()?;

        for (i, def) in entry.definitions.iter().enumerate() {
            self.console.say(format!(
                "  {} {}",
                format!("{}.", i + 1).yellow(),
                def.definition
            ))?;
            if let Some(example) = &def.example {
                self.console
                    .say(format!("     {}", format!("\"{example}\"").dim()))?;
            }
            self.console.blank()?;
        }

        if !entry.synonyms.is_empty() {
            let shown: Vec<&str> = entry
                .synonyms
                .iter()
                .take(MAX_SYNONYMS)
                .map(String::as_str)
                .collect();
            self.console
                .say(format!("  {} {}", "Synonyms:".green(), shown.join(", ")))?;
            self.console.blank()?;
        }
        Ok(())
    }

    fn show_victory(&mut self, word: &str, streak: usize) -> Result<()> {
        self.console.blank()?;
        for line in victory_box(word, streak) {
            self.console.say(format!("  {}", line.green()))?;
        }
        self.console.blank()?;
        Ok(())
    }

    fn show_already_completed(&mut self, streak: usize) -> Result<()> {
        self.console.clear_screen()?;
        self.console.blank()?;
        self.console
            .say(format!("  {}", "Already completed today!".green()))?;
        self.console.say(format!(
            "  {}",
            format!("Current streak: {}", days(streak)).yellow()
        ))?;
        self.console
            .say(format!("  {}", "Come back tomorrow for a new word.".dim()))?;
        self.console.blank()?;
        Ok(())
    }
}

/// Bordered victory box, widened to fit long words.
fn victory_box(word: &str, streak: usize) -> Vec<String> {
    let lines = [
        String::new(),
        "Congratulations!".to_string(),
        format!("You mastered: {word}"),
        format!("Current streak: {}", days(streak)),
        String::new(),
        "Come back tomorrow for a new word!".to_string(),
        String::new(),
    ];
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(VICTORY_WIDTH);
    let border = "*".repeat(width + 6);

    let mut rows = vec![border.clone()];
    rows.extend(lines.iter().map(|l| format!("*   {l:<width$} *")));
    rows.push(border);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn widths(rows: &[String]) -> Vec<usize> {
        rows.iter().map(|r| r.chars().count()).collect()
    }

    #[test]
    fn test_victory_box_is_rectangular() {
        let rows = victory_box("ephemeral", 1);
        assert_eq!(rows.len(), 9);
        assert_eq!(widths(&rows), vec![44; 9]);
        assert!(rows.iter().any(|r| r.contains("Current streak: 1 day ")));
    }

    #[test]
    fn test_victory_box_widens_for_long_words() {
        let word = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let rows = victory_box(word, 12);
        let expected = "You mastered: ".len() + word.len() + 6;
        assert_eq!(widths(&rows), vec![expected; 9]);
        assert!(rows[3].ends_with(&format!("{word} *")));
    }
}
