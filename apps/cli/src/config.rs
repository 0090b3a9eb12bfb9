//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use vocab_core::{FixedJudge, Judge, Verdict};

use crate::enrichment::{DictionaryClient, Enricher, NoEnrichment, DEFAULT_DICTIONARY_URL};
use crate::judge::ProcessJudge;

const DATA_DIR_NAME: &str = "vocab-agent";
const DB_FILE: &str = "vocab.db";
const WORDS_FILE: &str = "words.json";

#[derive(Debug, Parser)]
#[command(name = "vocab-drill", version, about = "Learn one new word a day in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the database, word list and completion markers
    #[arg(long, env = "VOCAB_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Word list (defaults to words.json in the data directory)
    #[arg(long, env = "VOCAB_WORDS_FILE", global = true)]
    pub words_file: Option<PathBuf>,

    /// Hour (0-23) at which a new day starts
    #[arg(
        long,
        env = "VOCAB_DAY_STARTS_AT",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..24),
        global = true
    )]
    pub day_starts_at: u32,

    /// Dictionary API base URL
    #[arg(long, env = "VOCAB_DICTIONARY_URL", default_value = DEFAULT_DICTIONARY_URL)]
    pub dictionary_url: String,

    /// Dictionary lookup timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub lookup_timeout: u64,

    /// Skip dictionary lookups
    #[arg(long)]
    pub offline: bool,

    /// Command used to judge sentences
    #[arg(long, env = "VOCAB_JUDGE_COMMAND", default_value = "claude")]
    pub judge_command: String,

    /// Argument passed to the judge command (repeatable)
    #[arg(
        long = "judge-arg",
        allow_hyphen_values = true,
        default_values = ["-p", "--model", "sonnet", "--max-budget-usd", "0.05"]
    )]
    pub judge_args: Vec<String>,

    /// Judge timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub judge_timeout: u64,

    /// Approve every sentence without calling the judge
    #[arg(long)]
    pub no_judge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run today's drill (default)
    Drill,
    /// Show streak and totals
    Status,
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR_NAME)
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join(DB_FILE)
    }

    pub fn words_file(&self) -> PathBuf {
        self.words_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(WORDS_FILE))
    }

    pub fn build_enricher(&self) -> Box<dyn Enricher> {
        if self.offline {
            return Box::new(NoEnrichment);
        }
        match DictionaryClient::new(
            self.dictionary_url.clone(),
            Duration::from_secs(self.lookup_timeout),
        ) {
            Ok(client) => Box::new(client),
            Err(e) => {
                tracing::warn!("dictionary lookups disabled: {}", e);
                Box::new(NoEnrichment)
            }
        }
    }

    pub fn build_judge(&self) -> Box<dyn Judge> {
        if self.no_judge {
            return Box::new(FixedJudge::new(Verdict::pass(
                "Auto-approved (judge disabled).",
            )));
        }
        Box::new(ProcessJudge::new(
            self.judge_command.clone(),
            self.judge_args.clone(),
            Duration::from_secs(self.judge_timeout),
        ))
    }
}
