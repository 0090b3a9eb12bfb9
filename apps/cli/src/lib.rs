//! Daily vocabulary drill for the terminal.

pub mod config;
pub mod corpus;
pub mod db;
pub mod enrichment;
pub mod interrupt;
pub mod judge;
pub mod selector;
pub mod session;
pub mod status;
pub mod terminal;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::InterruptGuard;

use crate::config::{Cli, Command};
use crate::corpus::Corpus;
use crate::db::date_utils::get_adjusted_today;
use crate::db::SqliteRepository;
use crate::session::{Session, SessionError};
use crate::terminal::Console;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let db_path = cli.db_path();
    let repo = SqliteRepository::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    let today = get_adjusted_today(cli.day_starts_at);

    match cli.command.unwrap_or(Command::Drill) {
        Command::Status => {
            status::print_status(&repo, today, &mut io::stdout())?;
            Ok(())
        }
        Command::Drill => drill(&cli, &repo, today),
    }
}

fn drill(cli: &Cli, repo: &SqliteRepository, today: chrono::NaiveDate) -> anyhow::Result<()> {
    interrupt::spawn_watcher(InterruptGuard::default())
        .context("failed to install Ctrl+C handler")?;

    let words_file = cli.words_file();
    let corpus = Corpus::load(&words_file)?;
    tracing::debug!("loaded {} words from {}", corpus.len(), words_file.display());

    let enricher = cli.build_enricher();
    let judge = cli.build_judge();
    let console = Console::new(io::stdin().lock(), io::stdout());

    let mut session = Session::new(repo, &corpus, judge.as_ref(), console, today)
        .with_enricher(enricher.as_ref())
        .with_marker_dir(cli.data_dir());

    match session.run() {
        Ok(outcome) => {
            tracing::info!("session finished: {:?}", outcome);
            Ok(())
        }
        Err(SessionError::InputClosed) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
