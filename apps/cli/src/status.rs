//! `vocab-drill status`: streak and totals.

use std::io::Write;

use chrono::NaiveDate;
use crossterm::style::Stylize;

use crate::db::{DrillStats, StatsRepository};
use crate::terminal::days;

pub fn print_status<S: StatsRepository, W: Write>(
    repo: &S,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<DrillStats> {
    let stats = repo.get_drill_stats(today)?;

    let today_line = if stats.completed_today {
        "done".green()
    } else {
        "not yet".yellow()
    };
    writeln!(out, "  Streak:          {}", days(stats.streak_days).bold())?;
    writeln!(out, "  Today:           {}", today_line)?;
    writeln!(out, "  Words seen:      {}", stats.words_seen)?;
    writeln!(out, "  Words completed: {}", stats.words_completed)?;
    writeln!(out, "  Quiz attempts:   {}", stats.total_attempts)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{SqliteRepository, WordRepository};
    use vocab_core::CanonicalWordEntry;

    #[test]
    fn test_status_report() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let yesterday = today.pred_opt().unwrap();
        let entry = CanonicalWordEntry {
            word: "cogent".to_string(),
            ..Default::default()
        };
        repo.record_shown("cogent", &entry, yesterday).unwrap();
        repo.record_completion("cogent", yesterday).unwrap();
        repo.record_shown("lucid", &entry, today).unwrap();

        let mut out = Vec::new();
        let stats = print_status(&repo, today, &mut out).unwrap();
        assert_eq!(stats.words_seen, 2);
        assert_eq!(stats.words_completed, 1);
        assert_eq!(stats.streak_days, 0);
        assert!(!stats.completed_today);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0 days"));
        assert!(text.contains("not yet"));
    }
}
