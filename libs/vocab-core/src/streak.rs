//! Consecutive-day streak arithmetic.

use chrono::NaiveDate;
use std::collections::HashSet;

/// Count consecutive completed days ending at `anchor`.
///
/// The anchor itself must be completed, otherwise the streak is 0.
pub fn consecutive_days(completed: &HashSet<NaiveDate>, anchor: NaiveDate) -> usize {
    let mut streak = 0usize;
    let mut current = Some(anchor);

    while let Some(day) = current {
        if !completed.contains(&day) {
            break;
        }
        streak += 1;
        current = day.pred_opt();
    }

    streak
}
