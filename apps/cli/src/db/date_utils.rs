//! Date utilities for the daily reset hour and stored date strings.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};

/// Storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get adjusted "today" based on daily_reset_hour.
///
/// If the current hour is before the reset hour, "today" is actually "yesterday"
/// from a drill perspective. This allows users to practice late at night and have
/// it count towards the previous day.
///
/// # Arguments
/// * `daily_reset_hour` - Hour of day (0-23) when a new drill day begins
pub fn get_adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_date(Local::now(), daily_reset_hour)
}

/// Drill day for a given instant.
pub fn adjusted_date<Tz: TimeZone>(now: DateTime<Tz>, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Format a date as YYYY-MM-DD for SQL queries.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored YYYY-MM-DD string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
