//! Timestamp generators.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

/// Output format of `updated_at` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Largest day offset into the past.
pub const MAX_DAYS_AGO: i64 = 365;

/// Generate a timestamp up to a year before `anchor`.
///
/// The offset is a random number of days in `[0, 365]` plus a random hour
/// in `[0, 23]` and minute in `[0, 59]`, so the result is never after
/// the anchor.
pub fn generate_recent_timestamp<R: Rng>(rng: &mut R, anchor: NaiveDateTime) -> NaiveDateTime {
    let days = rng.random_range(0..=MAX_DAYS_AGO);
    let hours = rng.random_range(0..=23);
    let minutes = rng.random_range(0..=59);

    anchor - Duration::days(days) - Duration::hours(hours) - Duration::minutes(minutes)
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
