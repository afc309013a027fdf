//! Recency classification for update badges.
//!
//! A record counts as recently updated when its date key decodes to a
//! calendar date inside a rolling window ending today. Undated records
//! are never recent. "Today" is an argument rather than a clock read,
//! so callers pick the reference date and tests stay deterministic.

use chrono::{Days, NaiveDate};

use faqdex_types::DateKey;

/// True when `key` falls within `window_days` days up to `today`,
/// inclusive on both ends. Future-dated keys are not recent.
#[must_use]
pub fn is_recent(key: DateKey, window_days: i64, today: NaiveDate) -> bool {
    let Some(date) = decode(key) else {
        return false;
    };
    let age = (today - date).num_days();
    (0..=window_days).contains(&age)
}

/// Materializes a key as a calendar date. Day components past the end
/// of the month (a clamped `02-31`, say) roll forward into the next
/// month, mirroring how the key was meant to read.
fn decode(key: DateKey) -> Option<NaiveDate> {
    if !key.is_dated() {
        return None;
    }
    let (year, month, day) = key.to_ymd();
    let first = NaiveDate::from_ymd_opt(year as i32, month, 1)?;
    first.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}
