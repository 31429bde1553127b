mod ticker;

pub use ticker::{CountdownTicker, TickerTick};

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

use crate::models::countdown::{CountdownSnapshot, RemainingTime};
use crate::utils::date::{end_of_day_utc, start_of_iso_week};

/// Voting closes at the end of every Monday, UTC.
pub const DEADLINE_WEEKDAY: Weekday = Weekday::Mon;

/// Returns the next vote deadline at or after `now`.
///
/// Sunday and Monday are already inside the closing window, so the
/// target is the end of the current round's Monday (the following
/// calendar day when `now` is a Sunday). Every other weekday targets
/// the Monday of the next ISO week.
pub fn next_deadline(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    match now.weekday() {
        Weekday::Mon => end_of_day_utc(today),
        Weekday::Sun => end_of_day_utc(today + Duration::days(1)),
        _ => end_of_day_utc(start_of_iso_week(today) + Duration::weeks(1)),
    }
}

/// Computes the deadline and the decomposed time left. Pure in `now`:
/// the target is re-derived on every call, so immediately past a
/// deadline the result rolls over to the following week instead of
/// going negative.
pub fn compute_remaining(now: DateTime<Utc>) -> CountdownSnapshot {
    let closes_at = next_deadline(now);
    CountdownSnapshot {
        closes_at,
        remaining: RemainingTime::from_duration(closes_at - now),
    }
}
