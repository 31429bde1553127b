// Date helpers for the weekly vote schedule

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

/// Last instant (millisecond precision) of `date` in UTC.
pub fn end_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).unwrap())
}

/// Monday of the ISO week containing `date`.
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
