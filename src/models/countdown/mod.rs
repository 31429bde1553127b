use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Decomposed time left until the vote deadline. Whole days are
/// subtracted from the total before the hour/minute/second fields are
/// derived, so `hours` is always 0-23 and `minutes`/`seconds` 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingTime {
    /// Splits a duration into whole days plus the hour/minute/second
    /// remainder. Negative durations clamp to zero.
    pub fn from_duration(remaining: Duration) -> Self {
        let total_secs = remaining.num_seconds().max(0);
        Self {
            days: total_secs / 86_400,
            hours: (total_secs % 86_400) / 3_600,
            minutes: (total_secs % 3_600) / 60,
            seconds: total_secs % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The days segment is hidden once the deadline is under a day away.
        if self.days > 0 {
            write!(f, "{}d ", self.days)?;
        }
        write!(
            f,
            "{:02}h {:02}m {:02}s",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// One countdown computation: the deadline it was measured against and
/// the decomposed time left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub closes_at: DateTime<Utc>,
    pub remaining: RemainingTime,
}
