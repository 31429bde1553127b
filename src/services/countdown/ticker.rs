use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

use crate::models::countdown::CountdownSnapshot;

use super::compute_remaining;

/// Outcome of one ticker poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickerTick {
    /// Fresh snapshot when the tick was due; `None` while suspended or
    /// between ticks.
    pub snapshot: Option<CountdownSnapshot>,
    /// Whether the displayed value differs from the previous snapshot.
    pub changed: bool,
    /// Time until the next tick is due; `None` while suspended.
    pub next_due_in: Option<StdDuration>,
}

/// Re-runs the deadline computation on a fixed cadence while the panel
/// is visible. The host drives `tick` from its own loop; nothing runs
/// in the background, and a suspended ticker computes nothing.
pub struct CountdownTicker {
    interval: Duration,
    active: bool,
    next_tick_at: Option<DateTime<Utc>>,
    last_snapshot: Option<CountdownSnapshot>,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::with_interval(StdDuration::from_millis(1_000))
    }

    pub fn with_interval(interval: StdDuration) -> Self {
        Self {
            interval: Duration::from_std(interval).unwrap_or_else(|_| Duration::seconds(1)),
            active: true,
            next_tick_at: None,
            last_snapshot: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stops scheduling further ticks until `resume` is called.
    pub fn suspend(&mut self) {
        if self.active {
            log::debug!("Countdown ticker suspended");
        }
        self.active = false;
    }

    /// Reactivates the ticker; the next tick is due immediately.
    pub fn resume(&mut self) {
        self.active = true;
        self.next_tick_at = None;
    }

    pub fn last_snapshot(&self) -> Option<&CountdownSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn tick(&mut self) -> TickerTick {
        self.tick_at(Utc::now())
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> TickerTick {
        if !self.active {
            return TickerTick::default();
        }

        if let Some(next_tick_at) = self.next_tick_at {
            if now < next_tick_at {
                let wait = (next_tick_at - now).to_std().unwrap_or(StdDuration::ZERO);
                return TickerTick {
                    snapshot: None,
                    changed: false,
                    next_due_in: Some(wait),
                };
            }
        }

        let snapshot = compute_remaining(now);
        let changed = self.last_snapshot != Some(snapshot);
        self.last_snapshot = Some(snapshot);
        self.next_tick_at = Some(now + self.interval);

        TickerTick {
            snapshot: Some(snapshot),
            changed,
            next_due_in: self.interval.to_std().ok(),
        }
    }
}
