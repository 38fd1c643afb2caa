//! Wall-clock collaborator.
//!
//! # Responsibility
//! - Give stores a single seam for "now" and "today".
//!
//! # Invariants
//! - Production code uses `SystemClock`; tests substitute `FixedClock`
//!   so daily-reset and future-message behavior is deterministic.

use chrono::{Local, NaiveDate, Utc};

/// Source of the current time and calendar day.
pub trait Clock {
    /// Current instant in epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
    /// Current calendar day in the user's local timezone.
    fn today(&self) -> NaiveDate;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one instant; for tests and deterministic probes.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now_ms: i64,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(now_ms: i64, today: NaiveDate) -> Self {
        Self { now_ms, today }
    }

    /// Returns a copy advanced by whole days; `now_ms` moves with it.
    pub fn plus_days(&self, days: i64) -> Self {
        Self {
            now_ms: self.now_ms + days * 86_400_000,
            today: self.today + chrono::Duration::days(days),
        }
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
