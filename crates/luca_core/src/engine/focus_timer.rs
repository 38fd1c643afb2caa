//! Focus timer: a simple countdown with a configurable default duration.

use super::counter::{CounterTick, SecondsCounter};
use super::{parse_minutes_field, parse_seconds_field};

/// Default focus session length.
pub const DEFAULT_FOCUS_SECONDS: u32 = 25 * 60;

/// Emitted when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTimerEvent {
    SessionEnded,
}

/// Countdown engine for one focus-timer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    counter: SecondsCounter,
    default_seconds: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    /// A stopped timer at the 25-minute default.
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_FOCUS_SECONDS)
    }

    /// A stopped timer with a custom default duration.
    pub fn with_duration(seconds: u32) -> Self {
        Self {
            counter: SecondsCounter::countdown(seconds),
            default_seconds: seconds,
        }
    }

    /// Advances one second; fires once when the session ends.
    pub fn tick(&mut self) -> Option<FocusTimerEvent> {
        match self.counter.tick() {
            CounterTick::Finished => Some(FocusTimerEvent::SessionEnded),
            _ => None,
        }
    }

    /// Start/pause without losing progress.
    pub fn toggle(&mut self) {
        // Toggling a finished timer rewinds first so start means start.
        if self.counter.value() == 0 && !self.counter.is_running() {
            self.counter.reset_to(self.default_seconds);
        }
        self.counter.toggle();
    }

    /// Stops and restores the configured default duration.
    pub fn reset(&mut self) {
        self.counter.reset_to(self.default_seconds);
    }

    /// Reconfigures the duration from free-text minute/second fields.
    ///
    /// Invalid or zero-length input is rejected and the previous
    /// duration retained. While stopped, the remaining time reloads to
    /// the new duration; while running, it applies on the next reset.
    pub fn set_duration(&mut self, minutes_input: &str, seconds_input: &str) -> bool {
        let minutes = match minutes_input.trim() {
            "0" => Some(0),
            other => parse_minutes_field(other),
        };
        let (Some(minutes), Some(seconds)) = (minutes, parse_seconds_field(seconds_input)) else {
            return false;
        };
        let total = minutes * 60 + seconds;
        if total == 0 {
            return false;
        }
        self.default_seconds = total;
        if !self.counter.is_running() {
            self.counter.set_value(total);
        }
        true
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.counter.value()
    }

    /// Minutes part of the remaining time.
    pub fn minutes(&self) -> u32 {
        self.counter.value() / 60
    }

    /// Seconds part of the remaining time.
    pub fn seconds(&self) -> u32 {
        self.counter.value() % 60
    }

    pub fn is_running(&self) -> bool {
        self.counter.is_running()
    }
}
