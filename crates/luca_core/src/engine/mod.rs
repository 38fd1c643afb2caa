//! Timer engines: pure, tick-driven state machines.
//!
//! # Responsibility
//! - Provide the countdown/count-up core shared by every timer tool.
//! - Validate free-text duration input from the tool forms.
//!
//! # Invariants
//! - Engines never own a tick source; the session calls `tick()` once
//!   per wall-clock second. A dropped engine therefore can never tick
//!   again, which is how close-cancels-timer is guaranteed.
//! - Tick resolution is one second across all engines.

mod counter;
mod focus_timer;
mod pomodoro;
mod stopwatch;

pub use counter::{CounterTick, Direction, SecondsCounter};
pub use focus_timer::{FocusTimer, FocusTimerEvent};
pub use pomodoro::{Phase, Pomodoro, PomodoroConfig, PomodoroEvent};
pub use stopwatch::Stopwatch;

/// Upper bound for free-text minute and cycle fields.
///
/// Keeps `minutes * 60` far away from `u32` overflow; anything larger
/// is nonsense input for a study timer anyway.
pub const MAX_MINUTES_FIELD: u32 = 999;

/// Parses a minutes field; rejects non-numeric, negative, zero and
/// out-of-range input.
///
/// Returns `None` for rejected input so callers keep the previous value.
pub fn parse_minutes_field(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(value) if (1..=MAX_MINUTES_FIELD).contains(&value) => Some(value),
        _ => None,
    }
}

/// Parses a seconds field; accepts `0..=59` only.
pub fn parse_seconds_field(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(value) if value <= 59 => Some(value),
        _ => None,
    }
}

/// Formats whole seconds as `MM:SS` for window chrome.
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_mm_ss, parse_minutes_field, parse_seconds_field};

    #[test]
    fn minutes_field_rejects_junk_and_zero() {
        assert_eq!(parse_minutes_field("25"), Some(25));
        assert_eq!(parse_minutes_field(" 5 "), Some(5));
        assert_eq!(parse_minutes_field("0"), None);
        assert_eq!(parse_minutes_field("-3"), None);
        assert_eq!(parse_minutes_field("abc"), None);
        assert_eq!(parse_minutes_field(""), None);
    }

    #[test]
    fn minutes_field_rejects_out_of_range_values() {
        assert_eq!(parse_minutes_field("999"), Some(999));
        assert_eq!(parse_minutes_field("1000"), None);
        assert_eq!(parse_minutes_field("100000000"), None);
        assert_eq!(parse_minutes_field("4294967295"), None);
    }

    #[test]
    fn seconds_field_is_bounded() {
        assert_eq!(parse_seconds_field("0"), Some(0));
        assert_eq!(parse_seconds_field("59"), Some(59));
        assert_eq!(parse_seconds_field("60"), None);
        assert_eq!(parse_seconds_field("-1"), None);
    }

    #[test]
    fn mm_ss_formatting_pads_both_fields() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
    }
}
