//! Pomodoro cycle controller.
//!
//! # Responsibility
//! - Drive the focus / short-break / long-break phase machine.
//! - Apply duration edits with active-phase reload semantics.
//!
//! # Invariants
//! - `current_cycle` stays in `[1, total_cycles]`.
//! - Phase transitions only happen when the running countdown for the
//!   current phase reaches zero.
//! - A full run emits exactly one `CyclesCompleted` event, after which
//!   the controller is back at `{focus, cycle 1, stopped}`.

use super::counter::{CounterTick, SecondsCounter};
use super::parse_minutes_field;

/// Pomodoro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Display label for the phase banner.
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus Session",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

/// Phase durations and cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroConfig {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub total_cycles: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            total_cycles: 4,
        }
    }
}

impl PomodoroConfig {
    fn seconds_for(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Focus => self.focus_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        minutes * 60
    }
}

/// Emitted by `tick()` when something phase-level happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroEvent {
    /// A new phase just started.
    PhaseStarted(Phase),
    /// All configured cycles finished; the controller reset and stopped.
    CyclesCompleted,
}

/// The three-phase cycle state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    config: PomodoroConfig,
    phase: Phase,
    current_cycle: u32,
    counter: SecondsCounter,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroConfig::default())
    }
}

impl Pomodoro {
    /// A stopped controller at `{focus, cycle 1}`.
    pub fn new(config: PomodoroConfig) -> Self {
        Self {
            config,
            phase: Phase::Focus,
            current_cycle: 1,
            counter: SecondsCounter::countdown(config.seconds_for(Phase::Focus)),
        }
    }

    /// Advances one second; drives phase transitions at zero.
    pub fn tick(&mut self) -> Option<PomodoroEvent> {
        match self.counter.tick() {
            CounterTick::Finished => Some(self.advance_phase()),
            _ => None,
        }
    }

    fn advance_phase(&mut self) -> PomodoroEvent {
        match self.phase {
            Phase::Focus => {
                if self.current_cycle >= self.config.total_cycles {
                    self.phase = Phase::Focus;
                    self.current_cycle = 1;
                    self.counter.reset_to(self.config.seconds_for(Phase::Focus));
                    return PomodoroEvent::CyclesCompleted;
                }
                self.current_cycle += 1;
                self.phase = if self.current_cycle % self.config.total_cycles == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                };
                self.counter.reset_to(self.config.seconds_for(self.phase));
                self.counter.start();
                PomodoroEvent::PhaseStarted(self.phase)
            }
            Phase::ShortBreak | Phase::LongBreak => {
                self.phase = Phase::Focus;
                self.counter.reset_to(self.config.seconds_for(Phase::Focus));
                self.counter.start();
                PomodoroEvent::PhaseStarted(Phase::Focus)
            }
        }
    }

    /// Start/pause the current phase without losing progress.
    pub fn toggle(&mut self) {
        self.counter.toggle();
    }

    /// Stops and rewinds to `{focus, cycle 1}` at the configured duration.
    pub fn reset(&mut self) {
        self.phase = Phase::Focus;
        self.current_cycle = 1;
        self.counter.reset_to(self.config.seconds_for(Phase::Focus));
    }

    /// Edits one phase duration from a free-text minutes field.
    ///
    /// Invalid input is rejected and the previous value retained. When
    /// the edited phase is the active one and the controller is paused,
    /// the remaining time reloads immediately; other phases pick up the
    /// new duration when they are next entered.
    pub fn set_phase_minutes(&mut self, phase: Phase, input: &str) -> bool {
        let Some(minutes) = parse_minutes_field(input) else {
            return false;
        };
        match phase {
            Phase::Focus => self.config.focus_minutes = minutes,
            Phase::ShortBreak => self.config.short_break_minutes = minutes,
            Phase::LongBreak => self.config.long_break_minutes = minutes,
        }
        if !self.counter.is_running() && self.phase == phase {
            self.counter.set_value(minutes * 60);
        }
        true
    }

    /// Edits the total cycle count from a free-text field.
    ///
    /// `current_cycle` is clamped down so it never exceeds the new total.
    pub fn set_total_cycles(&mut self, input: &str) -> bool {
        let Some(total) = parse_minutes_field(input) else {
            return false;
        };
        self.config.total_cycles = total;
        self.current_cycle = self.current_cycle.min(total);
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_cycle(&self) -> u32 {
        self.current_cycle
    }

    pub fn seconds_left(&self) -> u32 {
        self.counter.value()
    }

    pub fn is_running(&self) -> bool {
        self.counter.is_running()
    }

    pub fn config(&self) -> &PomodoroConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, Pomodoro, PomodoroConfig, PomodoroEvent};

    fn quick(total_cycles: u32) -> Pomodoro {
        // One-minute phases keep the tick counts small.
        let mut pomodoro = Pomodoro::new(PomodoroConfig {
            focus_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 1,
            total_cycles,
        });
        pomodoro.toggle();
        pomodoro
    }

    fn run_phase(pomodoro: &mut Pomodoro) -> Option<PomodoroEvent> {
        let mut last = None;
        while last.is_none() {
            last = pomodoro.tick();
            if !pomodoro.is_running() {
                break;
            }
        }
        last
    }

    #[test]
    fn focus_flows_into_short_break() {
        let mut pomodoro = quick(4);
        let event = run_phase(&mut pomodoro);
        assert_eq!(event, Some(PomodoroEvent::PhaseStarted(Phase::ShortBreak)));
        assert_eq!(pomodoro.current_cycle(), 2);
        assert!(pomodoro.is_running());
    }

    #[test]
    fn break_returns_to_focus() {
        let mut pomodoro = quick(4);
        run_phase(&mut pomodoro);
        let event = run_phase(&mut pomodoro);
        assert_eq!(event, Some(PomodoroEvent::PhaseStarted(Phase::Focus)));
        assert_eq!(pomodoro.current_cycle(), 2);
    }

    #[test]
    fn last_cycle_before_completion_takes_the_long_break() {
        let mut pomodoro = quick(4);
        // focus(1) -> short -> focus(2) -> short -> focus(3) -> long
        for _ in 0..4 {
            run_phase(&mut pomodoro);
        }
        let event = run_phase(&mut pomodoro);
        assert_eq!(event, Some(PomodoroEvent::PhaseStarted(Phase::LongBreak)));
        assert_eq!(pomodoro.current_cycle(), 4);
    }

    #[test]
    fn paused_edit_of_active_phase_reloads_remaining_time() {
        let mut pomodoro = Pomodoro::default();
        assert!(pomodoro.set_phase_minutes(Phase::Focus, "10"));
        assert_eq!(pomodoro.seconds_left(), 10 * 60);

        // Editing an inactive phase is deferred.
        assert!(pomodoro.set_phase_minutes(Phase::ShortBreak, "2"));
        assert_eq!(pomodoro.seconds_left(), 10 * 60);
        assert_eq!(pomodoro.config().short_break_minutes, 2);
    }

    #[test]
    fn running_edit_does_not_reload_remaining_time() {
        let mut pomodoro = Pomodoro::default();
        pomodoro.toggle();
        pomodoro.tick();
        let before = pomodoro.seconds_left();
        assert!(pomodoro.set_phase_minutes(Phase::Focus, "50"));
        assert_eq!(pomodoro.seconds_left(), before);
    }

    #[test]
    fn invalid_duration_input_is_rejected() {
        let mut pomodoro = Pomodoro::default();
        assert!(!pomodoro.set_phase_minutes(Phase::Focus, "zero"));
        assert!(!pomodoro.set_phase_minutes(Phase::Focus, "-2"));
        assert!(!pomodoro.set_total_cycles("0"));
        assert_eq!(pomodoro.config().focus_minutes, 25);
        assert_eq!(pomodoro.config().total_cycles, 4);
    }

    #[test]
    fn absurdly_large_duration_input_is_rejected_not_applied() {
        let mut pomodoro = Pomodoro::default();
        assert!(!pomodoro.set_phase_minutes(Phase::Focus, "100000000"));
        assert!(!pomodoro.set_total_cycles("100000000"));
        assert_eq!(pomodoro.config().focus_minutes, 25);
        assert_eq!(pomodoro.config().total_cycles, 4);
        assert_eq!(pomodoro.seconds_left(), 25 * 60);
    }

    #[test]
    fn shrinking_total_cycles_clamps_current_cycle() {
        let mut pomodoro = quick(4);
        run_phase(&mut pomodoro); // now on cycle 2
        run_phase(&mut pomodoro);
        run_phase(&mut pomodoro); // cycle 3
        assert_eq!(pomodoro.current_cycle(), 3);
        assert!(pomodoro.set_total_cycles("2"));
        assert_eq!(pomodoro.current_cycle(), 2);
    }
}
