//! Shared seconds counter.
//!
//! One counter backs the focus timer, the stopwatch and every pomodoro
//! phase, parameterized by direction instead of three near-identical
//! interval loops.

/// Counting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTick {
    /// Counter was not running; nothing changed.
    Idle,
    /// Value moved by one second.
    Advanced,
    /// A countdown reached zero on this tick; the counter stopped.
    Finished,
}

/// A 1 Hz counter; the owner calls `tick()` once per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondsCounter {
    value: u32,
    direction: Direction,
    running: bool,
}

impl SecondsCounter {
    /// A stopped countdown starting from `seconds`.
    pub fn countdown(seconds: u32) -> Self {
        Self {
            value: seconds,
            direction: Direction::Down,
            running: false,
        }
    }

    /// A stopped count-up starting from zero.
    pub fn countup() -> Self {
        Self {
            value: 0,
            direction: Direction::Up,
            running: false,
        }
    }

    /// Advances one second when running.
    pub fn tick(&mut self) -> CounterTick {
        if !self.running {
            return CounterTick::Idle;
        }
        match self.direction {
            Direction::Up => {
                self.value = self.value.saturating_add(1);
                CounterTick::Advanced
            }
            Direction::Down => {
                self.value = self.value.saturating_sub(1);
                if self.value == 0 {
                    self.running = false;
                    CounterTick::Finished
                } else {
                    CounterTick::Advanced
                }
            }
        }
    }

    /// Flips running without touching the value.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and rewinds to `value`.
    pub fn reset_to(&mut self, value: u32) {
        self.running = false;
        self.value = value;
    }

    /// Replaces the value without changing the running flag.
    pub fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
