//! Stopwatch: count-up engine with an append-only lap list.
//!
//! Tick resolution is one second; the higher-resolution hundredths
//! variant seen in some designs is intentionally not implemented.

use super::counter::SecondsCounter;

/// Count-up engine for one stopwatch window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwatch {
    counter: SecondsCounter,
    laps: Vec<u32>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            counter: SecondsCounter::countup(),
            laps: Vec::new(),
        }
    }

    /// Advances one second while running.
    pub fn tick(&mut self) {
        self.counter.tick();
    }

    /// Start/stop without clearing elapsed time.
    pub fn toggle(&mut self) {
        self.counter.toggle();
    }

    /// Records the current elapsed value; laps are append-only.
    pub fn lap(&mut self) {
        self.laps.push(self.counter.value());
    }

    /// Laps in display order: most recent first.
    pub fn laps(&self) -> impl Iterator<Item = u32> + '_ {
        self.laps.iter().rev().copied()
    }

    /// Clears elapsed time and laps, and stops.
    pub fn reset(&mut self) {
        self.counter.reset_to(0);
        self.laps.clear();
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.counter.value()
    }

    pub fn is_running(&self) -> bool {
        self.counter.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::Stopwatch;

    fn run_for(stopwatch: &mut Stopwatch, seconds: u32) {
        for _ in 0..seconds {
            stopwatch.tick();
        }
    }

    #[test]
    fn laps_read_most_recent_first() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        run_for(&mut stopwatch, 5);
        stopwatch.lap();
        run_for(&mut stopwatch, 7);
        stopwatch.lap();
        run_for(&mut stopwatch, 8);
        stopwatch.lap();
        let laps: Vec<u32> = stopwatch.laps().collect();
        assert_eq!(laps, vec![20, 12, 5]);
    }

    #[test]
    fn reset_clears_elapsed_and_laps() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        run_for(&mut stopwatch, 3);
        stopwatch.lap();
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_seconds(), 0);
        assert_eq!(stopwatch.laps().count(), 0);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn stopped_stopwatch_ignores_ticks() {
        let mut stopwatch = Stopwatch::new();
        run_for(&mut stopwatch, 10);
        assert_eq!(stopwatch.elapsed_seconds(), 0);
    }
}
