/*
 * Step Clock Module
 *
 * Fixed-interval scheduling for the arena. The clock accumulates elapsed
 * wall-clock time and reports how many simulation ticks are due, so the
 * caller runs each step to completion before the next one starts. There is
 * only ever one schedule: starting again replaces the current interval.
 */

use std::time::Duration;

use crate::error::ArenaError;

/// Upper bound on ticks reported by a single `advance` call. Any backlog
/// beyond this is dropped rather than replayed.
pub const MAX_CATCH_UP_STEPS: u32 = 5;

// Time between ticks at `framerate`; rejects rates whose interval does not
// fit in a Duration
pub fn tick_interval(framerate: f32) -> Result<Duration, ArenaError> {
    if !framerate.is_finite() || framerate <= 0.0 {
        return Err(ArenaError::InvalidFramerate(framerate));
    }

    Duration::try_from_secs_f64(1.0 / f64::from(framerate))
        .map_err(|_| ArenaError::InvalidFramerate(framerate))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running { interval: Duration },
}

#[derive(Debug, Clone)]
pub struct StepClock {
    state: ClockState,
    accumulator: Duration,
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            state: ClockState::Idle,
            accumulator: Duration::ZERO,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            ClockState::Running { interval } => Some(interval),
            ClockState::Idle => None,
        }
    }

    // Schedule a tick every `1 / framerate` seconds, replacing any schedule
    // already in place. Returns the tick interval.
    pub fn start(&mut self, framerate: f32) -> Result<Duration, ArenaError> {
        let interval = tick_interval(framerate)?;
        self.state = ClockState::Running { interval };
        self.accumulator = Duration::ZERO;
        Ok(interval)
    }

    // Cancel the schedule. Returns whether a schedule was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = ClockState::Idle;
        self.accumulator = Duration::ZERO;
        was_running
    }

    // Feed elapsed time into the clock and return the number of ticks due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let interval = match self.state {
            ClockState::Running { interval } => interval,
            ClockState::Idle => return 0,
        };

        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= interval && due < MAX_CATCH_UP_STEPS {
            self.accumulator -= interval;
            due += 1;
        }

        // Drop whatever backlog is left over after catching up
        if self.accumulator >= interval {
            self.accumulator = Duration::ZERO;
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_clock_reports_no_ticks() {
        let mut clock = StepClock::new();
        assert_eq!(clock.advance(Duration::from_secs(10)), 0);
        assert_eq!(clock.state(), ClockState::Idle);
    }

    #[test]
    fn running_clock_reports_due_ticks() {
        let mut clock = StepClock::new();
        let interval = clock.start(10.0).unwrap();
        assert_eq!(interval, Duration::from_millis(100));

        assert_eq!(clock.advance(Duration::from_millis(50)), 0);
        assert_eq!(clock.advance(Duration::from_millis(60)), 1);
        assert_eq!(clock.advance(Duration::from_millis(190)), 2);
    }

    #[test]
    fn catch_up_is_capped_and_backlog_dropped() {
        let mut clock = StepClock::new();
        clock.start(10.0).unwrap();

        assert_eq!(clock.advance(Duration::from_secs(5)), MAX_CATCH_UP_STEPS);
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn restarting_replaces_the_schedule() {
        let mut clock = StepClock::new();
        clock.start(10.0).unwrap();
        clock.start(20.0).unwrap();

        assert_eq!(clock.interval(), Some(Duration::from_millis(50)));
        // One schedule at 20 Hz, not a 10 Hz and a 20 Hz schedule together
        assert_eq!(clock.advance(Duration::from_millis(100)), 2);
    }

    #[test]
    fn stop_is_safe_when_idle() {
        let mut clock = StepClock::new();
        assert!(!clock.stop());

        clock.start(30.0).unwrap();
        assert!(clock.stop());
        assert!(!clock.is_running());
        assert!(!clock.stop());
    }

    #[test]
    fn rejects_non_positive_framerate() {
        let mut clock = StepClock::new();
        assert!(matches!(clock.start(0.0), Err(ArenaError::InvalidFramerate(_))));
        assert!(matches!(clock.start(-5.0), Err(ArenaError::InvalidFramerate(_))));
        assert!(matches!(clock.start(f32::NAN), Err(ArenaError::InvalidFramerate(_))));
        assert!(!clock.is_running());
    }

    #[test]
    fn rejects_framerate_with_unrepresentable_interval() {
        let mut clock = StepClock::new();
        assert!(matches!(clock.start(1e-25), Err(ArenaError::InvalidFramerate(_))));
        assert!(matches!(tick_interval(f32::MIN_POSITIVE), Err(ArenaError::InvalidFramerate(_))));
        assert!(!clock.is_running());

        // Slow but representable rates are still accepted
        assert_eq!(clock.start(0.5).unwrap(), Duration::from_secs(2));
    }
}
