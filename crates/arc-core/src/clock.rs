use std::time::Duration;

/// Upper bound on ticks replayed in one frame after the window stalls.
pub const DEFAULT_MAX_CATCH_UP: usize = 8;

/// Smallest time step the millisecond timer can honour.
pub const MIN_TIME_STEP: f64 = 0.001;

/// Converts frame-to-frame wall-clock deltas into whole timer ticks.
///
/// The timer interval is `1000 * time_step` milliseconds. Leftover time is
/// carried to the next call; anything beyond `max_catch_up` ticks is dropped.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
    max_catch_up: usize,
}

impl TickClock {
    pub fn new(time_step: f64, max_catch_up: usize) -> Self {
        Self {
            interval: interval_for(time_step),
            accumulated: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    /// Feed `elapsed` wall-clock time and return how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due > self.max_catch_up {
            log::debug!("Dropping {} overdue ticks", due - self.max_catch_up);
            due = self.max_catch_up;
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

fn interval_for(time_step: f64) -> Duration {
    let millis = (time_step * 1000.0).round();
    if millis.is_finite() && millis >= 1.0 {
        Duration::from_millis(millis as u64)
    } else {
        Duration::from_millis(1)
    }
}
