use std::time::Duration;

/// Most ticks a single `advance` will release after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fixed-step accumulator: frame time goes in, whole ticks come out.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return how many ticks are now due
    ///
    /// The remainder below one interval carries over to the next call. At
    /// most [`MAX_CATCH_UP_TICKS`] are released at once; the rest of a long
    /// stall is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let due = self.accumulated.as_nanos() / self.interval.as_nanos();
        let remainder = self.accumulated.as_nanos() % self.interval.as_nanos();
        self.accumulated = Duration::from_nanos(remainder as u64);
        due.min(MAX_CATCH_UP_TICKS as u128) as u32
    }

    /// Forget any partial interval
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
