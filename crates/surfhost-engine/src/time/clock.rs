use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic elapsed-time source.
///
/// Readings are measured from the last `reset` and never decrease between resets.
pub trait Clock {
    /// Time elapsed since the clock was created or last reset.
    fn elapsed(&self) -> Duration;

    /// Returns the reading to zero and keeps the clock running.
    fn reset(&mut self);
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    origin: Instant,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for Stopwatch {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    fn reset(&mut self) {
        self.origin = Instant::now();
    }
}

/// Manually advanced clock.
///
/// Clones share one reading, so a test can keep a handle while the timer under
/// test owns another. Single-threaded by construction (`Rc<Cell<_>>`).
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Moves the reading forward by `ms` milliseconds.
    pub fn advance_millis(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Overwrites the reading.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }

    fn reset(&mut self) {
        self.now.set(Duration::ZERO);
    }
}
