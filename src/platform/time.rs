//! Monotonic time sources
//!
//! Instants are `Duration`s measured from the clock's origin. Wall-clock time
//! is never used: an adjusted system clock would corrupt jump judgment.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait Clock {
    /// Time elapsed since this clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Real monotonic clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock for headless runs and tests
///
/// Clones share the same instant, so a host can keep one handle to advance
/// time while the round machine reads another.
#[derive(Debug, Clone, Default)]
pub struct SteppedClock {
    now: Rc<Cell<Duration>>,
}

impl SteppedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at the given instant
    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an instant. Earlier instants are ignored.
    pub fn set(&self, to: Duration) {
        if to >= self.now.get() {
            self.now.set(to);
        } else {
            log::warn!(
                "SteppedClock refused to move backwards ({:?} < {:?})",
                to,
                self.now.get()
            );
        }
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Duration of one tick at the given rate
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_secs(1) / tick_rate.max(1)
}
