//! Time sources for the game loop scheduler.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A source of elapsed-time readings.
///
/// Readings only need to be comparable against earlier readings from the
/// same clock; different clocks need not agree on an epoch.
pub trait Clock: std::fmt::Debug {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Monotonic clock measuring from when it was created.
///
/// Immune to wall-time jumps, so suited for short repeat intervals.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    /// When this clock started.
    epoch: Instant,
}

impl MonotonicClock {
    /// Creates a clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
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
        self.epoch.elapsed()
    }
}

/// Clock reading wall time since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Hand-driven clock. Clones share one reading, so a test can hold a
/// handle while the scheduler holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    /// Shared current reading.
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Sets the reading directly.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
