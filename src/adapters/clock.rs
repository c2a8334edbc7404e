//! Clock adapters.
//!
//! `SystemClock` reads the wall clock. `MockClock` is a hand-set clock for
//! tests that move time deterministically.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Hand-set clock for tests.
#[derive(Debug)]
pub struct MockClock {
    now: RwLock<Timestamp>,
}

impl MockClock {
    /// Creates a clock frozen at the given instant.
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Moves the clock to an instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.write().unwrap() = now;
    }

    /// Advances the clock by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.write().unwrap();
        *now = now.plus_secs(secs);
    }

    /// Advances the clock by whole minutes.
    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.write().unwrap();
        *now = now.plus_minutes(minutes);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap()
    }
}
