//! Injected time source for the pure domain layer.
//!
//! Domain code never reads the system clock directly; callers hand in a
//! `Clock` so record timestamps stay deterministic under test.

use chrono::{DateTime, Utc};

/// Time source abstraction.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. For processes, not for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Pinned to the Unix epoch.
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
