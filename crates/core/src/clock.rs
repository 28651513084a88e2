//! Wall-clock seam
//!
//! The store reads the time exactly once per successful placement. Going
//! through a trait keeps insertion timestamps deterministic under test.

use chrono::{DateTime, Local};

/// Source of insertion timestamps
pub trait Clock {
    /// Current local date-time
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
