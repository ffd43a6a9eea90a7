//! Clock abstraction for reading the current local time.
//!
//! The screen never talks to `chrono` directly; it goes through the `Clock`
//! trait so tests can substitute a fixed time.

use chrono::{Local, NaiveTime};

/// Read-only source of the current local time-of-day.
///
/// The time is wall-clock time in the platform's default time zone, date
/// excluded.
pub trait Clock {
    /// Returns the current local time-of-day.
    fn now(&self) -> NaiveTime;
}

/// The real clock: reads the system time in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that always returns the same time. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
