//! Clock trait — injectable wall-clock time.
//!
//! The calendar invite is the only place the assistant reads the current
//! time. Going through a trait keeps that path deterministic in tests.

use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
