//! Time source for history timestamps and report headers.

use jiff::Timestamp;

/// Where "now" comes from.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock frozen at one instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

#[cfg(test)]
impl FixedClock {
    /// 2024-01-15 09:30:00 UTC.
    pub fn sample() -> Self {
        Self("2024-01-15T09:30:00Z".parse().unwrap())
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
