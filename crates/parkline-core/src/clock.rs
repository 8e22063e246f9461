//! # Clock
//!
//! The facility never reads the wall clock directly. It asks an injected
//! [`Clock`] for "now" on every enter and exit.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Production:  SystemClock  ──► Utc::now()                        │
//! │  Tests:       ManualClock  ──► fixed instant, advanced by hand   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven time for deterministic tests and replays.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to a facility.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        ManualClock {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Starts at 2025-01-01 00:00:00 UTC.
    pub fn from_recent() -> Self {
        Self::new(
            Utc.timestamp_opt(1_735_689_600, 0)
                .single()
                .unwrap_or_default(),
        )
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = *current + by;
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance(Duration::minutes(minutes));
    }

    /// Moves time to an absolute instant, including backwards.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shares_time_between_clones() {
        let clock = ManualClock::from_recent();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance_minutes(90);
        assert_eq!(clock.now() - start, Duration::minutes(90));

        handle.set(start - Duration::hours(1));
        assert!(clock.now() < start);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
