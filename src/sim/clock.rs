//! Time sources
//!
//! The simulation never reads the wall clock itself: the driver samples a
//! [`MonotonicClock`] once per frame and each session converts that to
//! session-relative seconds through its [`SessionClock`].

use std::time::Instant;

/// Seconds since program start, from `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    started: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Session time origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    origin: f64,
}

impl SessionClock {
    /// Start a session clock at absolute time `origin`
    pub fn starting_at(origin: f64) -> Self {
        Self { origin }
    }

    /// Session-relative seconds for absolute time `now` (zero before the origin)
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.origin).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_clock_offsets_origin() {
        let clock = SessionClock::starting_at(12.5);
        assert_eq!(clock.elapsed(12.5), 0.0);
        assert_eq!(clock.elapsed(14.0), 1.5);
        assert_eq!(clock.elapsed(3.0), 0.0);
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
