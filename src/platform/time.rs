//! Frame timing and seed derivation

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Derive a run seed from the wall clock
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Measures wall time between frames
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
