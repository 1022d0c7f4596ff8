//! Game-time clock.
//!
//! All time-based behaviour in the workspace (notification lifetimes, the
//! efficiency TTL, coaching timers) is measured in game seconds accumulated
//! from the host's per-frame delta, never from the wall clock.  That keeps
//! every engine deterministic under test.

use std::fmt;

/// Accumulates per-frame deltas into elapsed game seconds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// Seconds since the clock was created or last reset.
    pub elapsed_secs: f32,
    /// Number of frames advanced.
    pub frame: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `dt` seconds.  Negative deltas are ignored.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed_secs += dt;
        }
        self.frame += 1;
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Break elapsed time into (minutes, seconds).
    pub fn elapsed_ms(&self) -> (u32, u32) {
        let total = self.elapsed_secs.max(0.0) as u32;
        (total / 60, total % 60)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "frame {} ({}:{:02})", self.frame, m, s)
    }
}
