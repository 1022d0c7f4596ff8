//! TTL-memoised efficiency ratio.
//!
//! The HUD polls efficiency every frame, but the value only needs to move
//! about once a second.  [`EfficiencyCache`] recomputes at most once per TTL
//! and returns the memoised value in between, even if the inputs changed.
//! Callers that need a fresh value sooner call
//! [`invalidate`](EfficiencyCache::invalidate).

use tracing::trace;

/// Default time-to-live, in game seconds.
pub const DEFAULT_TTL_SECS: f32 = 1.0;

/// `total_used / total_time * 100`, or `0` when no time has been tracked.
#[inline]
pub fn efficiency(total_used: f32, total_time: f32) -> f32 {
    if total_time > 0.0 { total_used / total_time * 100.0 } else { 0.0 }
}

/// A memoised value and the game time it was computed at.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EfficiencyValue {
    pub value:       f32,
    pub computed_at: f32,
}

#[derive(Clone, Debug)]
pub struct EfficiencyCache {
    ttl:          f32,
    cached:       Option<EfficiencyValue>,
    computations: u64,
}

impl Default for EfficiencyCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECS)
    }
}

impl EfficiencyCache {
    pub fn new(ttl_secs: f32) -> Self {
        Self { ttl: ttl_secs, cached: None, computations: 0 }
    }

    pub fn ttl(&self) -> f32 {
        self.ttl
    }

    /// Return the efficiency at game time `now`.
    ///
    /// Recomputes when the cache is empty, when at least `ttl` seconds have
    /// passed since the last computation, or when `now` is earlier than that
    /// computation (the clock was reset).
    pub fn get(&mut self, total_used: f32, total_time: f32, now: f32) -> f32 {
        if let Some(c) = self.cached {
            let age = now - c.computed_at;
            if (0.0..self.ttl).contains(&age) {
                return c.value;
            }
        }
        let value = efficiency(total_used, total_time);
        self.cached = Some(EfficiencyValue { value, computed_at: now });
        self.computations += 1;
        trace!(value, now, "efficiency recomputed");
        value
    }

    /// Force the next [`get`](Self::get) to recompute.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The memoised value, without recomputing.
    pub fn peek(&self) -> Option<EfficiencyValue> {
        self.cached
    }

    /// Number of recomputations so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
