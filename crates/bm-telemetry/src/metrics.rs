//! Per-session counters and derived statistics.

use bm_core::{PadKind, Vec3};

/// Boost gains larger than this count as a major-pad pickup.
const MINOR_PAD_GAIN: f32 = 12.0;

/// Speeds (uu/s) used for behaviour labelling.
const IDLE_SPEED: f32 = 100.0;
const SUPERSONIC_SPEED: f32 = 2_200.0;

/// Efficiency log ceiling and batch size, same policy as the heatmap logs.
const EFFICIENCY_LOG_CEILING: usize = 10_000;
const EFFICIENCY_LOG_EVICT: usize = 2_000;

/// What the player was doing on the most recent frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    #[default]
    Idle,
    Cruising,
    Supersonic,
    /// Moving with boost below the low threshold.
    BoostStarved,
}

impl Behavior {
    pub fn classify(speed: f32, boost: f32, low_threshold: f32) -> Self {
        if speed < IDLE_SPEED {
            Behavior::Idle
        } else if speed >= SUPERSONIC_SPEED {
            Behavior::Supersonic
        } else if boost < low_threshold {
            Behavior::BoostStarved
        } else {
            Behavior::Cruising
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Idle => "idle",
            Behavior::Cruising => "cruising",
            Behavior::Supersonic => "supersonic",
            Behavior::BoostStarved => "boost-starved",
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of player kinematics as seen by the metrics engine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerSample {
    pub position:     Vec3,
    /// Speed in uu/s.
    pub speed:        f32,
    /// Boost level, 0–100.
    pub boost:        f32,
    pub ball_touched: bool,
    pub eliminated:   bool,
}

/// What [`SessionMetrics::ingest`] derived from one sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ingested {
    /// Boost consumed since the previous sample.
    pub consumed: f32,
    /// Pad category picked up since the previous sample, if boost rose.
    pub pickup:   Option<PadKind>,
}

/// Counters for the current session.  Reset only by [`reset`](Self::reset).
#[derive(Clone, Debug, Default)]
pub struct SessionMetrics {
    /// Game time the session started at.
    pub session_start: f32,
    /// Distance driven, uu.
    pub distance:      f32,
    /// Running mean of sampled speeds, uu/s.
    pub avg_speed:     f32,
    pub ball_touches:  u32,
    pub eliminations:  u32,
    pub major_pickups: u32,
    pub minor_pickups: u32,
    /// Boost consumed this session.
    pub total_used:    f32,
    /// Seconds of play tracked this session.
    pub total_time:    f32,
    pub behavior:      Behavior,
    /// Efficiency values recorded this session.
    pub efficiency_log: Vec<f32>,
    /// Per-match averages carried across sessions.
    pub history_log:    Vec<f32>,

    samples:       u64,
    last_position: Option<Vec3>,
    last_boost:    Option<f32>,
}

impl SessionMetrics {
    pub fn new(now: f32) -> Self {
        Self { session_start: now, ..Self::default() }
    }

    /// Fold one frame into the counters.
    pub fn ingest(&mut self, sample: &PlayerSample, dt: f32, low_threshold: f32) -> Ingested {
        let mut out = Ingested::default();

        if let Some(last) = self.last_position {
            self.distance += last.distance(sample.position);
        }
        self.last_position = Some(sample.position);

        self.samples += 1;
        self.avg_speed += (sample.speed - self.avg_speed) / self.samples as f32;

        if let Some(last) = self.last_boost {
            let delta = sample.boost - last;
            if delta < 0.0 {
                out.consumed = -delta;
                self.total_used += out.consumed;
            } else if delta > 0.0 {
                let kind = if delta > MINOR_PAD_GAIN { PadKind::Major } else { PadKind::Minor };
                match kind {
                    PadKind::Major => self.major_pickups += 1,
                    PadKind::Minor => self.minor_pickups += 1,
                }
                out.pickup = Some(kind);
            }
        }
        self.last_boost = Some(sample.boost);

        if dt > 0.0 {
            self.total_time += dt;
        }
        self.ball_touches += sample.ball_touched as u32;
        self.eliminations += sample.eliminated as u32;
        self.behavior = Behavior::classify(sample.speed, sample.boost, low_threshold);

        out
    }

    /// Average boost consumed per minute of tracked play.
    pub fn avg_boost_per_minute(&self) -> f32 {
        if self.total_time > 0.0 { self.total_used * 60.0 / self.total_time } else { 0.0 }
    }

    /// Append to the efficiency log, trimming the oldest batch past the
    /// ceiling.
    pub fn log_efficiency(&mut self, value: f32) {
        self.efficiency_log.push(value);
        if self.efficiency_log.len() > EFFICIENCY_LOG_CEILING {
            self.efficiency_log.drain(..EFFICIENCY_LOG_EVICT);
        }
    }

    /// Start a new session at `now`.  The cross-session history survives.
    pub fn reset(&mut self, now: f32) {
        let history = std::mem::take(&mut self.history_log);
        *self = Self { history_log: history, ..Self::new(now) };
    }
}
