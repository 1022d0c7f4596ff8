//! Coaching configuration.
//!
//! `CoachConfig` is a plain struct with sensible defaults.  Hosts persist it
//! as flat key/value records (see [`CoachConfig::to_records`]) and feed the
//! records back on load with [`CoachConfig::from_records`].

use std::path::PathBuf;

use tracing::warn;

use crate::{Color, CoreError, CoreResult, PadKind};

/// Largest accepted heatmap resolution.
pub const MAX_GRID_SIZE: usize = 1024;
/// Largest accepted number of simultaneously shown notifications.
pub const MAX_NOTIFICATION_CAPACITY: usize = 32;

/// Which pad categories the pad overlay draws.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadFilter {
    #[default]
    All,
    Only(PadKind),
}

impl PadFilter {
    #[inline]
    pub fn admits(self, kind: PadKind) -> bool {
        match self {
            PadFilter::All => true,
            PadFilter::Only(k) => k == kind,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            PadFilter::All => "all",
            PadFilter::Only(PadKind::Major) => "major",
            PadFilter::Only(PadKind::Minor) => "minor",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "all" => Some(PadFilter::All),
            "major" | "big" => Some(PadFilter::Only(PadKind::Major)),
            "minor" | "small" => Some(PadFilter::Only(PadKind::Minor)),
            _ => None,
        }
    }
}

/// Top-level coaching configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoachConfig {
    /// Boost percentage below which the player counts as low on boost.
    pub low_boost_threshold: f32,
    /// Seconds spent below `low_boost_threshold` before a warning fires.
    pub low_boost_secs: f32,

    /// Boost level treated as "full" for hoarding detection.
    pub hoarding_level: f32,
    /// Seconds spent at `hoarding_level` before a warning fires.
    pub hoarding_secs: f32,

    /// Ball distance (uu) beyond which the player is out of position.
    pub positioning_distance: f32,
    /// Seconds spent beyond `positioning_distance` before a hint fires.
    pub positioning_secs: f32,

    /// Heatmap resolution; the grid is `grid_size × grid_size`.
    pub grid_size: usize,

    /// Maximum staleness of the cached efficiency value, in seconds.
    pub efficiency_ttl_secs: f32,
    /// Boost used since the last recomputation that forces a fresh value
    /// before the TTL runs out.
    pub efficiency_invalidate_delta: f32,

    /// Maximum simultaneously shown notifications.
    pub notification_capacity: usize,
    /// Lifetime of built-in coaching notifications, in seconds.
    pub notification_lifetime_secs: f32,

    /// Route with A* instead of uniform-cost search.
    pub use_astar: bool,
    /// Draw every pad of the active map.
    pub show_pads: bool,
    pub pad_filter: PadFilter,
    pub overlay_color: Color,
    /// Route line thickness in pixels.
    pub overlay_thickness: f32,

    /// Root directory for exports and match history.
    pub data_dir: PathBuf,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            low_boost_threshold:         20.0,
            low_boost_secs:              3.0,
            hoarding_level:              100.0,
            hoarding_secs:               5.0,
            positioning_distance:        3_000.0,
            positioning_secs:            4.0,
            grid_size:                   64,
            efficiency_ttl_secs:         1.0,
            efficiency_invalidate_delta: 10.0,
            notification_capacity:       5,
            notification_lifetime_secs:  3.0,
            use_astar:                   false,
            show_pads:                   true,
            pad_filter:                  PadFilter::All,
            overlay_color:               Color::YELLOW,
            overlay_thickness:           1.0,
            data_dir:                    PathBuf::from("data"),
        }
    }
}

impl CoachConfig {
    /// Check value ranges.  The slider ranges the host exposes are the
    /// accepted ranges here.
    pub fn validate(&self) -> CoreResult<()> {
        fn range(name: &str, v: f32, lo: f32, hi: f32) -> CoreResult<()> {
            if (lo..=hi).contains(&v) {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} = {v} is outside {lo}..={hi}")))
            }
        }

        range("low_boost_threshold", self.low_boost_threshold, 0.0, 100.0)?;
        range("low_boost_secs", self.low_boost_secs, 0.1, 30.0)?;
        range("hoarding_level", self.hoarding_level, 0.0, 100.0)?;
        range("hoarding_secs", self.hoarding_secs, 0.1, 30.0)?;
        range("positioning_secs", self.positioning_secs, 0.1, 30.0)?;
        range("overlay_thickness", self.overlay_thickness, 0.5, 3.0)?;

        if !(self.notification_lifetime_secs.is_finite() && self.notification_lifetime_secs > 0.0) {
            return Err(CoreError::Config("notification_lifetime_secs must be finite and positive".into()));
        }
        if !(self.efficiency_invalidate_delta.is_finite() && self.efficiency_invalidate_delta >= 0.0) {
            return Err(CoreError::Config(
                "efficiency_invalidate_delta must be finite and non-negative".into(),
            ));
        }
        if !(self.positioning_distance > 0.0) {
            return Err(CoreError::Config("positioning_distance must be positive".into()));
        }
        if !(self.efficiency_ttl_secs >= 0.0) {
            return Err(CoreError::Config("efficiency_ttl_secs must be non-negative".into()));
        }
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(CoreError::Config(format!(
                "grid_size = {} is outside 1..={MAX_GRID_SIZE}",
                self.grid_size
            )));
        }
        if !(1..=MAX_NOTIFICATION_CAPACITY).contains(&self.notification_capacity) {
            return Err(CoreError::Config(format!(
                "notification_capacity = {} is outside 1..={MAX_NOTIFICATION_CAPACITY}",
                self.notification_capacity
            )));
        }
        Ok(())
    }

    // ── Key/value persistence ─────────────────────────────────────────────

    /// Flatten into `(key, value)` records for the host to persist.
    pub fn to_records(&self) -> Vec<(String, String)> {
        let c = self.overlay_color;
        [
            ("low_threshold",        self.low_boost_threshold.to_string()),
            ("low_time",             self.low_boost_secs.to_string()),
            ("hoarding_level",       self.hoarding_level.to_string()),
            ("max_time",             self.hoarding_secs.to_string()),
            ("positioning_distance", self.positioning_distance.to_string()),
            ("positioning_time",     self.positioning_secs.to_string()),
            ("grid_size",            self.grid_size.to_string()),
            ("efficiency_ttl",       self.efficiency_ttl_secs.to_string()),
            ("efficiency_delta",     self.efficiency_invalidate_delta.to_string()),
            ("notification_cap",     self.notification_capacity.to_string()),
            ("notification_time",    self.notification_lifetime_secs.to_string()),
            ("path_algo",            if self.use_astar { "astar" } else { "dijkstra" }.to_string()),
            ("show_pads",            self.show_pads.to_string()),
            ("pad_filter",           self.pad_filter.as_str().to_string()),
            ("overlay_color",        format!("{},{},{},{}", c.r, c.g, c.b, c.a)),
            ("overlay_size",         self.overlay_thickness.to_string()),
            ("data_dir",             self.data_dir.display().to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Rebuild a config from persisted records on top of the defaults.
    ///
    /// Each record is applied on its own and kept only if the result still
    /// validates.  Unknown keys, malformed values and out-of-range values
    /// are logged at `warn` and skipped; the affected fields keep their
    /// previous value, so the returned config always validates.
    pub fn from_records<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (k, v) in records {
            let (key, value) = (k.as_ref(), v.as_ref());
            let mut next = cfg.clone();
            match next.apply_record(key, value).and_then(|known| next.validate().map(|()| known)) {
                Ok(true) => cfg = next,
                Ok(false) => warn!(key, "unknown setting skipped"),
                Err(e) => warn!(key, value, error = %e, "setting skipped"),
            }
        }
        cfg
    }

    /// Apply one record.  Returns `Ok(false)` for an unknown key and
    /// [`CoreError::Parse`] for a value that does not parse.
    pub fn apply_record(&mut self, key: &str, value: &str) -> CoreResult<bool> {
        fn num<T: std::str::FromStr>(key: &str, value: &str) -> CoreResult<T> {
            value
                .trim()
                .parse()
                .map_err(|_| CoreError::Parse(format!("invalid value {value:?} for {key}")))
        }

        match key {
            "low_threshold"        => self.low_boost_threshold = num(key, value)?,
            "low_time"             => self.low_boost_secs = num(key, value)?,
            "hoarding_level"       => self.hoarding_level = num(key, value)?,
            "max_time"             => self.hoarding_secs = num(key, value)?,
            "positioning_distance" => self.positioning_distance = num(key, value)?,
            "positioning_time"     => self.positioning_secs = num(key, value)?,
            "grid_size"            => self.grid_size = num(key, value)?,
            "efficiency_ttl"       => self.efficiency_ttl_secs = num(key, value)?,
            "efficiency_delta"     => self.efficiency_invalidate_delta = num(key, value)?,
            "notification_cap"     => self.notification_capacity = num(key, value)?,
            "notification_time"    => self.notification_lifetime_secs = num(key, value)?,
            "show_pads"            => self.show_pads = num(key, value)?,
            "overlay_size"         => self.overlay_thickness = num(key, value)?,
            "data_dir"             => self.data_dir = PathBuf::from(value.trim()),
            "path_algo" => {
                self.use_astar = match value.trim() {
                    "astar" | "1" => true,
                    "dijkstra" | "0" => false,
                    other => {
                        return Err(CoreError::Parse(format!("invalid path_algo {other:?}")));
                    }
                }
            }
            "pad_filter" => {
                self.pad_filter = PadFilter::parse(value)
                    .ok_or_else(|| CoreError::Parse(format!("invalid pad_filter {value:?}")))?;
            }
            "overlay_color" => {
                let parts: Vec<f32> = value
                    .split(',')
                    .map(|p| num::<f32>(key, p))
                    .collect::<CoreResult<_>>()?;
                let [r, g, b, a] = parts[..] else {
                    return Err(CoreError::Parse(format!(
                        "overlay_color needs 4 components, got {}",
                        parts.len()
                    )));
                };
                self.overlay_color = Color::rgba(r, g, b, a);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
