//! Fluent builder for constructing a [`Session`].

use tracing::{info, warn};

use bm_core::{CoachConfig, GameClock};
use bm_notify::NotificationScheduler;
use bm_pads::{Adjacency, BestFirstRouter, GraphCache, RoutePlan, Router};
use bm_profile::Profiler;
use bm_telemetry::{EfficiencyCache, HeatmapGrid, SessionMetrics};

use crate::rules::CoachingRules;
use crate::{Session, SessionResult};

/// Fluent builder for [`Session<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                        |
/// |----------------------|--------------------------------|
/// | `.adjacency(a)`      | `Adjacency::Complete`          |
/// | `.map(id)`           | No map; routing unavailable    |
/// | `.load_history(b)`   | `false`                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(CoachConfig::default(), BestFirstRouter)
///     .map("Stadium_P")
///     .load_history(true)
///     .build()?;
/// session.tick(&frame);
/// ```
pub struct SessionBuilder<R: Router> {
    config:       CoachConfig,
    router:       R,
    adjacency:    Adjacency,
    map_id:       Option<String>,
    load_history: bool,
}

impl SessionBuilder<BestFirstRouter> {
    /// Builder using the default best-first router.
    pub fn with_config(config: CoachConfig) -> Self {
        Self::new(config, BestFirstRouter)
    }
}

impl<R: Router> SessionBuilder<R> {
    pub fn new(config: CoachConfig, router: R) -> Self {
        Self {
            config,
            router,
            adjacency:    Adjacency::default(),
            map_id:       None,
            load_history: false,
        }
    }

    /// Adjacency policy for pad graphs.
    pub fn adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Start on `map_id`.
    pub fn map(mut self, map_id: impl Into<String>) -> Self {
        self.map_id = Some(map_id.into());
        self
    }

    /// Read `<data_dir>/boost_history.csv` into the history log on build.
    /// A missing or unreadable file is logged and leaves the log empty.
    pub fn load_history(mut self, load: bool) -> Self {
        self.load_history = load;
        self
    }

    /// Validate the config and return a ready [`Session`].
    pub fn build(self) -> SessionResult<Session<R>> {
        self.config.validate()?;
        let config = self.config;

        let mut session = Session {
            clock:           GameClock::new(),
            metrics:         SessionMetrics::new(0.0),
            heatmap:         HeatmapGrid::new(config.grid_size),
            efficiency:      EfficiencyCache::new(config.efficiency_ttl_secs),
            notifications:   NotificationScheduler::new(config.notification_capacity),
            profiler:        Profiler::new(),
            router:          self.router,
            cache:           GraphCache::with_adjacency(self.adjacency),
            map_id:          None,
            route:           RoutePlan::empty(),
            rules:           CoachingRules::new(),
            last_frame:      None,
            unaccounted_use: 0.0,
            config,
        };

        if let Some(map_id) = self.map_id {
            session.set_map(&map_id);
        }
        if self.load_history {
            if let Err(e) = session.load_history() {
                warn!(error = %e, "match history not loaded");
            }
        }
        info!(
            map = session.map_id().unwrap_or("<none>"),
            grid = session.config.grid_size,
            "session ready"
        );
        Ok(session)
    }
}
