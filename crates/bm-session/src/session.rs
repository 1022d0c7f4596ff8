//! The `Session` struct and its frame step.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use bm_core::{CoachConfig, GameClock, Vec2, Vec3};
use bm_notify::{Notification, NotificationScheduler, Trigger, UpdateReport};
use bm_output::{HISTORY_EXPORT_FILE, HISTORY_FILE, Imported, SETTINGS_FILE};
use bm_pads::{GraphCache, RoutePlan, Router, Strategy};
use bm_profile::Profiler;
use bm_telemetry::{Behavior, EfficiencyCache, HeatmapGrid, Ingested, Layer, PlayerSample, SessionMetrics};

use crate::render::{self, DrawCommand, Projector};
use crate::rules::CoachingRules;
use crate::{Command, FrameSample, SessionError, SessionResult};

/// Profiler series names.
pub const TICK_TIMER: &str = "tick";
pub const ROUTE_TIMER: &str = "route";
pub const RENDER_TIMER: &str = "render";

// ── Per-frame data ────────────────────────────────────────────────────────────

/// Read-only view of the session handed to notification triggers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Game seconds.
    pub now:           f32,
    pub boost:         f32,
    pub speed:         f32,
    pub efficiency:    f32,
    pub total_used:    f32,
    pub behavior:      Behavior,
    pub ball_distance: Option<f32>,
}

/// What one [`Session::tick`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub ingested:      Ingested,
    pub efficiency:    f32,
    pub behavior:      Behavior,
    /// Notifications raised by the built-in coaching rules.
    pub coaching:      Vec<Notification>,
    /// Expiries and user-trigger results.
    pub notifications: UpdateReport,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One player's coaching session.
///
/// Owns every engine and composes them once per host frame:
///
/// 1. **Metrics**: fold the frame into [`SessionMetrics`].
/// 2. **Heatmap**: presence weighted by `dt`; consumption by boost spent.
/// 3. **Efficiency**: invalidate after `efficiency_invalidate_delta` boost
///    has been spent, then read through the TTL cache.
/// 4. **Notifications**: age, run user triggers, then the coaching rules.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<R: Router> {
    pub config:        CoachConfig,
    pub clock:         GameClock,
    pub metrics:       SessionMetrics,
    pub heatmap:       HeatmapGrid,
    pub efficiency:    EfficiencyCache,
    pub notifications: NotificationScheduler<Snapshot>,
    pub profiler:      Profiler,

    pub(crate) router:     R,
    pub(crate) cache:      GraphCache,
    pub(crate) map_id:     Option<String>,
    pub(crate) route:      RoutePlan,
    pub(crate) rules:      CoachingRules,
    pub(crate) last_frame: Option<FrameSample>,
    /// Boost spent since the efficiency value was last recomputed.
    pub(crate) unaccounted_use: f32,
}

impl<R: Router> Session<R> {
    // ── Frame step ────────────────────────────────────────────────────────

    pub fn tick(&mut self, frame: &FrameSample) -> TickReport {
        let start = Instant::now();
        let report = self.step(frame);
        self.profiler.record_since(TICK_TIMER, start);
        report
    }

    fn step(&mut self, frame: &FrameSample) -> TickReport {
        let dt = frame.dt.max(0.0);
        self.clock.advance(dt);
        let now = self.clock.now();
        let player = frame.player;
        let speed = player.velocity.length();

        let sample = PlayerSample {
            position:     player.position,
            speed,
            boost:        player.boost,
            ball_touched: frame.ball_touched,
            eliminated:   frame.eliminated,
        };
        let ingested = self.metrics.ingest(&sample, dt, self.config.low_boost_threshold);

        if dt > 0.0 {
            self.heatmap.record_presence(player.position, dt, now);
        }
        if ingested.consumed > 0.0 {
            self.heatmap.record_consumption(player.position, ingested.consumed, now);
            self.unaccounted_use += ingested.consumed;
            if self.unaccounted_use >= self.config.efficiency_invalidate_delta {
                self.efficiency.invalidate();
            }
        }

        let computed = self.efficiency.computations();
        let efficiency = self.efficiency.get(self.metrics.total_used, self.metrics.total_time, now);
        if self.efficiency.computations() != computed {
            self.unaccounted_use = 0.0;
            self.metrics.log_efficiency(efficiency);
        }

        let ball_distance = frame.ball_distance();
        let snapshot = Snapshot {
            now,
            boost: player.boost,
            speed,
            efficiency,
            total_used: self.metrics.total_used,
            behavior: self.metrics.behavior,
            ball_distance,
        };
        let notifications = self.notifications.update(dt, &snapshot);

        let coaching = self.rules.evaluate(&self.config, player.boost, ball_distance, dt);
        for n in &coaching {
            self.notifications.show(n.clone());
        }

        self.last_frame = Some(*frame);
        TickReport { ingested, efficiency, behavior: self.metrics.behavior, coaching, notifications }
    }

    // ── Map and routing ───────────────────────────────────────────────────

    /// Switch to `map_id`.  The pad graph is built now so rendering can use
    /// it; the current route is dropped.
    pub fn set_map(&mut self, map_id: &str) {
        if self.map_id.as_deref() == Some(map_id) {
            return;
        }
        let pads = self.cache.graph_for(map_id).node_count();
        self.map_id = Some(map_id.to_owned());
        self.route = RoutePlan::empty();
        if pads == 0 {
            info!(map_id, "map has no boost pads; routing unavailable");
        }
    }

    pub fn map_id(&self) -> Option<&str> {
        self.map_id.as_deref()
    }

    /// Route from the pad nearest the car to the pad nearest the ball, using
    /// the most recent frame.  Empty if there is no frame, ball or map.
    pub fn request_route(&mut self) -> &RoutePlan {
        match self.last_frame {
            Some(FrameSample { ball_position: Some(ball), player, .. }) => {
                self.route_between(player.position, ball)
            }
            _ => {
                debug!("route requested without a car and ball position");
                self.route = RoutePlan::empty();
                &self.route
            }
        }
    }

    /// Route between the pads nearest `from` and `to` on the active map.
    pub fn route_between(&mut self, from: Vec3, to: Vec3) -> &RoutePlan {
        let start = Instant::now();
        self.route = self.compute_route(from, to);
        self.profiler.record_since(ROUTE_TIMER, start);
        &self.route
    }

    fn compute_route(&mut self, from: Vec3, to: Vec3) -> RoutePlan {
        let Some(map_id) = self.map_id.as_deref() else {
            debug!("no map loaded; route unavailable");
            return RoutePlan::empty();
        };
        let graph = self.cache.graph_for(map_id);
        let (Some(start), Some(goal)) = (graph.nearest(from), graph.nearest(to)) else {
            debug!(map_id, "no boost pads on this map");
            return RoutePlan::empty();
        };
        let strategy = Strategy::from_heuristic(self.config.use_astar);
        match self.router.route(graph, start, goal, strategy) {
            Ok(plan) => {
                debug!(map_id, pads = plan.len(), cost = plan.total_cost(graph), "route computed");
                plan
            }
            Err(e) => {
                debug!(error = %e, "route request yielded no path");
                RoutePlan::empty()
            }
        }
    }

    /// The most recently computed route.
    pub fn route(&self) -> &RoutePlan {
        &self.route
    }

    // ── Notifications ─────────────────────────────────────────────────────

    /// Register a user trigger evaluated every tick against a [`Snapshot`].
    pub fn register_trigger<T>(&mut self, trigger: T, template: Notification)
    where
        T: Trigger<Snapshot> + 'static,
    {
        self.notifications.register_trigger(trigger, template);
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Draw commands for this frame: pad markers (if enabled), the route
    /// overlay, then notification panels.
    pub fn render(&mut self, projector: &impl Projector, screen: Vec2) -> Vec<DrawCommand> {
        let start = Instant::now();
        let mut out = Vec::new();
        if let Some((_, graph)) = self.cache.current() {
            if self.config.show_pads {
                out.extend(render::pad_markers(graph, self.config.pad_filter, projector));
            }
            out.extend(render::route_overlay(
                graph,
                &self.route,
                projector,
                self.config.overlay_color,
                self.config.overlay_thickness,
            ));
        }
        out.extend(render::notification_panels(&self.notifications.hud_entries(), screen));
        self.profiler.record_since(RENDER_TIMER, start);
        out
    }

    /// Flip pad marker drawing; returns the new state.
    pub fn toggle_pad_display(&mut self) -> bool {
        self.config.show_pads = !self.config.show_pads;
        self.config.show_pads
    }

    // ── Session state ─────────────────────────────────────────────────────

    /// Zero the session counters and drop the route.  The heatmap and the
    /// match history are kept.
    pub fn reset(&mut self) {
        self.metrics.reset(self.clock.now());
        self.efficiency.invalidate();
        self.rules.reset();
        self.route = RoutePlan::empty();
        self.last_frame = None;
        self.unaccounted_use = 0.0;
        info!(at = self.clock.now(), "session reset");
    }

    pub fn clear_heatmap(&mut self) {
        self.heatmap.clear();
        info!("heatmap cleared");
    }

    /// Human-readable session summary.  Also logged at `info`.
    pub fn generate_report(&mut self) -> Vec<String> {
        let m = &self.metrics;
        let efficiency = self.efficiency.get(m.total_used, m.total_time, self.clock.now());
        let secs = m.total_time.max(0.0) as u32;
        let mut lines = vec![
            format!("Session time: {}:{:02}", secs / 60, secs % 60),
            format!("Total Used: {:.1}", m.total_used),
            format!("Avg Boost/Min: {:.1}", m.avg_boost_per_minute()),
            format!("Efficiency: {efficiency:.1}"),
            format!("Big Pads: {}  Small Pads: {}", m.major_pickups, m.minor_pickups),
            format!("Distance: {:.0} uu  Avg Speed: {:.0} uu/s", m.distance, m.avg_speed),
            format!("Ball Touches: {}  Eliminations: {}", m.ball_touches, m.eliminations),
            format!("Behavior: {}", m.behavior),
        ];
        for layer in [Layer::Presence, Layer::Consumption] {
            if let Some(((x, y), v)) = self.heatmap.hottest(layer) {
                lines.push(format!("{} hotspot: cell ({x}, {y}) = {v:.1}", layer.title()));
            }
        }
        for line in &lines {
            info!(target: "bm_session::report", "{line}");
        }
        lines
    }

    /// Profiler report lines.
    pub fn performance_report(&self) -> Vec<String> {
        self.profiler.report()
    }

    // ── Files ─────────────────────────────────────────────────────────────

    pub fn export_heatmap(&self, name: &str) -> SessionResult<PathBuf> {
        Ok(bm_output::export_heatmap(&self.heatmap, &self.config.data_dir, name)?)
    }

    fn history_path(&self) -> PathBuf {
        self.config.data_dir.join(HISTORY_FILE)
    }

    fn export_path(&self) -> PathBuf {
        self.config.data_dir.join(HISTORY_EXPORT_FILE)
    }

    /// Append this session's totals to the match history.
    pub fn save_match(&self) -> SessionResult<()> {
        let m = &self.metrics;
        bm_output::append_match(&self.history_path(), m.total_used, m.avg_boost_per_minute())?;
        Ok(())
    }

    /// Append the saved match history to the history log.
    pub fn load_history(&mut self) -> SessionResult<usize> {
        let values = bm_output::load_history(&self.history_path())?;
        let n = values.len();
        self.metrics.history_log.extend(values);
        info!(count = n, "history loaded");
        Ok(n)
    }

    pub fn export_history(&self) -> SessionResult<(PathBuf, usize)> {
        let path = self.export_path();
        let n = bm_output::export_history(&path, &self.metrics.history_log)?;
        Ok((path, n))
    }

    pub fn import_history(&mut self) -> SessionResult<Imported> {
        let imported = bm_output::import_history(&self.export_path())?;
        self.metrics.history_log.extend_from_slice(&imported.values);
        Ok(imported)
    }

    // ── Settings ──────────────────────────────────────────────────────────

    /// The config as key/value records for the host to persist.
    pub fn settings_records(&self) -> Vec<(String, String)> {
        self.config.to_records()
    }

    /// Write the config to `<data_dir>/settings.csv`.
    pub fn save_settings(&self) -> SessionResult<PathBuf> {
        let path = self.config.data_dir.join(SETTINGS_FILE);
        bm_output::save_settings(&path, &self.settings_records())?;
        Ok(path)
    }

    /// Apply every record saved in `<data_dir>/settings.csv`.  Records that
    /// are unknown or out of range are logged and skipped.  Returns the
    /// number applied.
    pub fn load_settings(&mut self) -> SessionResult<usize> {
        let records = bm_output::load_settings(&self.config.data_dir.join(SETTINGS_FILE))?;
        let mut applied = 0;
        for (key, value) in &records {
            match self.apply_setting(key, value) {
                Ok(()) => applied += 1,
                Err(e) => warn!(key = %key, error = %e, "setting skipped"),
            }
        }
        info!(applied, total = records.len(), "settings loaded");
        Ok(applied)
    }

    /// Change one setting.  A value that fails to parse or validate leaves
    /// the config untouched.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> SessionResult<()> {
        let mut next = self.config.clone();
        if !next.apply_record(key, value)? {
            return Err(SessionError::UnknownSetting(key.to_owned()));
        }
        next.validate()?;

        if next.grid_size != self.config.grid_size {
            self.heatmap = HeatmapGrid::new(next.grid_size);
            info!(size = next.grid_size, "heatmap resized; previous data dropped");
        }
        if next.efficiency_ttl_secs != self.config.efficiency_ttl_secs {
            self.efficiency = EfficiencyCache::new(next.efficiency_ttl_secs);
        }
        if next.notification_capacity != self.config.notification_capacity {
            self.notifications.set_capacity(next.notification_capacity);
        }
        self.config = next;
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Run `cmd` and return the lines to show the user.
    pub fn dispatch(&mut self, cmd: &Command) -> SessionResult<Vec<String>> {
        let lines = match cmd {
            Command::ResetSession => {
                self.reset();
                vec!["Stats have been reset.".to_string()]
            }
            Command::RequestRoute => {
                let plan = self.request_route();
                if plan.is_empty() {
                    vec!["No path found between car and ball.".to_string()]
                } else {
                    let ids: Vec<String> = plan.nodes.iter().map(|id| id.index().to_string()).collect();
                    vec![format!("Pad path: {}", ids.join(" -> "))]
                }
            }
            Command::TogglePadDisplay => {
                let on = self.toggle_pad_display();
                vec![format!("Pad display {}", if on { "on" } else { "off" })]
            }
            Command::ExportHeatmap(name) => {
                let path = self.export_heatmap(name)?;
                vec![format!("Heatmap exported to {}", path.display())]
            }
            Command::ClearHeatmap => {
                self.clear_heatmap();
                vec!["Heatmap cleared.".to_string()]
            }
            Command::GenerateReport => self.generate_report(),
            Command::ShowPerformanceReport => {
                let lines = self.performance_report();
                if lines.is_empty() { vec!["No timings recorded.".to_string()] } else { lines }
            }
            Command::SaveMatch => {
                self.save_match()?;
                vec!["Match stats saved.".to_string()]
            }
            Command::SaveSettings => {
                let path = self.save_settings()?;
                vec![format!("Settings saved to {}", path.display())]
            }
            Command::LoadSettings => {
                let n = self.load_settings()?;
                vec![format!("Applied {n} settings")]
            }
            Command::ExportHistory => {
                let (path, n) = self.export_history()?;
                vec![format!("Exported {n} values to {}", path.display())]
            }
            Command::ImportHistory => {
                let imported = self.import_history()?;
                vec![format!(
                    "Imported {} values ({} skipped)",
                    imported.values.len(),
                    imported.skipped
                )]
            }
            Command::Config(None) => self
                .settings_records()
                .into_iter()
                .map(|(k, v)| format!("{k} = {v}"))
                .collect(),
            Command::Config(Some((key, value))) => {
                self.apply_setting(key, value)?;
                vec![format!("Set {key} to {value}")]
            }
            Command::Help => crate::command::COMMANDS
                .iter()
                .map(|(name, desc)| format!("{name:<26}- {desc}"))
                .collect(),
        };
        Ok(lines)
    }

    /// Parse and run one console line.  Errors become a single line and a
    /// `warn` log; nothing propagates to the host.
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        match line.parse::<Command>().and_then(|cmd| self.dispatch(&cmd)) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(command = line, error = %e, "command failed");
                vec![format!("Error: {e}")]
            }
        }
    }
}
