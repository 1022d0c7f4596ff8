//! freeplay: synthetic freeplay session for the boost_coach workspace.
//!
//! Drives one car around a lap of the standard pitch for a fixed number of
//! frames with a wandering ball, random boost use and pad pickups, then
//! prints the session report, the profiler report and the route to the ball.
//!
//! ```text
//! RUST_LOG=info cargo run -p freeplay -- [data_dir]
//! ```

use std::f32::consts::TAU;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bm_core::{CoachConfig, PadKind, Vec2, Vec3};
use bm_notify::{Notification, TriggerResult};
use bm_session::{FrameSample, PlayerState, SessionBuilder, Snapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 7;
const MAP:           &str  = "Stadium_P";
const FRAME_RATE:    f32   = 120.0;
const SESSION_SECS:  f32   = 90.0;
const LAP_SECS:      f32   = 20.0;
const LAP_RADIUS_X:  f32   = 3_000.0;
const LAP_RADIUS_Y:  f32   = 4_000.0;
/// Boost spent per second while boosting.
const BOOST_BURN:    f32   = 33.3;
const SCREEN:        Vec2  = Vec2::new(1920.0, 1080.0);

/// Car position and velocity on the elliptical lap at time `t`.
fn lap(t: f32) -> (Vec3, Vec3) {
    let w = TAU / LAP_SECS;
    let a = w * t;
    let position = Vec3::new(LAP_RADIUS_X * a.cos(), LAP_RADIUS_Y * a.sin(), 17.0);
    let velocity = Vec3::new(-LAP_RADIUS_X * w * a.sin(), LAP_RADIUS_Y * w * a.cos(), 0.0);
    (position, velocity)
}

/// Orthographic top-down camera over the pitch.
fn top_down(p: Vec3) -> Option<Vec2> {
    let x = (p.x + 4096.0) / 8192.0 * SCREEN.x;
    let y = (5120.0 - p.y) / 10240.0 * SCREEN.y;
    (0.0..=SCREEN.x).contains(&x).then_some(Vec2::new(x, y))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));
    let config = CoachConfig { data_dir, ..CoachConfig::default() };

    println!("=== freeplay: boost_coach ===");
    println!("Map: {MAP}  |  {SESSION_SECS} s at {FRAME_RATE} Hz  |  Seed: {SEED}");
    println!();

    let mut session = SessionBuilder::with_config(config).map(MAP).load_history(true).build()?;
    session.register_trigger(
        |s: &Snapshot| -> TriggerResult<bool> { Ok(s.speed >= 2_200.0 && s.boost > 50.0) },
        Notification::custom("supersonic", "Supersonic with boost to spare"),
    );

    let mut rng = SmallRng::seed_from_u64(SEED);
    let dt = 1.0 / FRAME_RATE;
    let frames = (SESSION_SECS * FRAME_RATE) as u64;

    let mut boost = 33.0_f32;
    let mut boosting = false;
    let mut ball = Vec3::new(0.0, 0.0, 93.0);
    let mut drawn = 0usize;
    let mut coached = 0usize;

    for i in 0..frames {
        let t = i as f32 * dt;
        let (position, velocity) = lap(t);

        // Toggle boosting every so often; burn while held.
        if rng.gen_bool(0.02) {
            boosting = !boosting;
        }
        if boosting {
            boost = (boost - BOOST_BURN * dt).max(0.0);
        }
        // Occasional pad pickups.
        if rng.gen_bool(0.004) {
            let kind = if rng.gen_bool(0.25) { PadKind::Major } else { PadKind::Minor };
            boost = (boost + kind.yield_amount()).min(100.0);
        }

        ball.x = (ball.x + rng.gen_range(-15.0..15.0)).clamp(-4000.0, 4000.0);
        ball.y = (ball.y + rng.gen_range(-15.0..15.0)).clamp(-5000.0, 5000.0);
        let touched = position.distance(ball) < 150.0;

        let frame = FrameSample {
            ball_touched: touched,
            ..FrameSample::new(dt, PlayerState { position, velocity, boost }).with_ball(ball)
        };
        let report = session.tick(&frame);
        coached += report.coaching.len();

        if i % (5 * FRAME_RATE as u64) == 0 {
            for line in session.execute("request-route") {
                info!("{line}");
            }
        }
        drawn += session.render(&top_down, SCREEN).len();
    }

    println!("Frames: {frames}  |  Draw commands: {drawn}  |  Coaching notifications: {coached}");
    println!();
    println!("── Session report ──");
    for line in session.execute("generate-report") {
        println!("  {line}");
    }
    println!();
    println!("── Route to ball ──");
    for line in session.execute("request-route") {
        println!("  {line}");
    }
    println!();
    println!("── Performance ──");
    for line in session.execute("show-performance-report") {
        println!("  {line}");
    }
    println!();

    let path = session.export_heatmap("freeplay")?;
    println!("Heatmap written to {}", path.display());
    session.save_match()?;
    println!("Match appended to history ({} previous matches)", session.metrics.history_log.len());

    Ok(())
}
