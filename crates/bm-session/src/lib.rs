//! `bm-session`: per-frame orchestrator for the boost_coach workspace.
//!
//! # Frame loop
//!
//! ```text
//! host frame:
//!   session.tick(&FrameSample)     metrics, heatmap, efficiency, notifications
//!   session.render(&projector, sz) → Vec<DrawCommand> for the host to draw
//! host console:
//!   session.execute("request-route") → output lines
//! ```
//!
//! The engines in `bm-pads`, `bm-telemetry`, `bm-notify` and `bm-profile`
//! never call each other; this crate is the only place they meet.  Files are
//! read and written only on explicit commands, through `bm-output`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bm_core::CoachConfig;
//! use bm_session::{FrameSample, PlayerState, SessionBuilder};
//!
//! let mut session = SessionBuilder::with_config(CoachConfig::default())
//!     .map("Stadium_P")
//!     .build()?;
//! session.tick(&FrameSample::new(1.0 / 120.0, PlayerState::default()));
//! for line in session.execute("generate-report") {
//!     println!("{line}");
//! }
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod frame;
pub mod render;
pub mod rules;
pub mod session;


pub use builder::SessionBuilder;
pub use command::{COMMANDS, Command};
pub use error::{SessionError, SessionResult};
pub use frame::{FrameSample, PlayerState};
pub use render::{DrawCommand, Projector};
pub use rules::{CoachingRules, Episode};
pub use session::{ROUTE_TIMER, RENDER_TIMER, Session, Snapshot, TICK_TIMER, TickReport};
