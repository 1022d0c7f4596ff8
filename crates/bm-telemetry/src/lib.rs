//! `bm-telemetry`: per-session telemetry engines.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`heatmap`]    | `HeatmapGrid`: bounded N×N presence/consumption grid   |
//! | [`efficiency`] | `EfficiencyCache`: TTL-memoised usage ratio            |
//! | [`metrics`]    | `SessionMetrics`, `PlayerSample`, `Behavior`           |
//!
//! Every engine here is plain owned state mutated from the host's frame
//! callback.  None of them perform I/O; `bm-output` serialises them.

pub mod efficiency;
pub mod heatmap;
pub mod metrics;


pub use efficiency::{EfficiencyCache, EfficiencyValue, efficiency};
pub use heatmap::{
    CONSUMPTION_LOG, GridCell, HeatmapGrid, Layer, LogCap, PRESENCE_LOG, Sample,
};
pub use metrics::{Behavior, Ingested, PlayerSample, SessionMetrics};
