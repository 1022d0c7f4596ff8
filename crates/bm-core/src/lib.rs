//! `bm-core`: foundational types for the `boost_coach` workspace.
//!
//! This crate is a dependency of every other `bm-*` crate.  It has no `bm-*`
//! dependencies and minimal external ones (`thiserror` and `tracing`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PadId`                                                 |
//! | [`geo`]       | `Vec3`, `Vec2`, playable-field bounds                   |
//! | [`pad`]       | `PadKind`, `Color`                                      |
//! | [`time`]      | `GameClock`                                             |
//! | [`config`]    | `CoachConfig` and its key/value record conversion       |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod pad;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CoachConfig, MAX_GRID_SIZE, MAX_NOTIFICATION_CAPACITY, PadFilter};
pub use error::{CoreError, CoreResult};
pub use geo::{FieldBounds, Vec2, Vec3};
pub use ids::PadId;
pub use pad::{Color, PadKind};
pub use time::GameClock;
