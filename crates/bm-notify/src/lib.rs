//! `bm-notify`: on-screen notification queue.
//!
//! # Crate layout
//!
//! | Module             | Contents                                              |
//! |--------------------|-------------------------------------------------------|
//! | [`notification`]   | `Notification`, `NotificationKind`, `HudEntry`        |
//! | [`trigger`]        | `Trigger<C>` trait, closure impl                      |
//! | [`scheduler`]      | `NotificationScheduler<C>`, `UpdateReport`            |
//! | [`error`]          | `TriggerError`, `TriggerResult<T>`                    |
//!
//! # Frame model (summary)
//!
//! ```text
//! update(dt, ctx):
//!   every active notification: elapsed += dt
//!   drop those with elapsed >= lifetime
//!   every registered trigger:  Ok(true) → show(template.clone())
//! ```
//!
//! At most `capacity` notifications are active; showing one more evicts the
//! oldest.  The scheduler never draws anything itself: the host reads
//! [`hud_entries`](NotificationScheduler::hud_entries) and renders them.

pub mod error;
pub mod notification;
pub mod scheduler;
pub mod trigger;


pub use error::{TriggerError, TriggerResult};
pub use notification::{DEFAULT_LIFETIME_SECS, HudEntry, Notification, NotificationKind};
pub use scheduler::{DEFAULT_CAPACITY, NotificationScheduler, UpdateReport};
pub use trigger::Trigger;
