//! `bm-pads`: boost pad graph, graph cache, and routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`layout`] | Static per-map pad tables, `pads_for_map`                    |
//! | [`graph`]  | `NavGraph`, `NavGraphBuilder`, `Adjacency`, `PickupNode`     |
//! | [`cache`]  | `GraphCache`, memoised graph for the active map             |
//! | [`router`] | `Router` trait, `BestFirstRouter`, `RoutePlan`, `find_path`  |
//! | [`error`]  | `PadError`, `PadResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cache;
pub mod error;
pub mod graph;
pub mod layout;
pub mod router;

#[cfg(test)]
mod tests;

pub use cache::GraphCache;
pub use error::{PadError, PadResult};
pub use graph::{Adjacency, NavGraph, NavGraphBuilder, PickupNode};
pub use layout::{PadSpec, pads_for_map};
pub use router::{BestFirstRouter, RoutePlan, Router, Strategy, find_path};
