//! Routing error type.

use thiserror::Error;

use bm_core::PadId;

/// Errors produced by `bm-pads`.
///
/// None of these are fatal to a session: [`find_path`](crate::find_path)
/// maps every variant to an empty [`RoutePlan`](crate::RoutePlan).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PadError {
    #[error("graph has no nodes; routing unavailable on this map")]
    EmptyGraph,

    #[error("node {0} not found in graph")]
    NodeNotFound(PadId),

    #[error("no route from {from} to {to}")]
    NoRoute { from: PadId, to: PadId },
}

pub type PadResult<T> = Result<T, PadError>;
