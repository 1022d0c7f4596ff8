//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `#[from]` where they need it.

use thiserror::Error;

/// The base error type for `bm-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `bm-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
