//! `bm-profile`: lightweight per-name timing series.
//!
//! ```ignore
//! let mut profiler = Profiler::new();
//! {
//!     let _t = profiler.scope("route");
//!     expensive();
//! } // recorded here
//! for line in profiler.report() { println!("{line}"); }
//! ```
//!
//! Each series keeps the latest [`MAX_SAMPLES`] durations in microseconds.

pub mod profiler;
pub mod timer;

#[cfg(test)]
mod tests;

pub use profiler::{MAX_SAMPLES, Profiler, TimingStats};
pub use timer::ScopedTimer;
