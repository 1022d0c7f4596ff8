//! RAII timer.

use std::time::Instant;

use crate::Profiler;

/// Records the time between construction and drop into a [`Profiler`].
///
/// Recording happens in `Drop`, so early returns and unwinding out of the
/// timed scope are still measured.
#[must_use = "the timer records when dropped; bind it to a variable"]
pub struct ScopedTimer<'p> {
    profiler: &'p mut Profiler,
    name:     &'p str,
    start:    Instant,
}

impl<'p> ScopedTimer<'p> {
    pub fn new(profiler: &'p mut Profiler, name: &'p str) -> Self {
        Self { profiler, name, start: Instant::now() }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        self.profiler.record_since(self.name, self.start);
    }
}
