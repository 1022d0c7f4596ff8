use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use tracing::info;

use crate::ScopedTimer;

/// Samples retained per series; older samples are dropped first.
pub const MAX_SAMPLES: usize = 1000;

/// Summary of one series, in microseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimingStats {
    pub samples: usize,
    pub min:     u64,
    /// Integer mean.
    pub avg:     u64,
    pub max:     u64,
}

#[derive(Clone, Debug, Default)]
pub struct Profiler {
    series: BTreeMap<String, VecDeque<u64>>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one duration to the `name` series.
    pub fn record(&mut self, name: &str, micros: u64) {
        let series = self
            .series
            .entry(name.to_owned())
            .or_insert_with(|| VecDeque::with_capacity(MAX_SAMPLES));
        if series.len() == MAX_SAMPLES {
            series.pop_front();
        }
        series.push_back(micros);
    }

    /// Record the wall-clock time since `start` under `name`.
    pub fn record_since(&mut self, name: &str, start: Instant) {
        let micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.record(name, micros);
    }

    /// Timer guard that records into `name` when dropped.
    pub fn scope<'p>(&'p mut self, name: &'p str) -> ScopedTimer<'p> {
        ScopedTimer::new(self, name)
    }

    /// Run `f`, recording its wall-clock duration under `name`.
    pub fn time<R>(&mut self, name: &str, f: impl FnOnce() -> R) -> R {
        let _timer = self.scope(name);
        f()
    }

    pub fn stats(&self, name: &str) -> Option<TimingStats> {
        self.series.get(name).and_then(summarise)
    }

    /// Series names with at least one sample, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().filter(|(_, s)| !s.is_empty()).map(|(n, _)| n.as_str())
    }

    /// One line per non-empty series, sorted by name:
    /// `"<name> - Avg: <avg>us, Min: <min>us, Max: <max>us"`.
    ///
    /// Each line is also logged at `info`.
    pub fn report(&self) -> Vec<String> {
        let lines: Vec<String> = self
            .series
            .iter()
            .filter_map(|(name, s)| {
                summarise(s).map(|t| {
                    format!("{name} - Avg: {}us, Min: {}us, Max: {}us", t.avg, t.min, t.max)
                })
            })
            .collect();
        for line in &lines {
            info!(target: "bm_profile", "{line}");
        }
        lines
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}

fn summarise(series: &VecDeque<u64>) -> Option<TimingStats> {
    let min = *series.iter().min()?;
    let max = *series.iter().max()?;
    let sum: u128 = series.iter().map(|&v| v as u128).sum();
    let avg = (sum / series.len() as u128) as u64;
    Some(TimingStats { samples: series.len(), min, avg, max })
}
