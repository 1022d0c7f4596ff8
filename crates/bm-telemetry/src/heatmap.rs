//! Spatial aggregator.
//!
//! # Layout
//!
//! Cells are stored row-major: the cell for grid column `x` and row `y` is
//! `cells[y * size + x]`.  Rows run along the field's Y axis, columns along
//! X, which is also the order the CSV export writes them in.
//!
//! # Sample logs
//!
//! Besides the running totals, every record call appends a [`Sample`] to a
//! log kept for export.  The totals are authoritative; the logs are a
//! secondary record and are trimmed in batches once they pass their ceiling
//! (see [`LogCap`]), so a log never holds more than `ceiling` samples after
//! a record call returns.

use bm_core::{FieldBounds, MAX_GRID_SIZE, Vec3};

/// A recorded `(position, intensity, timestamp)` triple.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub position:  Vec3,
    pub intensity: f32,
    /// Game seconds.
    pub timestamp: f32,
}

/// Running totals for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Accumulated presence intensity (time spent in the cell).
    pub presence:    f32,
    /// Accumulated boost consumed in the cell.
    pub consumption: f32,
}

/// Which of the two totals to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    Presence,
    Consumption,
}

impl Layer {
    #[inline]
    fn of(self, cell: &GridCell) -> f32 {
        match self {
            Layer::Presence => cell.presence,
            Layer::Consumption => cell.consumption,
        }
    }

    /// Title used for this layer in exported files.
    pub fn title(self) -> &'static str {
        match self {
            Layer::Presence => "Position Heatmap",
            Layer::Consumption => "Boost Usage Heatmap",
        }
    }
}

/// Capacity policy for a sample log: once `len > ceiling`, the oldest
/// `evict` samples are dropped in one batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogCap {
    pub ceiling: usize,
    pub evict:   usize,
}

/// Presence log: 50 000 samples, trims the oldest 20 %.
pub const PRESENCE_LOG: LogCap = LogCap { ceiling: 50_000, evict: 10_000 };
/// Consumption log: 20 000 samples, trims the oldest 25 %.
pub const CONSUMPTION_LOG: LogCap = LogCap { ceiling: 20_000, evict: 5_000 };

impl LogCap {
    fn push(self, log: &mut Vec<Sample>, sample: Sample) {
        log.push(sample);
        if log.len() > self.ceiling {
            let n = self.evict.clamp(1, log.len());
            log.drain(..n);
        }
    }
}

// ── HeatmapGrid ───────────────────────────────────────────────────────────────

/// Fixed-resolution grid over the playable field.
#[derive(Clone, Debug)]
pub struct HeatmapGrid {
    size:            usize,
    bounds:          FieldBounds,
    cells:           Vec<GridCell>,
    presence_log:    Vec<Sample>,
    consumption_log: Vec<Sample>,
    presence_cap:    LogCap,
    consumption_cap: LogCap,
}

impl HeatmapGrid {
    /// A `size × size` grid over the standard field.
    ///
    /// # Panics
    /// Panics if `size` is outside `1..=MAX_GRID_SIZE`.  `CoachConfig::validate`
    /// rejects such sizes before a session builds its grid.
    pub fn new(size: usize) -> Self {
        Self::with_bounds(size, FieldBounds::STANDARD)
    }

    pub fn with_bounds(size: usize, bounds: FieldBounds) -> Self {
        assert!(
            (1..=MAX_GRID_SIZE).contains(&size),
            "HeatmapGrid size must be in 1..={MAX_GRID_SIZE}, got {size}"
        );
        Self {
            size,
            bounds,
            cells:           vec![GridCell::default(); size * size],
            presence_log:    Vec::new(),
            consumption_log: Vec::new(),
            presence_cap:    PRESENCE_LOG,
            consumption_cap: CONSUMPTION_LOG,
        }
    }

    /// Override the log capacity policies.
    pub fn with_log_caps(mut self, presence: LogCap, consumption: LogCap) -> Self {
        self.presence_cap = presence;
        self.consumption_cap = consumption;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    // ── Recording ─────────────────────────────────────────────────────────

    /// Add `intensity` to the presence total of the cell containing `pos`.
    ///
    /// The sample is always logged; out-of-bounds positions contribute to no
    /// cell.  Returns `true` if a cell was updated.
    pub fn record_presence(&mut self, pos: Vec3, intensity: f32, timestamp: f32) -> bool {
        self.presence_cap.push(
            &mut self.presence_log,
            Sample { position: pos, intensity, timestamp },
        );
        self.accumulate(pos, |c| c.presence += intensity)
    }

    /// Add `amount` to the consumption total of the cell containing `pos`.
    pub fn record_consumption(&mut self, pos: Vec3, amount: f32, timestamp: f32) -> bool {
        self.consumption_cap.push(
            &mut self.consumption_log,
            Sample { position: pos, intensity: amount, timestamp },
        );
        self.accumulate(pos, |c| c.consumption += amount)
    }

    fn accumulate(&mut self, pos: Vec3, f: impl FnOnce(&mut GridCell)) -> bool {
        match self.bounds.cell_of(pos, self.size) {
            Some((x, y)) => {
                f(&mut self.cells[y * self.size + x]);
                true
            }
            None => false,
        }
    }

    /// Zero both grids and truncate both logs.
    pub fn clear(&mut self) {
        self.cells.fill(GridCell::default());
        self.presence_log.clear();
        self.consumption_log.clear();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Cell at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<GridCell> {
        (x < self.size && y < self.size).then(|| self.cells[y * self.size + x])
    }

    /// Cell containing world position `pos`.
    pub fn cell_at(&self, pos: Vec3) -> Option<GridCell> {
        self.bounds.cell_of(pos, self.size).and_then(|(x, y)| self.cell(x, y))
    }

    /// Values of one grid row, columns in ascending X order.
    pub fn row(&self, layer: Layer, y: usize) -> impl Iterator<Item = f32> + '_ {
        let start = (y.min(self.size)) * self.size;
        let end = if y < self.size { start + self.size } else { start };
        self.cells[start..end].iter().map(move |c| layer.of(c))
    }

    /// Sum over every cell of one layer.
    pub fn total(&self, layer: Layer) -> f32 {
        self.cells.iter().map(|c| layer.of(c)).sum()
    }

    /// `((x, y), value)` of the largest cell, or `None` if the layer is all
    /// zero.  Lowest row-major index wins ties.
    pub fn hottest(&self, layer: Layer) -> Option<((usize, usize), f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, c) in self.cells.iter().enumerate() {
            let v = layer.of(c);
            if v > 0.0 && best.is_none_or(|(_, bv)| v > bv) {
                best = Some((i, v));
            }
        }
        best.map(|(i, v)| ((i % self.size, i / self.size), v))
    }

    pub fn presence_log(&self) -> &[Sample] {
        &self.presence_log
    }

    pub fn consumption_log(&self) -> &[Sample] {
        &self.consumption_log
    }
}
