//! Heatmap CSV export.
//!
//! # Format
//!
//! ```text
//! Position Heatmap
//! <N rows of N comma-separated presence totals>
//!
//! Boost Usage Heatmap
//! <N rows of N comma-separated consumption totals>
//! ```
//!
//! Row `y` holds grid row `y` (field Y axis), columns in ascending X.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use bm_telemetry::{HeatmapGrid, Layer};

use crate::{OutputError, OutputResult, ensure_parent};

/// Sub-directory of the data directory that holds heatmap exports.
pub const HEATMAP_DIR: &str = "heatmaps";

/// `<data_dir>/heatmaps/<name>.csv`, or an error if `name` is empty or
/// would escape the heatmap directory.
pub fn heatmap_path(data_dir: &Path, name: &str) -> OutputResult<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(OutputError::InvalidName(name.to_owned()));
    }
    Ok(data_dir.join(HEATMAP_DIR).join(format!("{name}.csv")))
}

/// Write both layers of `grid` to `out`.
pub fn write_heatmap<W: Write>(grid: &HeatmapGrid, mut out: W) -> OutputResult<()> {
    write_layer(grid, Layer::Presence, &mut out)?;
    out.write_all(b"\n")?;
    write_layer(grid, Layer::Consumption, &mut out)?;
    out.flush()?;
    Ok(())
}

fn write_layer<W: Write>(grid: &HeatmapGrid, layer: Layer, out: &mut W) -> OutputResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).flexible(true).from_writer(out);
    wtr.write_record([layer.title()])?;
    for y in 0..grid.size() {
        wtr.write_record(grid.row(layer, y).map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export `grid` to `<data_dir>/heatmaps/<name>.csv`, overwriting any
/// existing file.  Returns the path written.
pub fn export_heatmap(grid: &HeatmapGrid, data_dir: &Path, name: &str) -> OutputResult<PathBuf> {
    let path = heatmap_path(data_dir, name)?;
    ensure_parent(&path)?;
    write_heatmap(grid, BufWriter::new(File::create(&path)?))?;
    info!(path = %path.display(), size = grid.size(), "heatmap exported");
    Ok(path)
}
