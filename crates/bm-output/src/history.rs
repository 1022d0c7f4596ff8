//! Match history files.
//!
//! `boost_history.csv` gets one `0,<total_used>,<avg_per_minute>` row per
//! saved match; only the third column is read back.  The export file is a
//! bare list of those averages, one per line, for sharing between installs.

use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::{OutputResult, ensure_parent};

pub const HISTORY_FILE: &str = "boost_history.csv";
pub const HISTORY_EXPORT_FILE: &str = "boost_history_export.csv";

/// Append one match row to the history file at `path`.
pub fn append_match(path: &Path, total_used: f32, avg_per_minute: f32) -> OutputResult<()> {
    ensure_parent(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(["0".to_string(), total_used.to_string(), avg_per_minute.to_string()])?;
    wtr.flush()?;
    info!(path = %path.display(), total_used, avg_per_minute, "match saved");
    Ok(())
}

/// Read the per-match averages from the history file at `path`.
///
/// Rows without a numeric third column are skipped.
pub fn load_history(path: &Path) -> OutputResult<Vec<f32>> {
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?;
    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record?;
        match record.get(2).and_then(|v| v.trim().parse::<f32>().ok()) {
            Some(v) => values.push(v),
            None => debug!(line = ?record.position().map(|p| p.line()), "history row skipped"),
        }
    }
    Ok(values)
}

/// Write `values` one per line to `path`, replacing its contents.
pub fn export_history(path: &Path, values: &[f32]) -> OutputResult<usize> {
    ensure_parent(path)?;
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(File::create(path)?));
    for v in values {
        wtr.write_record([v.to_string()])?;
    }
    wtr.flush()?;
    info!(path = %path.display(), count = values.len(), "history exported");
    Ok(values.len())
}

/// Result of [`import_history`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Imported {
    pub values:  Vec<f32>,
    /// Lines that did not parse as a number.
    pub skipped: usize,
}

/// Read one value per line from `path`.  Lines that are not a single
/// finite number (including lines that are not valid UTF-8) are counted and
/// skipped; blank lines are ignored.
pub fn import_history(path: &Path) -> OutputResult<Imported> {
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?;
    let mut out = Imported::default();
    for record in rdr.byte_records() {
        let record = record?;
        let field = if record.len() == 1 { record.get(0) } else { None };
        if field.is_some_and(|f| f.trim_ascii().is_empty()) {
            continue;
        }
        let value = field
            .and_then(|f| std::str::from_utf8(f).ok())
            .and_then(|v| v.trim().parse::<f32>().ok());
        match value {
            Some(v) if v.is_finite() => out.values.push(v),
            _ => {
                debug!(line = ?record.position().map(|p| p.line()), "history value skipped");
                out.skipped += 1;
            }
        }
    }
    info!(path = %path.display(), count = out.values.len(), skipped = out.skipped, "history imported");
    Ok(out)
}
