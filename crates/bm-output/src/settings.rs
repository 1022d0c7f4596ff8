//! Settings persistence as `key,value` rows.
//!
//! The records come from [`CoachConfig::to_records`]; unknown keys and bad
//! values are the config's concern, not this module's.
//!
//! [`CoachConfig::to_records`]: bm_core::CoachConfig::to_records

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::{OutputResult, ensure_parent};

pub const SETTINGS_FILE: &str = "settings.csv";

pub fn save_settings(path: &Path, records: &[(String, String)]) -> OutputResult<()> {
    ensure_parent(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    for (k, v) in records {
        wtr.write_record([k, v])?;
    }
    wtr.flush()?;
    debug!(path = %path.display(), count = records.len(), "settings saved");
    Ok(())
}

/// Read `key,value` rows.  Rows with fewer than two fields are dropped.
pub fn load_settings(path: &Path) -> OutputResult<Vec<(String, String)>> {
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let (Some(k), Some(v)) = (record.get(0), record.get(1)) {
            out.push((k.trim().to_owned(), v.trim().to_owned()));
        }
    }
    Ok(out)
}
