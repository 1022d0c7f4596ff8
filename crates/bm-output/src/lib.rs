//! `bm-output`: file formats for everything a session persists.
//!
//! | Module       | Files                                                       |
//! |--------------|-------------------------------------------------------------|
//! | [`heatmap`]  | `<data>/heatmaps/<name>.csv`                                |
//! | [`history`]  | `<data>/boost_history.csv`, `<data>/boost_history_export.csv` |
//! | [`settings`] | `<data>/settings.csv` (key/value records)                   |
//!
//! Every file is plain CSV without a header row.  Writers create missing
//! parent directories.  Nothing here is called per frame; the session maps
//! failures to a logged no-op.

pub mod error;
pub mod heatmap;
pub mod history;
pub mod settings;


pub use error::{OutputError, OutputResult};
pub use heatmap::{HEATMAP_DIR, export_heatmap, heatmap_path, write_heatmap};
pub use history::{
    HISTORY_EXPORT_FILE, HISTORY_FILE, Imported, append_match, export_history, import_history,
    load_history,
};
pub use settings::{SETTINGS_FILE, load_settings, save_settings};

use std::path::Path;

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
