//! Full reload command implementation

use crate::{error::BballError, loader::load_all_data, storage::Store, Result};
use std::path::Path;

/// Reload every table from `data_dir` and print one line per file.
///
/// Fails if the store cannot be initialized or if any file was rolled back.
pub fn handle_load(store: &Store, data_dir: &Path) -> Result<()> {
    println!("Initializing database at {}...", store.location().display());

    let summary = load_all_data(store, data_dir)?;

    for report in &summary.reports {
        if report.is_loaded() {
            println!("✓ {}", report);
        } else {
            println!("⚠ {}", report);
        }
    }

    if summary.all_loaded() {
        println!("Data loading complete!");
        Ok(())
    } else {
        Err(BballError::LoadFailed {
            failed: summary.failed_count(),
            total: summary.reports.len(),
        })
    }
}
