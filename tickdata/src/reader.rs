use std::path::Path;

use csv::Trim;
use log::warn;

use crate::error::TickError;
use crate::tick::Tick;

/// Collects deserialized rows, skipping malformed ones.
///
/// A row with the wrong field count, an unparseable timestamp or bad numerics
/// is logged and dropped rather than aborting the run; large load-test files
/// routinely carry a few damaged lines.
pub fn collect_ticks(rows: impl IntoIterator<Item = Result<Tick, csv::Error>>) -> Vec<Tick> {
    rows.into_iter()
        .filter_map(|row| {
            row.map_err(|e| warn!("Skipping malformed tick row: {e}"))
                .ok()
        })
        .collect()
}

/// Reads a tick CSV file, tolerating malformed rows per [`collect_ticks`].
///
/// # Errors
/// Errors when the file itself cannot be opened; row-level damage is not an
/// error
pub fn read_ticks_file<P: AsRef<Path>>(path: P) -> Result<Vec<Tick>, TickError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;
    Ok(collect_ticks(reader.deserialize()))
}
