use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::ResultsTable;

/// Persist the raw results table as CSV.
///
/// Every row is written, including rows whose mutation code failed the
/// format invariant; exclusion from binning never removes data from the
/// exported table. A headerless table produces an empty file so the export
/// bundle still has its CSV entry.
pub fn write_table(path: &Path, table: &ResultsTable) -> Result<()> {
    if table.headers.is_empty() {
        fs::write(path, "").with_context(|| format!("failed to create {}", path.display()))?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
