use std::path::Path;

use anyhow::{Context, Result};

use crate::table::ResultsTable;

/// Read a scorer output CSV into a results table.
///
/// Rows are kept as raw strings; nothing is dropped or coerced here. Ragged
/// rows are tolerated so that a sloppy scoring back-end still produces a
/// table the validator can judge.
pub fn read_table(path: &Path) -> Result<ResultsTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .context("failed to read CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(ResultsTable { headers, rows })
}
