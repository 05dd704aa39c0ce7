use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Concatenated residue letters of every non-header line in a FASTA file.
pub fn read_sequence(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sequence: String = text
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect();
    Ok(sequence)
}
