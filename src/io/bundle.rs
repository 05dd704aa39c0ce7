use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write a compressed archive of every source that exists on disk.
///
/// Sources that are missing are skipped silently: a run with summarization
/// disabled simply has no report file, and that is normal, not an error.
/// Returns the archive entry names actually included.
pub fn write_bundle(path: &Path, entries: &[(PathBuf, &str)]) -> Result<Vec<String>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut included = Vec::new();
    for (source, entry_name) in entries {
        if !source.exists() {
            continue;
        }
        let bytes = std::fs::read(source)
            .with_context(|| format!("failed to read {}", source.display()))?;
        writer.start_file(*entry_name, options)?;
        writer.write_all(&bytes)?;
        included.push((*entry_name).to_string());
    }

    writer.finish()?;
    Ok(included)
}
