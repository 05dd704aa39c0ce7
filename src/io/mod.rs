use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use crate::schema::v1::MutScanV1;

pub mod bundle;
pub mod summary;
pub mod table_reader;
pub mod table_writer;

pub fn write_json(path: &Path, report: &MutScanV1) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
