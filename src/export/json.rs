use super::model::RunExport;
use crate::errors::AppResult;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json(path: &Path, runs: &[RunExport]) -> AppResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, runs)?;
    Ok(())
}
