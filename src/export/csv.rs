use super::model::{RunExport, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write runs as CSV to `path`.
pub fn write_csv(path: &Path, runs: &[RunExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in runs {
        wtr.write_record(&[
            r.username.clone(),
            r.team.clone(),
            r.run_index.to_string(),
            format!("{:.2}", r.elapsed_seconds),
            r.saved_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
