use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store::{RunOrder, RunStore};
use crate::errors::AppResult;
use crate::export::{
    ExportFormat, RunExport, ensure_writable, notify_export_success, write_csv, write_json,
};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every run, in leaderboard order, to `path`.
    ///
    /// Returns the number of exported rows (0 means nothing was written).
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let runs = RunStore::new(&pool.conn, cfg.sequence_scope).list_runs(RunOrder::Duration)?;

        if runs.is_empty() {
            warning("No times saved yet. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<RunExport> = runs.iter().map(RunExport::from).collect();
        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        audit(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} runs to {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
