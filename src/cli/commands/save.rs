use crate::config::Config;
use crate::core::save::SaveLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::format_seconds;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match SaveLogic::apply(&mut pool, cfg) {
        Ok(run) => {
            success(format!(
                "Saved time successfully! {} s as run #{} for {} (team {})",
                format_seconds(run.elapsed_seconds),
                run.run_index,
                run.username,
                run.team
            ));
            Ok(())
        }
        // Rejected save: nothing stored, timer untouched.
        Err(AppError::Validation(msg)) => {
            warning(msg);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
