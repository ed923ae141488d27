use crate::auth::Authenticator;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store::RunStore;
use crate::errors::{AppError, AppResult};
use crate::models::run::Run;
use chrono::Utc;

pub const EMPTY_TIMER_WARNING: &str = "You need to start the stopwatch first.";

pub struct SaveLogic;

impl SaveLogic {
    /// Reject zero / negative durations before they reach the store.
    pub fn validate(elapsed_seconds: f64) -> AppResult<()> {
        if elapsed_seconds > 0.0 && elapsed_seconds.is_finite() {
            Ok(())
        } else {
            Err(AppError::Validation(EMPTY_TIMER_WARNING.to_string()))
        }
    }

    /// Save the session user's displayed elapsed time as a new run.
    ///
    /// The timer itself is left untouched, whatever the outcome.
    pub fn apply(pool: &mut DbPool, cfg: &Config) -> AppResult<Run> {
        let auth = Authenticator::new(cfg);
        let session = auth.require()?;

        let now = Utc::now();
        let elapsed = session.timer.display(now);
        Self::validate(elapsed)?;

        let user = cfg
            .user(&session.username)
            .ok_or_else(|| AppError::UnknownUser(session.username.clone()))?;

        let store = RunStore::new(&pool.conn, cfg.sequence_scope);
        let run = store.save_run_at(&session.username, user.team, elapsed, now)?;

        audit(
            &pool.conn,
            "save",
            &format!("{}#{}", run.username, run.run_index),
            &format!(
                "Saved {:.2}s for {} (team {})",
                run.elapsed_seconds, run.username, run.team
            ),
        );

        Ok(run)
    }
}
