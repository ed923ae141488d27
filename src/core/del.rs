use crate::config::{Config, SequenceScope};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store::RunStore;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a run by `(username, run_index)`.
    ///
    /// With the daily scope `day` picks the window (default: today, UTC).
    /// Returns the number of removed rows; 0 is not an error.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        username: &str,
        run_index: i64,
        day: Option<NaiveDate>,
    ) -> AppResult<usize> {
        let store = RunStore::new(&pool.conn, cfg.sequence_scope);

        let removed = match day {
            Some(d) => store.delete_run_on(username, run_index, d)?,
            None => store.delete_run(username, run_index)?,
        };

        let target = match (cfg.sequence_scope, day) {
            (SequenceScope::Daily, Some(d)) => format!("{username}#{run_index}@{d}"),
            _ => format!("{username}#{run_index}"),
        };
        audit(
            &pool.conn,
            "del",
            &target,
            &format!("Removed {} row(s)", removed),
        );

        Ok(removed)
    }
}
