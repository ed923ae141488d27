use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::{RunOrder, RunStore};
use crate::errors::AppResult;
use crate::models::run::Run;
use crate::utils::colors::{RESET, color_for_rank, color_for_team};
use crate::utils::formatting::{format_seconds, secs2readable};
use crate::utils::table::{Column, Table};

pub struct LeaderboardLogic;

impl LeaderboardLogic {
    pub fn load(pool: &mut DbPool, cfg: &Config, order: RunOrder) -> AppResult<Vec<Run>> {
        RunStore::new(&pool.conn, cfg.sequence_scope).list_runs(order)
    }

    /// Ranked table. With team ordering the rank restarts for every team.
    pub fn render(runs: &[Run], order: RunOrder) -> String {
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("username", 16),
            Column::new("team", 6),
            Column::new("run", 5),
            Column::new("seconds", 10),
            Column::new("time", 12),
            Column::new("saved_at (UTC)", 20),
        ]);

        let mut rank = 0;
        let mut current_team = None;

        for run in runs {
            if order == RunOrder::TeamThenDuration && current_team != Some(run.team) {
                current_team = Some(run.team);
                rank = 0;
            }
            rank += 1;

            let rank_color = color_for_rank(rank);
            table.add_row(vec![
                format!("{rank_color}{rank}{RESET}"),
                run.username.clone(),
                format!("{}{}{RESET}", color_for_team(run.team), run.team),
                run.run_index.to_string(),
                format_seconds(run.elapsed_seconds),
                secs2readable(run.elapsed_seconds),
                run.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]);
        }

        table.render()
    }
}
