use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::LeaderboardLogic;
use crate::db::pool::DbPool;
use crate::db::store::RunOrder;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { by_team } = cmd {
        Authenticator::new(cfg).require()?;

        let order = if *by_team {
            RunOrder::TeamThenDuration
        } else {
            RunOrder::Duration
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let runs = LeaderboardLogic::load(&mut pool, cfg, order)?;

        println!("📜 Saved Times\n");
        if runs.is_empty() {
            info("No times saved yet.");
            return Ok(());
        }

        print!("{}", LeaderboardLogic::render(&runs, order));
    }
    Ok(())
}
