use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::teams::TeamsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Teams { set } = cmd {
        Authenticator::new(cfg).require_admin()?;

        if !set.is_empty() {
            let assignments = TeamsLogic::parse_assignments(set)?;
            let mut pool = DbPool::new(&cfg.database)?;
            TeamsLogic::apply(&mut pool, cfg, &assignments)?;
            success(format!("Updated {} team assignment(s).", assignments.len()));
        }

        print!("{}", TeamsLogic::render(cfg));
    }
    Ok(())
}
