use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::users::UserLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::team::Team;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::User {
        add,
        password,
        name,
        team,
        admin,
    } = cmd
    {
        Authenticator::new(cfg).require_admin()?;

        let team = Team::from_code(team).ok_or_else(|| AppError::InvalidTeam(team.clone()))?;
        let pool = DbPool::new(&cfg.database)?;
        UserLogic::add(Some(&pool), cfg, add, password, name.as_deref(), team, *admin)?;

        success(format!("User '{}' saved (team {}).", add, team));
    }
    Ok(())
}
