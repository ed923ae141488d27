use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::resolve_user_path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        Authenticator::new(cfg).require_admin()?;

        let path = resolve_user_path(file);
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, *format, &path, *force)?;
    }
    Ok(())
}
