use crate::auth::Authenticator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        user,
        index,
        date: date_str,
        yes,
    } = cmd
    {
        Authenticator::new(cfg).require_admin()?;

        let day = match date_str {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        //
        // Confirmation prompt
        //
        if !*yes
            && !ask_confirmation(&format!(
                "Delete run #{} of {}? This action is irreversible.",
                index, user
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, cfg, user, *index, day)?;

        if removed > 0 {
            success(format!("Deleted run #{} of {}.", index, user));
        } else {
            info(format!("No run #{} found for {}. Nothing deleted.", index, user));
        }
    }
    Ok(())
}
