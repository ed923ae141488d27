use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        println!("📄 Current configuration ({}):\n", cfg.path.display());
        println!("{}", ConfigLogic::render_masked(cfg)?);
    }
    Ok(())
}

/// Handle the `hash-password` subcommand
pub fn handle_hash(cmd: &Commands) -> AppResult<()> {
    if let Commands::HashPassword { password } = cmd {
        println!("{}", crate::auth::password::hash_password(password));
    }
    Ok(())
}
