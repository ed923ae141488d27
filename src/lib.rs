//! rStopwatch library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (timer state machine, run store, auth, config).

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init { .. } => c::init::handle(cli, cfg),
        Commands::Login { .. } => c::auth::handle_login(&cli.command, cfg),
        Commands::Logout => c::auth::handle_logout(cfg),
        Commands::Whoami => c::auth::handle_whoami(cfg),
        Commands::Start
        | Commands::Stop
        | Commands::Reset
        | Commands::Status
        | Commands::Watch { .. } => c::timer::handle(&cli.command, cfg),
        Commands::Save => c::save::handle(cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Teams { .. } => c::teams::handle(&cli.command, cfg),
        Commands::User { .. } => c::user::handle(&cli.command, cfg),
        Commands::HashPassword { .. } => c::config::handle_hash(&cli.command),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
    }
}

/// Config file in use: `--config` or the per-user default.
pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::resolve_user_path)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let config_path = resolve_config_path(&cli);
    let mut cfg = Config::load(&config_path)?;

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_user_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ dispatch
    dispatch(&cli, &mut cfg)
}
