use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stopwatch::{StopwatchLogic, TimerAction};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use chrono::Utc;

/// start / stop / reset / status: one action per invocation, then render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let action = match cmd {
        Commands::Start => TimerAction::Start,
        Commands::Stop => TimerAction::Stop,
        Commands::Reset => TimerAction::Reset,
        Commands::Status => TimerAction::Tick,
        Commands::Watch { seconds } => {
            let last = StopwatchLogic::watch(cfg, *seconds)?;
            if !last.is_running() {
                info("Stopwatch is not running.");
            }
            return Ok(());
        }
        _ => return Ok(()),
    };

    let session = StopwatchLogic::apply(cfg, action)?;

    header(format!("⏱️  Stopwatch: {}", session.name));
    println!("{}", StopwatchLogic::render(&session.timer, Utc::now()));
    Ok(())
}
