//! Timer commands applied to the logged-in user's session.
//!
//! Each call is one interaction cycle: load the session, apply one action,
//! write the session back, and return the state for rendering.

use crate::auth::Authenticator;
use crate::auth::session::Session;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::timer::TimerState;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::{format_seconds, secs2readable};
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Re-render interval of `watch`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Start,
    Stop,
    Reset,
    /// Refresh only.
    Tick,
}

pub struct StopwatchLogic;

impl StopwatchLogic {
    /// Apply `action` to the session timer at `now`.
    pub fn apply_to(session: &mut Session, action: TimerAction, now: DateTime<Utc>) {
        let timer = &mut session.timer;
        match action {
            TimerAction::Start => timer.start(now),
            TimerAction::Stop => timer.stop(now),
            TimerAction::Reset => timer.reset(),
            TimerAction::Tick => timer.tick(now),
        }
    }

    /// Load the session, apply `action`, persist. Returns the new state.
    pub fn apply(cfg: &Config, action: TimerAction) -> AppResult<Session> {
        let auth = Authenticator::new(cfg);
        let mut session = auth.require()?;
        Self::apply_to(&mut session, action, Utc::now());
        auth.save_session(&session)?;
        Ok(session)
    }

    /// Poll-and-render loop while the timer runs.
    ///
    /// Every frame re-reads the session, so a `stop` or `logout` issued from
    /// another shell ends the loop. `max_seconds` bounds the loop.
    pub fn watch(cfg: &Config, max_seconds: Option<f64>) -> AppResult<TimerState> {
        let auth = Authenticator::new(cfg);
        let began = Instant::now();
        let mut last = auth.require()?.timer;

        loop {
            let Some(session) = auth.current()? else {
                break;
            };
            last = session.timer;

            let shown = last.display(Utc::now());
            print!("\r⏱️  {}  ({} s)   ", secs2readable(shown), format_seconds(shown));
            io::stdout().flush().map_err(AppError::from)?;

            if !last.is_running() {
                break;
            }
            if let Some(max) = max_seconds
                && began.elapsed().as_secs_f64() >= max
            {
                break;
            }

            thread::sleep(TICK_INTERVAL);
        }

        println!();
        Ok(last)
    }

    /// One-line state rendering: `Elapsed Time (s): 5.00 [running]`.
    pub fn render(timer: &TimerState, now: DateTime<Utc>) -> String {
        let shown = timer.display(now);
        let state = if timer.is_running() {
            format!("{GREEN}running{RESET}")
        } else {
            format!("{GREY}stopped{RESET}")
        };
        format!(
            "Elapsed Time (s): {}  [{}]  {}",
            format_seconds(shown),
            state,
            secs2readable(shown)
        )
    }
}
