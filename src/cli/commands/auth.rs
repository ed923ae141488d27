use crate::auth::{Authenticator, LoginStatus};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stopwatch::StopwatchLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use chrono::Utc;

pub fn handle_login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let auth = Authenticator::new(cfg);

        match auth.login(username.as_deref(), password.as_deref())? {
            LoginStatus::Success(user) => {
                if let Ok(pool) = DbPool::new(&cfg.database) {
                    audit(&pool.conn, "login", &user.username, "Signed in");
                }
                success(format!(
                    "Signed in as {} ({}, team {})",
                    user.username, user.name, user.team
                ));
            }
            LoginStatus::Pending => {
                warning("Please enter your username and password");
            }
            LoginStatus::Failure => {
                if let (Some(u), Ok(pool)) = (username, DbPool::new(&cfg.database)) {
                    audit(&pool.conn, "login", u, "Rejected credentials");
                }
                return Err(AppError::AuthFailure);
            }
        }
    }
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let auth = Authenticator::new(cfg);
    let who = auth.current()?.map(|s| s.username);

    if auth.logout()? {
        if let (Some(u), Ok(pool)) = (&who, DbPool::new(&cfg.database)) {
            audit(&pool.conn, "logout", u, "Signed out");
        }
        success("Logged out.");
    } else {
        info("Nobody is logged in.");
    }
    Ok(())
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    let auth = Authenticator::new(cfg);
    let session = auth.require()?;

    let (team, admin) = cfg
        .user(&session.username)
        .map(|u| (u.team.to_string(), u.admin))
        .unwrap_or_default();

    info(format!("Signed in as {}", session.username));
    println!("Name : {}", session.name);
    println!("Team : {}", team);
    if admin {
        println!("Role : admin");
    }
    println!("{}", StopwatchLogic::render(&session.timer, Utc::now()));
    Ok(())
}
