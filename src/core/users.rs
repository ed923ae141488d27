use crate::auth::password::hash_password;
use crate::config::{Config, UserRecord};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::team::Team;

pub struct UserLogic;

impl UserLogic {
    /// Add (or replace) a credentials entry and rewrite the config.
    pub fn add(
        pool: Option<&DbPool>,
        cfg: &mut Config,
        username: &str,
        password: &str,
        name: Option<&str>,
        team: Team,
        admin: bool,
    ) -> AppResult<()> {
        let username = username.trim();
        if username.is_empty() || username.contains(char::is_whitespace) {
            return Err(AppError::Validation(format!(
                "Invalid username '{}'",
                username
            )));
        }
        if password.is_empty() {
            return Err(AppError::Validation("Password must not be empty".into()));
        }

        cfg.upsert_user(
            username,
            UserRecord {
                name: name.unwrap_or(username).to_string(),
                password: hash_password(password),
                team,
                admin,
            },
        );
        cfg.save()?;

        if let Some(p) = pool {
            audit(
                &p.conn,
                "user_add",
                username,
                &format!("team {}, admin {}", team, admin),
            );
        }
        Ok(())
    }
}
