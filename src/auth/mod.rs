//! Credential check against the config's credentials map, plus the signed
//! session file that keeps a user logged in between invocations.

pub mod password;
pub mod session;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::team::Team;
use chrono::Utc;
use session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub username: String,
    pub name: String,
    pub team: Team,
    pub admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginStatus {
    Success(AuthUser),
    Failure,
    /// No credentials submitted and no valid session.
    Pending,
}

pub struct Authenticator<'a> {
    cfg: &'a Config,
}

impl<'a> Authenticator<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    fn auth_user(&self, username: &str) -> Option<AuthUser> {
        self.cfg.user(username).map(|u| AuthUser {
            username: username.to_string(),
            name: u.name.clone(),
            team: u.team,
            admin: u.admin,
        })
    }

    /// Try to log in.
    ///
    /// Without credentials a still-valid session logs the user back in.
    /// On failure any existing session, and its timer, is discarded.
    pub fn login(&self, username: Option<&str>, password: Option<&str>) -> AppResult<LoginStatus> {
        let path = self.cfg.session_file();
        let now = Utc::now();

        let (username, password) = match (username, password) {
            (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u.trim(), p),
            _ => {
                return Ok(match self.current()? {
                    Some(s) => self
                        .auth_user(&s.username)
                        .map(LoginStatus::Success)
                        .unwrap_or(LoginStatus::Pending),
                    None => LoginStatus::Pending,
                });
            }
        };

        let verified = self
            .cfg
            .user(username)
            .map(|u| password::verify_password(password, &u.password))
            .unwrap_or(false);

        if !verified {
            Session::remove(&path)?;
            return Ok(LoginStatus::Failure);
        }

        let Some(user) = self.auth_user(username) else {
            return Ok(LoginStatus::Failure);
        };

        // Same user logging in again keeps the running timer.
        let previous = self.current()?.filter(|s| s.username == user.username);
        let mut session = Session::issue(&self.cfg.cookie, &user.username, &user.name, now);
        if let Some(prev) = previous {
            session.timer = prev.timer;
        }
        self.save_session(&session)?;

        Ok(LoginStatus::Success(user))
    }

    /// Drop the session. Returns false when nobody was logged in.
    pub fn logout(&self) -> AppResult<bool> {
        Session::remove(&self.cfg.session_file())
    }

    /// The valid session, if any. Expired or tampered sessions are removed.
    pub fn current(&self) -> AppResult<Option<Session>> {
        let path = self.cfg.session_file();
        let Some(session) = Session::load(&path)? else {
            return Ok(None);
        };

        if session.is_valid(&self.cfg.cookie, Utc::now()) && self.cfg.user(&session.username).is_some() {
            Ok(Some(session))
        } else {
            Session::remove(&path)?;
            Ok(None)
        }
    }

    /// Session of a logged-in user or `AuthPending`.
    pub fn require(&self) -> AppResult<Session> {
        self.current()?.ok_or(AppError::AuthPending)
    }

    /// Session of a logged-in admin.
    pub fn require_admin(&self) -> AppResult<Session> {
        let session = self.require()?;
        if !self.cfg.is_admin(&session.username) {
            return Err(AppError::NotAuthorized(session.username));
        }
        Ok(session)
    }

    /// Re-sign and persist the session (its timer may have changed).
    pub fn save_session(&self, session: &Session) -> AppResult<()> {
        let mut sealed = session.clone();
        sealed.seal(&self.cfg.cookie);
        sealed.save(&self.cfg.session_file())
    }
}
