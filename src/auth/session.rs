//! Signed per-user session file: identity, expiry and the running timer.

use crate::auth::password::digest;
use crate::config::CookieConfig;
use crate::errors::AppResult;
use crate::models::timer::TimerState;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub cookie: String,
    pub username: String,
    pub name: String,
    pub expires_at: DateTime<Utc>,
    pub signature: String,
    #[serde(default)]
    pub timer: TimerState,
}

impl Session {
    pub fn issue(cookie: &CookieConfig, username: &str, name: &str, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            cookie: cookie.name.clone(),
            username: username.to_string(),
            name: name.to_string(),
            expires_at: now + Duration::days(cookie.expiry_days),
            signature: String::new(),
            timer: TimerState::new(),
        };
        session.seal(cookie);
        session
    }

    /// Signature over identity, expiry and timer state.
    pub fn sign(&self, cookie: &CookieConfig) -> String {
        let start = self
            .timer
            .start_epoch
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        let payload = format!(
            "{}|{}|{}|{}|{}|{}",
            cookie.name,
            self.username,
            self.expires_at.to_rfc3339(),
            self.timer.running,
            start,
            self.timer.elapsed
        );
        digest(&cookie.key, &payload)
    }

    /// Recompute the signature after the timer changed.
    pub fn seal(&mut self, cookie: &CookieConfig) {
        self.signature = self.sign(cookie);
    }

    /// Signature matches the current cookie settings and it has not expired.
    pub fn is_valid(&self, cookie: &CookieConfig, now: DateTime<Utc>) -> bool {
        self.cookie == cookie.name && self.expires_at > now && self.signature == self.sign(cookie)
    }

    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        // A corrupted session is the same as no session.
        Ok(serde_yaml::from_str(&content).ok())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Returns true when a session file was actually removed.
    pub fn remove(path: &Path) -> AppResult<bool> {
        if path.exists() {
            fs::remove_file(path)?;
            return Ok(true);
        }
        Ok(false)
    }
}
