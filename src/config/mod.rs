use crate::errors::{AppError, AppResult};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Window over which per-user run indexes are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceScope {
    AllTime,
    #[default]
    Daily,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Password hash, see `auth::password`.
    pub password: String,
    pub team: Team,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub usernames: BTreeMap<String, UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Signing key for session files. Generated and written back on the
    /// first load when absent.
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
}

fn default_cookie_name() -> String {
    "rstopwatch_session".to_string()
}
fn new_cookie_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
fn default_expiry_days() -> i64 {
    30
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            key: String::new(),
            expiry_days: default_expiry_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub sequence_scope: SequenceScope,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub cookie: CookieConfig,

    /// Where this document was loaded from (never serialized).
    #[serde(skip)]
    pub path: PathBuf,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rstopwatch")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstopwatch.conf")
    }

    /// Default SQLite database, next to the given config file
    pub fn database_file_for(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir)
            .join("rstopwatch.sqlite")
    }

    fn defaults_for(config_path: &Path) -> Self {
        Self {
            database: Self::database_file_for(config_path)
                .to_string_lossy()
                .to_string(),
            sequence_scope: SequenceScope::default(),
            credentials: Credentials::default(),
            cookie: CookieConfig {
                key: new_cookie_key(),
                ..CookieConfig::default()
            },
            path: config_path.to_path_buf(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Ok(Self::defaults_for(config_path));
        }

        let content = fs::read_to_string(config_path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.path = config_path.to_path_buf();

        // Sessions are signed with this key: it must survive across loads.
        if cfg.cookie.key.trim().is_empty() {
            cfg.cookie.key = new_cookie_key();
            cfg.save()?;
        }
        Ok(cfg)
    }

    /// Rewrite the whole document in place.
    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(&self.path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Session ("cookie") file, kept beside the config file
    pub fn session_file(&self) -> PathBuf {
        self.path.with_file_name("session.yaml")
    }

    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.credentials.usernames.get(username)
    }

    pub fn is_admin(&self, username: &str) -> bool {
        self.user(username).map(|u| u.admin).unwrap_or(false)
    }

    /// Create or overwrite a user record.
    pub fn upsert_user(&mut self, username: &str, record: UserRecord) {
        self.credentials
            .usernames
            .insert(username.to_string(), record);
    }

    /// Reassign a user's team. Fails for unknown users.
    pub fn set_team(&mut self, username: &str, team: Team) -> AppResult<()> {
        let user = self
            .credentials
            .usernames
            .get_mut(username)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;
        user.team = team;
        Ok(())
    }

    /// Initialize configuration directory, config file and database file.
    ///
    /// An existing config file is loaded and kept: init never drops
    /// credentials that are already there.
    pub fn init_all(config_path: &Path, custom_db: Option<&str>) -> AppResult<Self> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&dir)?;

        let mut cfg = Self::load(config_path)?;

        if let Some(name) = custom_db {
            let p = Path::new(name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            cfg.database = db_path.to_string_lossy().to_string();
        }

        cfg.save()?;

        let db_path = PathBuf::from(&cfg.database);
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(cfg)
    }
}
