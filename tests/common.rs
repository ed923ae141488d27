#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rsw() -> Command {
    cargo_bin_cmd!("rstopwatch")
}

/// Isolated config + DB + session inside a temp dir.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: String,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("rstopwatch.conf");
        let db = dir.path().join("rstopwatch.sqlite");
        Self {
            config: config.to_string_lossy().to_string(),
            db: db.to_string_lossy().to_string(),
            dir,
        }
    }

    /// Command with `--config` and `--db` already set.
    pub fn cmd(&self) -> Command {
        let mut c = rsw();
        c.args(["--config", &self.config, "--db", &self.db]);
        c
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn session_file(&self) -> PathBuf {
        self.path("session.yaml")
    }

    /// `init` seeding an admin user.
    pub fn init_with_admin(&self, user: &str, password: &str) {
        self.cmd()
            .args(["init", "--admin", user, "--password", password])
            .assert()
            .success();
    }

    pub fn login(&self, user: &str, password: &str) {
        self.cmd()
            .args(["login", "-u", user, "-p", password])
            .assert()
            .success();
    }

    /// Add a regular user while `admin` is logged in, then log out.
    pub fn add_user(&self, admin: (&str, &str), user: &str, password: &str, team: &str) {
        self.login(admin.0, admin.1);
        self.cmd()
            .args(["user", "--add", user, "--password", password, "--team", team])
            .assert()
            .success();
        self.cmd().arg("logout").assert().success();
    }
}
