// src/export/model.rs

use crate::models::run::Run;
use crate::utils::formatting::round2;
use chrono::SecondsFormat;
use serde::Serialize;

/// Flat run row, same columns as the leaderboard.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RunExport {
    pub username: String,
    pub team: String,
    pub run_index: i64,
    pub elapsed_seconds: f64,
    pub saved_at: String,
}

impl From<&Run> for RunExport {
    fn from(r: &Run) -> Self {
        Self {
            username: r.username.clone(),
            team: r.team.to_db_str().to_string(),
            run_index: r.run_index,
            elapsed_seconds: round2(r.elapsed_seconds),
            saved_at: r.saved_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// CSV header row
pub(crate) fn get_headers() -> [&'static str; 5] {
    ["username", "team", "run_index", "elapsed_seconds", "saved_at"]
}
