//! A saved, completed timer run.

use crate::models::team::Team;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub username: String,
    pub team: Team,
    pub run_index: i64,
    pub elapsed_seconds: f64,
    pub saved_at: DateTime<Utc>,
}
