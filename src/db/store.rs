//! Run Store: create / list / delete completed timer runs in the `times` table.
//!
//! Run indexes are unique per user within the configured [`SequenceScope`].
//! With the daily scope the window is the UTC calendar day, matched on the
//! date prefix of `saved_at`.

use crate::config::SequenceScope;
use crate::errors::{AppError, AppResult};
use crate::models::run::Run;
use crate::models::team::Team;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Row, params};

/// Leaderboard ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunOrder {
    /// Fastest first.
    #[default]
    Duration,
    /// Grouped by team, fastest first inside each team.
    TeamThenDuration,
}

pub struct RunStore<'a> {
    conn: &'a Connection,
    scope: SequenceScope,
}

impl<'a> RunStore<'a> {
    pub fn new(conn: &'a Connection, scope: SequenceScope) -> Self {
        Self { conn, scope }
    }

    /// Next run index for `username` in the scope window containing `now`.
    pub fn next_sequence_number_at(&self, username: &str, now: DateTime<Utc>) -> AppResult<i64> {
        let max: Option<i64> = match self.scope {
            SequenceScope::AllTime => self.conn.query_row(
                "SELECT MAX(run_index) FROM times WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )?,
            SequenceScope::Daily => self.conn.query_row(
                "SELECT MAX(run_index) FROM times
                 WHERE username = ?1 AND substr(saved_at, 1, 10) = ?2",
                params![username, day_key(now.date_naive())],
                |row| row.get(0),
            )?,
        };
        Ok(max.unwrap_or(0) + 1)
    }

    pub fn next_sequence_number(&self, username: &str) -> AppResult<i64> {
        self.next_sequence_number_at(username, Utc::now())
    }

    /// Insert a run stamped with `now`. No validation on the duration here:
    /// callers reject non-positive values before reaching the store.
    pub fn save_run_at(
        &self,
        username: &str,
        team: Team,
        elapsed_seconds: f64,
        now: DateTime<Utc>,
    ) -> AppResult<Run> {
        let run_index = self.next_sequence_number_at(username, now)?;

        self.conn.execute(
            "INSERT INTO times (username, team, run_index, elapsed_seconds, saved_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                username,
                team.to_db_str(),
                run_index,
                elapsed_seconds,
                now.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;

        Ok(Run {
            username: username.to_string(),
            team,
            run_index,
            elapsed_seconds,
            saved_at: now,
        })
    }

    pub fn save_run(&self, username: &str, team: Team, elapsed_seconds: f64) -> AppResult<Run> {
        self.save_run_at(username, team, elapsed_seconds, Utc::now())
    }

    /// All runs, in leaderboard order.
    pub fn list_runs(&self, order: RunOrder) -> AppResult<Vec<Run>> {
        let sql = match order {
            RunOrder::Duration => {
                "SELECT username, team, run_index, elapsed_seconds, saved_at
                 FROM times
                 ORDER BY elapsed_seconds ASC, saved_at ASC"
            }
            RunOrder::TeamThenDuration => {
                "SELECT username, team, run_index, elapsed_seconds, saved_at
                 FROM times
                 ORDER BY team ASC, elapsed_seconds ASC, saved_at ASC"
            }
        };

        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Delete `(username, run_index)` in the current scope window.
    ///
    /// Returns the number of rows removed; an absent run is not an error.
    pub fn delete_run(&self, username: &str, run_index: i64) -> AppResult<usize> {
        self.delete_run_on(username, run_index, Utc::now().date_naive())
    }

    /// Delete `(username, run_index)` saved on `day` (ignored for all-time scope).
    pub fn delete_run_on(&self, username: &str, run_index: i64, day: NaiveDate) -> AppResult<usize> {
        let removed = match self.scope {
            SequenceScope::AllTime => self.conn.execute(
                "DELETE FROM times WHERE username = ?1 AND run_index = ?2",
                params![username, run_index],
            )?,
            SequenceScope::Daily => self.conn.execute(
                "DELETE FROM times
                 WHERE username = ?1 AND run_index = ?2 AND substr(saved_at, 1, 10) = ?3",
                params![username, run_index, day_key(day)],
            )?,
        };
        Ok(removed)
    }

    pub fn count_runs(&self) -> AppResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM times", [], |row| row.get(0))?)
    }
}

fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// `saved_at` is RFC 3339; offset-less ISO 8601 values are read as UTC.
pub fn parse_saved_at(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn map_row(row: &Row) -> rusqlite::Result<Run> {
    let team_str: String = row.get("team")?;
    let team = Team::from_db_str(&team_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTeam(team_str.clone())),
        )
    })?;

    let saved_str: String = row.get("saved_at")?;
    let saved_at = parse_saved_at(&saved_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(saved_str.clone())),
        )
    })?;

    Ok(Run {
        username: row.get("username")?,
        team,
        run_index: row.get("run_index")?,
        elapsed_seconds: row.get("elapsed_seconds")?,
        saved_at,
    })
}
