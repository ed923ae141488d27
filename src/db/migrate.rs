use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

const LEGACY_SEQUENCE_MIGRATION: &str = "20251020_0001_times_run_index";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `times` table exists.
fn times_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='times'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Column names of the `times` table.
fn times_columns(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('times')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

fn create_times_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS times (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT NOT NULL,
            team            TEXT NOT NULL CHECK(team IN ('White','Blue','Coach')),
            run_index       INTEGER NOT NULL,
            elapsed_seconds REAL NOT NULL CHECK(elapsed_seconds >= 0),
            saved_at        TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_times_user_index ON times(username, run_index);
        CREATE INDEX IF NOT EXISTS idx_times_elapsed ON times(elapsed_seconds);
        "#,
    )?;
    Ok(())
}

/// Rebuild a `times` table that uses the `sprint_number` / `time` layout.
fn migrate_legacy_times(conn: &Connection) -> AppResult<()> {
    warning("Converting 'sprint_number'/'time' columns to 'run_index'/'elapsed_seconds'...");

    let rebuilt = conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE times RENAME TO times_old;

        CREATE TABLE times (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT NOT NULL,
            team            TEXT NOT NULL CHECK(team IN ('White','Blue','Coach')),
            run_index       INTEGER NOT NULL,
            elapsed_seconds REAL NOT NULL CHECK(elapsed_seconds >= 0),
            saved_at        TEXT NOT NULL
        );

        INSERT INTO times (id, username, team, run_index, elapsed_seconds, saved_at)
        SELECT id,
               username,
               CASE lower(trim(team))
                   WHEN 'white' THEN 'White'
                   WHEN 'blue'  THEN 'Blue'
                   WHEN 'coach' THEN 'Coach'
               END,
               sprint_number,
               time,
               saved_at
        FROM times_old;

        DROP TABLE times_old;

        UPDATE sqlite_sequence
            SET seq = (SELECT IFNULL(MAX(id), 0) FROM times)
        WHERE name = 'times';

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    );
    if let Err(e) = rebuilt {
        // Leave the legacy table as it was.
        let _ = conn.execute_batch("ROLLBACK; PRAGMA foreign_keys=ON;");
        return Err(AppError::Migration(format!(
            "{}: {}",
            LEGACY_SEQUENCE_MIGRATION, e
        )));
    }

    ttlog(
        conn,
        "migration_applied",
        LEGACY_SEQUENCE_MIGRATION,
        "Renamed sprint_number/time to run_index/elapsed_seconds",
    )?;

    success(format!(
        "Migration applied: {} → times table uses run_index/elapsed_seconds",
        LEGACY_SEQUENCE_MIGRATION
    ));
    Ok(())
}

/// Legacy rows whose team cannot be mapped onto White/Blue/Coach, or whose
/// time is negative. Any of them would make the rebuild fail half-way.
fn legacy_rows_rejected(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT username, sprint_number, team, time FROM times
         WHERE lower(trim(team)) NOT IN ('white', 'blue', 'coach') OR time < 0
         ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(format!(
            "{}#{} (team '{}', time {})",
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, f64>(3)?
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn zip_err<E: std::fmt::Display>(step: &str, e: E) -> AppError {
    AppError::Migration(format!("Backup failed ({}): {}", step, e))
}

fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_run_index.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = Path::new(db_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| zip_err("create", e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| zip_err("start_file", e))?;

    let db_content = fs::read(db_path).map_err(|e| zip_err("read", e))?;
    zip.write_all(&db_content)
        .map_err(|e| zip_err("write_all", e))?;
    zip.finish().map_err(|e| zip_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() every time a database is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the times table
    if !times_table_exists(conn)? {
        create_times_table(conn)?;
        success("Created times table.");
    } else {
        let cols = times_columns(conn)?;
        let is_legacy =
            cols.iter().any(|c| c == "sprint_number") && cols.iter().any(|c| c == "time");

        if is_legacy {
            let rejected = legacy_rows_rejected(conn)?;
            if !rejected.is_empty() {
                return Err(AppError::Migration(format!(
                    "{}: fix these rows in 'times' first: {}",
                    LEGACY_SEQUENCE_MIGRATION,
                    rejected.join(", ")
                )));
            }

            warning("Legacy times schema detected, creating safety backup before migration...");

            let db_path: String = conn
                .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
                .unwrap_or_default();

            if !db_path.is_empty() {
                backup_before_migration(&db_path)?;
            } else {
                warning("Could not determine DB path, backup skipped.");
            }

            migrate_legacy_times(conn)?;
        }
    }

    // 3) Indexes
    ensure_indexes(conn)?;

    Ok(())
}
