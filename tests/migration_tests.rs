use chrono::{Duration, TimeZone, Utc};
use rstopwatch::config::SequenceScope;
use rstopwatch::db::pool::DbPool;
use rstopwatch::db::store::{RunOrder, RunStore};
use rstopwatch::errors::AppError;
use rstopwatch::models::team::Team;
use rusqlite::Connection;

/// A database written with the `sprint_number` / `time` layout is converted
/// in place when opened, and a zip backup is left beside it.
#[test]
fn test_legacy_times_schema_is_migrated() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("legacy.sqlite");

    {
        let conn = Connection::open(&db_path).expect("open legacy db");
        conn.execute_batch(
            r#"
            CREATE TABLE times (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                team TEXT NOT NULL,
                sprint_number INTEGER NOT NULL,
                time REAL NOT NULL,
                saved_at TEXT NOT NULL
            );
            INSERT INTO times (username, team, sprint_number, time, saved_at)
            VALUES ('alice', 'Blue', 1, 12.5, '2025-06-01T08:00:00.000000+00:00'),
                   ('alice', 'Blue', 2, 11.0, '2025-06-01T08:05:00.000000+00:00');
            "#,
        )
        .expect("seed legacy rows");
    }

    let pool = DbPool::new(&db_path.to_string_lossy()).expect("open + migrate");

    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);
    let runs = store.list_runs(RunOrder::Duration).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].run_index, 2);
    assert_eq!(runs[0].team, Team::Blue);
    assert!((runs[0].elapsed_seconds - 11.0).abs() < 1e-9);

    // new saves continue the numbering
    assert_eq!(store.save_run("alice", Team::Blue, 9.0).unwrap().run_index, 3);

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);

    let backups = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".zip"))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn test_reopening_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("fresh.sqlite");
    let path = db_path.to_string_lossy().to_string();

    {
        let pool = DbPool::new(&path).unwrap();
        RunStore::new(&pool.conn, SequenceScope::Daily)
            .save_run("bob", Team::White, 4.2)
            .unwrap();
    }

    let pool = DbPool::new(&path).unwrap();
    let runs = RunStore::new(&pool.conn, SequenceScope::Daily)
        .list_runs(RunOrder::Duration)
        .unwrap();
    assert_eq!(runs.len(), 1);

    let mode: String = pool
        .conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}

fn seed_legacy(db_path: &std::path::Path, rows: &str) {
    let conn = Connection::open(db_path).expect("open legacy db");
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE times (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            team TEXT NOT NULL,
            sprint_number INTEGER NOT NULL,
            time REAL NOT NULL,
            saved_at TEXT NOT NULL
        );
        INSERT INTO times (username, team, sprint_number, time, saved_at) VALUES {rows};
        "#
    ))
    .expect("seed legacy rows");
}

/// Team spellings are normalised and offset-less timestamps are read as UTC.
#[test]
fn test_legacy_team_case_and_naive_timestamps() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("legacy.sqlite");
    seed_legacy(
        &db_path,
        "('bob', 'blue', 1, 3.0, '2025-10-20T12:00:00.123456'),
         ('wanda', ' WHITE ', 1, 4.0, '2025-10-20T12:01:00+00:00')",
    );

    let pool = DbPool::new(&db_path.to_string_lossy()).expect("open + migrate");
    let runs = RunStore::new(&pool.conn, SequenceScope::AllTime)
        .list_runs(RunOrder::Duration)
        .unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].username, "bob");
    assert_eq!(runs[0].team, Team::Blue);
    assert_eq!(
        runs[0].saved_at,
        Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap() + Duration::microseconds(123_456)
    );
    assert_eq!(runs[1].team, Team::White);
}

#[test]
fn test_naive_saved_at_does_not_break_listing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let pool = DbPool::new(&dir.path().join("mixed.sqlite").to_string_lossy()).unwrap();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);

    store.save_run("alice", Team::White, 5.0).unwrap();
    pool.conn
        .execute(
            "INSERT INTO times (username, team, run_index, elapsed_seconds, saved_at)
             VALUES ('bob', 'Blue', 1, 3.0, '2025-10-20T12:00:00.123456')",
            [],
        )
        .unwrap();

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    let names: Vec<&str> = runs.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice"]);
}

/// An unknown team aborts before anything is touched and names the row.
#[test]
fn test_unmappable_legacy_team_leaves_table_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("legacy.sqlite");
    seed_legacy(
        &db_path,
        "('carl', 'Red', 7, 2.0, '2025-10-20T12:00:00+00:00')",
    );

    match DbPool::new(&db_path.to_string_lossy()) {
        Err(AppError::Migration(msg)) => assert!(msg.contains("carl#7"), "{msg}"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("migration should have been refused"),
    }

    let conn = Connection::open(&db_path).unwrap();
    let legacy: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('times') WHERE name = 'sprint_number'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(legacy, 1);
}
