use chrono::{DateTime, Duration, TimeZone, Utc};
use rstopwatch::config::SequenceScope;
use rstopwatch::db::pool::DbPool;
use rstopwatch::db::store::{RunOrder, RunStore};
use rstopwatch::models::team::Team;
use tempfile::TempDir;

fn open_db() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store.sqlite");
    let pool = DbPool::new(&path.to_string_lossy()).expect("open db");
    (dir, pool)
}

fn day1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 2, 10, 0, 0).unwrap()
}

#[test]
fn test_first_sequence_number_is_one() {
    let (_dir, pool) = open_db();
    for scope in [SequenceScope::AllTime, SequenceScope::Daily] {
        let store = RunStore::new(&pool.conn, scope);
        assert_eq!(store.next_sequence_number_at("alice", day1()).unwrap(), 1);
    }
}

#[test]
fn test_save_then_next_sequence_increments_by_one() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);

    for expected in 1..=4 {
        let before = store.next_sequence_number_at("alice", day1()).unwrap();
        let run = store
            .save_run_at("alice", Team::White, 2.0 + expected as f64, day1())
            .unwrap();
        assert_eq!(run.run_index, before);
        assert_eq!(run.run_index, expected);
        assert_eq!(
            store.next_sequence_number_at("alice", day1()).unwrap(),
            before + 1
        );
    }

    // other users keep their own counter
    assert_eq!(store.next_sequence_number_at("bob", day1()).unwrap(), 1);
}

#[test]
fn test_single_run_scenario() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);

    store.save_run_at("alice", Team::Blue, 5.0, day1()).unwrap();

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].username, "alice");
    assert_eq!(runs[0].team, Team::Blue);
    assert_eq!(runs[0].run_index, 1);
    assert!((runs[0].elapsed_seconds - 5.0).abs() < 1e-9);
    assert_eq!(runs[0].saved_at, day1());
}

#[test]
fn test_list_orders_by_ascending_duration() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);

    let first = store.save_run_at("alice", Team::White, 5.0, day1()).unwrap();
    let second = store
        .save_run_at("alice", Team::White, 3.0, day1() + Duration::seconds(30))
        .unwrap();
    assert_eq!(first.run_index, 1);
    assert_eq!(second.run_index, 2);

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    let got: Vec<(i64, f64)> = runs.iter().map(|r| (r.run_index, r.elapsed_seconds)).collect();
    assert_eq!(got, vec![(2, 3.0), (1, 5.0)]);
}

#[test]
fn test_list_by_team_groups_then_sorts() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);

    store.save_run_at("wanda", Team::White, 2.0, day1()).unwrap();
    store.save_run_at("bea", Team::Blue, 9.0, day1()).unwrap();
    store.save_run_at("bob", Team::Blue, 4.0, day1()).unwrap();
    store.save_run_at("carl", Team::Coach, 1.0, day1()).unwrap();

    let runs = store.list_runs(RunOrder::TeamThenDuration).unwrap();
    let names: Vec<&str> = runs.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "bea", "carl", "wanda"]);

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    let names: Vec<&str> = runs.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["carl", "wanda", "bob", "bea"]);
}

#[test]
fn test_delete_leaves_other_runs() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);

    store.save_run_at("alice", Team::White, 5.0, day1()).unwrap();
    store.save_run_at("alice", Team::White, 3.0, day1()).unwrap();

    assert_eq!(store.delete_run("alice", 1).unwrap(), 1);

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_index, 2);
}

#[test]
fn test_delete_absent_run_is_not_an_error() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::AllTime);
    store.save_run_at("alice", Team::White, 5.0, day1()).unwrap();

    let before = store.list_runs(RunOrder::Duration).unwrap();
    assert_eq!(store.delete_run("alice", 42).unwrap(), 0);
    assert_eq!(store.delete_run("nobody", 1).unwrap(), 0);
    assert_eq!(store.list_runs(RunOrder::Duration).unwrap(), before);
}

#[test]
fn test_daily_scope_restarts_each_utc_day() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);
    let day2 = day1() + Duration::days(1);

    store.save_run_at("alice", Team::White, 5.0, day1()).unwrap();
    store.save_run_at("alice", Team::White, 6.0, day1()).unwrap();
    let next_day = store.save_run_at("alice", Team::White, 7.0, day2).unwrap();
    assert_eq!(next_day.run_index, 1);

    // All-time view of the same table continues from the max.
    let all_time = RunStore::new(&pool.conn, SequenceScope::AllTime);
    assert_eq!(all_time.next_sequence_number_at("alice", day2).unwrap(), 3);
}

#[test]
fn test_daily_delete_targets_one_day_only() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);
    let day2 = day1() + Duration::days(1);

    store.save_run_at("alice", Team::White, 5.0, day1()).unwrap();
    store.save_run_at("alice", Team::White, 7.0, day2).unwrap();

    assert_eq!(
        store.delete_run_on("alice", 1, day2.date_naive()).unwrap(),
        1
    );

    let runs = store.list_runs(RunOrder::Duration).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].saved_at, day1());
}

#[test]
fn test_wall_clock_save_and_next_sequence() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);

    assert_eq!(store.next_sequence_number("alice").unwrap(), 1);
    let run = store.save_run("alice", Team::Coach, 1.25).unwrap();
    assert_eq!(run.run_index, 1);
    assert_eq!(store.next_sequence_number("alice").unwrap(), 2);

    assert_eq!(store.delete_run("alice", 1).unwrap(), 1);
    assert_eq!(store.next_sequence_number("alice").unwrap(), 1);
}

#[test]
fn test_count_runs() {
    let (_dir, pool) = open_db();
    let store = RunStore::new(&pool.conn, SequenceScope::Daily);
    assert_eq!(store.count_runs().unwrap(), 0);
    store.save_run_at("alice", Team::White, 1.0, day1()).unwrap();
    store.save_run_at("bob", Team::Blue, 2.0, day1()).unwrap();
    assert_eq!(store.count_runs().unwrap(), 2);
}
