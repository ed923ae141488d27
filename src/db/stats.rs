use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::format_seconds;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RUNS / USERS
    //
    let (count, users): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT username) FROM times",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!("{}• Total runs:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!("{}• Runners:{} {}", CYAN, RESET, users);

    //
    // 3) SAVED RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(saved_at), MAX(saved_at) FROM times",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Saved between:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    //
    // 4) BEST TIME
    //
    let best: Option<f64> = pool
        .conn
        .query_row("SELECT MIN(elapsed_seconds) FROM times", [], |row| row.get(0))?;
    if let Some(b) = best {
        println!("{}• Best time:{} {}", CYAN, RESET, format_seconds(b));
    }

    println!();
    Ok(())
}
