use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const OP_TARGET_WIDTH: usize = 40;

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "del" => Colour::Red,
        "teams" | "user_add" => Colour::Yellow,
        "login" | "logout" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Only the operation word is coloured; width is computed on plain text.
            let plain = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            let plain = if plain.chars().count() > OP_TARGET_WIDTH {
                let mut s: String = plain.chars().take(OP_TARGET_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                plain
            };
            let padding = " ".repeat(OP_TARGET_WIDTH.saturating_sub(plain.chars().count()));

            let colored = match plain.split_once(' ') {
                Some((op_word, rest)) => {
                    format!("{} {}", color_for_operation(&operation).paint(op_word), rest)
                }
                None => color_for_operation(&operation).paint(plain.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
