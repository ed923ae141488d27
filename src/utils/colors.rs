/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour used for a team label in tables.
pub fn color_for_team(team: crate::models::team::Team) -> &'static str {
    use crate::models::team::Team;
    match team {
        Team::White => RESET,
        Team::Blue => BLUE,
        Team::Coach => MAGENTA,
    }
}

/// Podium colours for the leaderboard: gold-ish, silver-ish, bronze-ish.
pub fn color_for_rank(rank: usize) -> &'static str {
    match rank {
        1 => YELLOW,
        2 => CYAN,
        3 => RED,
        _ => RESET,
    }
}
