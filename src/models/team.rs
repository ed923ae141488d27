use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    White,
    Blue,
    Coach,
}

impl Team {
    pub const ALL: [Team; 3] = [Team::White, Team::Blue, Team::Coach];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Team::White => "White",
            Team::Blue => "Blue",
            Team::Coach => "Coach",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "White" => Some(Team::White),
            "Blue" => Some(Team::Blue),
            "Coach" => Some(Team::Coach),
            _ => None,
        }
    }

    /// Helper: accept user input in any case ("blue", "BLUE", "Blue")
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        Team::ALL
            .into_iter()
            .find(|t| t.to_db_str().to_lowercase() == c)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
