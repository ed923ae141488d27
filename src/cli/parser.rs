use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStopwatch
#[derive(Parser)]
#[command(
    name = "rstopwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A multi-user stopwatch: time runs, save them per team and rank them on a SQLite leaderboard",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file (the session file lives next to it)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "admin", value_name = "USER", help = "Seed an admin user")]
        admin: Option<String>,

        #[arg(long = "password", requires = "admin", help = "Password of the seeded admin")]
        password: Option<String>,

        #[arg(long = "name", requires = "admin", help = "Display name of the seeded admin")]
        name: Option<String>,

        #[arg(
            long = "team",
            requires = "admin",
            help = "Team of the seeded admin: White, Blue or Coach (default Coach)"
        )]
        team: Option<String>,
    },

    /// Log in (without credentials, resume a still valid session)
    Login {
        #[arg(long = "username", short = 'u')]
        username: Option<String>,

        #[arg(long = "password", short = 'p')]
        password: Option<String>,
    },

    /// Log out and discard the session (and its timer)
    Logout,

    /// Show the logged-in user and the timer
    Whoami,

    /// Start or resume the stopwatch
    Start,

    /// Stop (pause) the stopwatch
    Stop,

    /// Reset the stopwatch to zero
    Reset,

    /// Show the elapsed time
    Status,

    /// Live view of the running stopwatch, refreshed every 100 ms
    Watch {
        #[arg(long = "seconds", help = "Stop watching after this many seconds")]
        seconds: Option<f64>,
    },

    /// Save the current elapsed time as a run
    Save,

    /// Show the leaderboard
    List {
        #[arg(long = "by-team", help = "Group the leaderboard by team")]
        by_team: bool,
    },

    /// Delete a saved run (admin only)
    Del {
        #[arg(long = "user", help = "Owner of the run")]
        user: String,

        #[arg(long = "index", help = "Run index to delete")]
        index: i64,

        #[arg(
            long = "date",
            value_name = "YYYY-MM-DD",
            help = "Day the run was saved (daily scope only, default today UTC)"
        )]
        date: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all runs (admin only)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or reassign teams (admin only)
    Teams {
        #[arg(long = "set", value_name = "USER=TEAM", help = "Reassign a user's team")]
        set: Vec<String>,
    },

    /// Add a user to the credentials map (admin only)
    User {
        #[arg(long = "add", value_name = "USER")]
        add: String,

        #[arg(long = "password")]
        password: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "team", default_value = "White")]
        team: String,

        #[arg(long = "admin")]
        admin: bool,
    },

    /// Print a password hash for the configuration file
    HashPassword { password: String },

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (migrations, info)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
