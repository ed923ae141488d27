pub mod config;
pub mod del;
pub mod export;
pub mod list;
pub mod log;
pub mod save;
pub mod stopwatch;
pub mod teams;
pub mod users;
