pub mod auth;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod save;
pub mod teams;
pub mod timer;
pub mod user;
