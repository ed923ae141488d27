//! User-facing console messages (icon + colour prefix).

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Section header, e.g. the stopwatch title
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}====================== {msg}{RESET}\n");
}
