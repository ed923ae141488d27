//! Path utilities for user supplied paths (`--config`, `--db`, `export --file`).

use std::path::PathBuf;

/// Expand a leading `~/` and anchor relative paths on the working directory.
pub fn resolve_user_path(path: &str) -> PathBuf {
    let expanded = match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    };

    if expanded.is_absolute() {
        return expanded;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&expanded))
        .unwrap_or(expanded)
}
