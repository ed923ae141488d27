//! Formatting utilities used for CLI and export outputs.

/// Seconds with two decimals, as shown by the stopwatch ("5.00").
pub fn format_seconds(secs: f64) -> String {
    format!("{:.2}", secs)
}

/// Round to two decimals (leaderboard/export values).
pub fn round2(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// Human readable clock form: `MM:SS.cc`, or `HH:MM:SS.cc` past one hour.
pub fn secs2readable(secs: f64) -> String {
    let centis = (secs.max(0.0) * 100.0).round() as i64;
    let (total_secs, cc) = (centis / 100, centis % 100);
    let (h, m, s) = (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60);

    if h > 0 {
        format!("{:02}:{:02}:{:02}.{:02}", h, m, s, cc)
    } else {
        format!("{:02}:{:02}.{:02}", m, s, cc)
    }
}

/// Strip ANSI colour sequences (width computations, exports).
pub fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}
