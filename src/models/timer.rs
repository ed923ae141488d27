//! Per-session stopwatch state machine.
//!
//! While `running` the displayed elapsed time is `now - start_epoch`; once
//! stopped, `elapsed` is the authoritative value. Every transition takes the
//! current instant explicitly, so callers decide what "now" is.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimerState {
    pub running: bool,
    pub start_epoch: Option<DateTime<Utc>>,
    pub elapsed: f64,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or resume) the clock. No-op when already running.
    ///
    /// The start epoch is moved back by the accumulated elapsed time, so a
    /// stop/start cycle resumes counting from where it paused.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.running {
            return;
        }
        // An elapsed value that cannot be anchored restarts from zero.
        match now.checked_sub_signed(secs_to_duration(self.elapsed)) {
            Some(epoch) => self.start_epoch = Some(epoch),
            None => {
                self.elapsed = 0.0;
                self.start_epoch = Some(now);
            }
        }
        self.running = true;
    }

    /// Freeze the clock. No-op when not running.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        if !self.running {
            return;
        }
        if let Some(start) = self.start_epoch {
            self.elapsed = seconds_between(start, now);
        }
        self.running = false;
    }

    /// Back to zero, whatever the current state.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.start_epoch = None;
        self.running = false;
    }

    /// Refresh `elapsed` from the start epoch while running (render cycle).
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let (true, Some(start)) = (self.running, self.start_epoch) {
            self.elapsed = seconds_between(start, now);
        }
    }

    /// Elapsed seconds as they should be shown at `now`.
    pub fn display(&self, now: DateTime<Utc>) -> f64 {
        match (self.running, self.start_epoch) {
            (true, Some(start)) => seconds_between(start, now),
            _ => self.elapsed,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::zero();
    }
    Duration::microseconds((secs * 1_000_000.0).round() as i64)
}

/// Seconds from `start` to `now`, never negative (clock skew).
fn seconds_between(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let delta = now - start;
    let secs = match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    };
    secs.max(0.0)
}
