//! Clock
//!
//! Time source for item ids and display timestamps. The system clock is used in
//! the browser; tests drive a manual clock.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Display layout for item timestamps (`17/10/2026, 14.05.09`)
pub const TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y, %H.%M.%S";

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn epoch_millis(&self) -> u64;

    /// Local wall-clock time
    fn local_time(&self) -> NaiveDateTime;
}

/// Wall clock of the host (JS `Date` under wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn local_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    millis: u64,
}

impl ManualClock {
    pub fn at(millis: u64) -> Self {
        Self { millis }
    }

    pub fn advance(&mut self, millis: u64) {
        self.millis += millis;
    }
}

impl Clock for ManualClock {
    fn epoch_millis(&self) -> u64 {
        self.millis
    }

    fn local_time(&self) -> NaiveDateTime {
        DateTime::from_timestamp_millis(self.millis as i64)
            .unwrap_or_default()
            .naive_utc()
    }
}

/// Format a wall-clock time for display
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
