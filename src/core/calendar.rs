//! Calendar-day arithmetic and the day-boundary countdown
//!
//! Everything here works on local calendar dates supplied by the caller.
//! Nothing reads the system clock.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Signed number of calendar days from `from` to `to`
///
/// Positive when `to` is later than `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Time left until the next local midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub fn from_duration(duration: Duration) -> Self {
        let total = duration.num_seconds().max(0);
        Self {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else if self.minutes > 0 {
            write!(f, "{}m {}s", self.minutes, self.seconds)
        } else {
            write!(f, "{}s", self.seconds)
        }
    }
}

/// Remaining time from `now` until the start of the next calendar day
///
/// Sub-second remainders are truncated, so one nanosecond before midnight
/// reports `0s`.
pub fn time_until_next_day(now: NaiveDateTime) -> TimeRemaining {
    let midnight = now
        .date()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0));

    match midnight {
        Some(midnight) => TimeRemaining::from_duration(midnight - now),
        // NaiveDate::MAX has no successor
        None => TimeRemaining::from_duration(Duration::zero()),
    }
}

/// `"Hh Mm"` with at least an hour left, `"Mm Ss"` with at least a minute,
/// otherwise `"Ss"`
pub fn format_time_remaining(remaining: &TimeRemaining) -> String {
    remaining.to_string()
}
