//! Time duration formatting utilities for user-friendly display.
//!
//! Converts raw elapsed-seconds counts into an hours/minutes/seconds
//! breakdown and renders `chrono::Duration` values as "HH:MM" strings for
//! tables and status messages. All conversions clamp negative inputs to
//! zero; time only moves forward in this application.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An elapsed amount of worked time broken down for display.
///
/// Always derived from a raw seconds count, never persisted. `minutes` and
/// `seconds` stay within `[0, 59]`; `hours` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWorked {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeWorked {
    pub const ZERO: TimeWorked = TimeWorked {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Breaks a seconds count into `{hours, minutes, seconds}` by floor
    /// division. Negative inputs are treated as zero.
    pub fn from_seconds(seconds_worked: i64) -> Self {
        let total = seconds_worked.max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for TimeWorked {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Represents a formatted time-based event for display purposes.
///
/// Holds pre-formatted strings so table rendering and serialization need no
/// further conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEvent {
    /// Sequential number within the displayed list.
    pub id: i32,
    /// Formatted start time, e.g. "09:00:00".
    pub start: String,
    /// Formatted end time, or "-" when the interval is ongoing.
    pub end: String,
    /// Formatted duration, or "--:--:--" when it cannot be determined.
    pub duration: String,
}

/// Formats a `chrono::Duration` into a "HH:MM" string.
///
/// Negative durations are displayed as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
