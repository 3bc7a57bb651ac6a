// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Availability windows
//!
//! A [`TimeWindow`] is the interval during which a gatherable can be
//! collected at a location. The distinguished [`TimeWindow::ALWAYS`] value
//! means "no restriction" and doubles as "nothing to report".

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Errors from constructing a window
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window starts at {start} after it ends at {end}")]
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Closed interval `[start, end]` of server time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Unrestricted availability
    pub const ALWAYS: TimeWindow = TimeWindow {
        start: DateTime::<Utc>::MIN_UTC,
        end: DateTime::<Utc>::MAX_UTC,
    };

    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of `length` beginning at `start`; negative lengths collapse to an instant
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Self {
        let end = start + length.max(Duration::zero());
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn is_always(&self) -> bool {
        *self == Self::ALWAYS
    }

    /// `start <= now <= end`
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    /// `now < start`
    pub fn is_before(&self, now: DateTime<Utc>) -> bool {
        now < self.start
    }

    /// Signed time from `now` until the window opens
    pub fn until_start(&self, now: DateTime<Utc>) -> Duration {
        self.start - now
    }

    /// Signed time from `now` until the window closes
    pub fn until_end(&self, now: DateTime<Utc>) -> Duration {
        self.end - now
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::ALWAYS
    }
}

/// Render a duration for chat output, e.g. `1h 5m 3s`.
///
/// Negative durations render as zero; sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    let seconds = u64::try_from(duration.num_seconds()).unwrap_or(0);
    humantime::format_duration(std::time::Duration::from_secs(seconds)).to_string()
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
