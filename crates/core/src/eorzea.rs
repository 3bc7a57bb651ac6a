// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eorzea time and recurring node schedules
//!
//! An Eorzea hour lasts 175 real seconds, so an Eorzea day is 70 real
//! minutes. Both are aligned to the Unix epoch.

use crate::window::TimeWindow;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Real milliseconds per Eorzea hour
pub const EORZEA_HOUR_MS: i64 = 175_000;

/// Eorzea hours per Eorzea day
pub const HOURS_PER_DAY: u32 = 24;

const FULL_MASK: u32 = (1 << HOURS_PER_DAY) - 1;

/// Eorzea hour of day (0..24) at the given real time
pub fn eorzea_hour(now: DateTime<Utc>) -> u32 {
    let hours = now.timestamp_millis().div_euclid(EORZEA_HOUR_MS);
    // rem_euclid keeps this in 0..24 for pre-epoch times as well
    hours.rem_euclid(i64::from(HOURS_PER_DAY)) as u32
}

/// Real time at which the Eorzea hour containing `now` began
pub fn hour_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let ms = now.timestamp_millis();
    let offset = ms.rem_euclid(EORZEA_HOUR_MS);
    now - Duration::milliseconds(offset) - Duration::nanoseconds(i64::from(
        now.timestamp_subsec_nanos() % 1_000_000,
    ))
}

/// Daily recurring uptime of a gathering node, as a mask of Eorzea hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct UptimeSchedule {
    mask: u32,
}

impl UptimeSchedule {
    /// Up during every Eorzea hour
    pub const ALWAYS: UptimeSchedule = UptimeSchedule { mask: FULL_MASK };

    /// Build from explicit hours; values outside 0..24 are ignored
    pub fn from_hours(hours: impl IntoIterator<Item = u32>) -> Self {
        let mask = hours
            .into_iter()
            .filter(|h| *h < HOURS_PER_DAY)
            .fold(0, |mask, h| mask | (1 << h));
        Self { mask }
    }

    /// Up from `start` (inclusive) to `end` (exclusive), wrapping past midnight
    pub fn from_range(start: u32, end: u32) -> Self {
        let start = start % HOURS_PER_DAY;
        let end = end % HOURS_PER_DAY;
        if start == end {
            return Self::ALWAYS;
        }
        let mut hours = Vec::new();
        let mut hour = start;
        while hour != end {
            hours.push(hour);
            hour = (hour + 1) % HOURS_PER_DAY;
        }
        Self::from_hours(hours)
    }

    pub fn is_up(&self, hour: u32) -> bool {
        self.mask & (1 << (hour % HOURS_PER_DAY)) != 0
    }

    pub fn hours(&self) -> Vec<u32> {
        (0..HOURS_PER_DAY).filter(|h| self.is_up(*h)).collect()
    }

    /// The current uptime run if the node is up at `now`, otherwise the next one.
    ///
    /// Schedules that are never or always up have nothing to report and
    /// yield [`TimeWindow::ALWAYS`].
    pub fn next_uptime(&self, now: DateTime<Utc>) -> TimeWindow {
        if self.mask == 0 || self.mask == FULL_MASK {
            return TimeWindow::ALWAYS;
        }

        let hour = eorzea_hour(now);
        let current = hour_start(now);
        let step = Duration::milliseconds(EORZEA_HOUR_MS);

        if self.is_up(hour) {
            let back = (1..HOURS_PER_DAY)
                .take_while(|k| self.is_up(hour + HOURS_PER_DAY - k))
                .count() as i32;
            let forward = (1..HOURS_PER_DAY)
                .take_while(|j| self.is_up(hour + j))
                .count() as i32;
            let start = current - step * back;
            let end = current + step * (forward + 1);
            return TimeWindow::starting_at(start, end - start);
        }

        let wait = (1..HOURS_PER_DAY)
            .find(|j| self.is_up(hour + j))
            .unwrap_or(HOURS_PER_DAY);
        let length = (0..HOURS_PER_DAY)
            .take_while(|j| self.is_up(hour + wait + j))
            .count() as i32;
        let start = current + step * wait as i32;
        TimeWindow::starting_at(start, step * length)
    }
}

impl From<Vec<u32>> for UptimeSchedule {
    fn from(hours: Vec<u32>) -> Self {
        Self::from_hours(hours)
    }
}

impl From<UptimeSchedule> for Vec<u32> {
    fn from(schedule: UptimeSchedule) -> Self {
        schedule.hours()
    }
}

#[cfg(test)]
#[path = "eorzea_tests.rs"]
mod tests;
