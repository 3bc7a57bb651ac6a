// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use yare::parameterized;

/// Real time at Eorzea `day`, `hour`, plus `offset_ms` into that hour
fn eorzea(day: i64, hour: i64, offset_ms: i64) -> DateTime<Utc> {
    let ms = (day * 24 + hour) * EORZEA_HOUR_MS + offset_ms;
    Utc.timestamp_millis_opt(ms).unwrap()
}

#[parameterized(
    midnight = { 0, 0 },
    morning = { 8, 0 },
    late_in_hour = { 13, 174_999 },
    last_hour = { 23, 1 },
)]
fn eorzea_hour_tracks_real_time(hour: i64, offset_ms: i64) {
    let now = eorzea(20_000, hour, offset_ms);
    assert_eq!(eorzea_hour(now), hour as u32);
    assert_eq!(hour_start(now), eorzea(20_000, hour, 0));
}

#[test]
fn from_range_wraps_midnight() {
    let schedule = UptimeSchedule::from_range(22, 2);
    assert_eq!(schedule.hours(), vec![0, 1, 22, 23]);
}

#[test]
fn from_hours_ignores_out_of_range() {
    let schedule = UptimeSchedule::from_hours([3, 24, 99]);
    assert_eq!(schedule.hours(), vec![3]);
}

#[test]
fn empty_and_full_schedules_report_always() {
    let now = eorzea(100, 5, 0);
    assert!(UptimeSchedule::from_hours(Vec::new()).next_uptime(now).is_always());
    assert!(UptimeSchedule::ALWAYS.next_uptime(now).is_always());
    assert_eq!(UptimeSchedule::from_range(4, 4), UptimeSchedule::ALWAYS);
}

#[test]
fn next_uptime_inside_run_covers_whole_run() {
    // Up 2:00 - 6:00, now is 4:30
    let schedule = UptimeSchedule::from_range(2, 6);
    let now = eorzea(100, 4, EORZEA_HOUR_MS / 2);

    let window = schedule.next_uptime(now);

    assert_eq!(window.start(), eorzea(100, 2, 0));
    assert_eq!(window.end(), eorzea(100, 6, 0));
    assert!(window.contains(now));
}

#[test]
fn next_uptime_before_run_points_at_next_run() {
    // Up 8:00 - 10:00, now is 3:10
    let schedule = UptimeSchedule::from_range(8, 10);
    let now = eorzea(100, 3, 10_000);

    let window = schedule.next_uptime(now);

    assert!(window.is_before(now));
    assert_eq!(window.start(), eorzea(100, 8, 0));
    assert_eq!(window.end(), eorzea(100, 10, 0));
}

#[test]
fn next_uptime_after_run_rolls_to_next_day() {
    // Up 1:00 - 3:00, now is 20:00
    let schedule = UptimeSchedule::from_range(1, 3);
    let now = eorzea(100, 20, 0);

    let window = schedule.next_uptime(now);

    assert_eq!(window.start(), eorzea(101, 1, 0));
    assert_eq!(window.end(), eorzea(101, 3, 0));
}

#[test]
fn next_uptime_run_spanning_midnight() {
    // Up 22:00 - 2:00, now is 0:30
    let schedule = UptimeSchedule::from_range(22, 2);
    let now = eorzea(100, 0, EORZEA_HOUR_MS / 2);

    let window = schedule.next_uptime(now);

    assert_eq!(window.start(), eorzea(99, 22, 0));
    assert_eq!(window.end(), eorzea(100, 2, 0));
}

#[test]
fn schedule_deserializes_from_hour_list() {
    #[derive(serde::Deserialize)]
    struct Node {
        schedule: UptimeSchedule,
    }

    let node: Node = toml::from_str("schedule = [2, 3, 14]").unwrap();
    assert_eq!(node.schedule, UptimeSchedule::from_hours([2, 3, 14]));
}
