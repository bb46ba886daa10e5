// ABOUTME: Integration tests for period bucketing and date-range scoping
// ABOUTME: Validates truncation to day, ISO week, and month boundaries plus label rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Period Bucketing Tests
//!
//! Covers timestamp truncation to calendar buckets, label formats, and the
//! inclusive date-range window used to scope queries.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use fitstats::analytics::{DateRange, Period};
use fitstats::errors::StatsError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_day_truncation_ignores_time_of_day() {
    let early = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 1).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
    assert_eq!(Period::Day.bucket_start(early), date(2024, 1, 15));
    assert_eq!(Period::Day.bucket_start(late), date(2024, 1, 15));
}

#[test]
fn test_week_truncation_for_every_weekday() {
    // 2024-01-15 is a Monday; the whole ISO week maps onto it
    for day in 15..=21 {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        assert_eq!(Period::Week.bucket_start(ts), date(2024, 1, 15));
    }
    // The next Monday starts a new bucket
    let next = Utc.with_ymd_and_hms(2024, 1, 22, 0, 0, 0).unwrap();
    assert_eq!(Period::Week.bucket_start(next), date(2024, 1, 22));
}

#[test]
fn test_week_truncation_crosses_month_boundary() {
    // 2024-03-01 is a Friday; its week starts Monday 2024-02-26
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    assert_eq!(Period::Week.bucket_start(ts), date(2024, 2, 26));
}

#[test]
fn test_month_truncation_to_first_day() {
    let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
    assert_eq!(Period::Month.bucket_start(ts), date(2024, 12, 1));
}

#[test]
fn test_labels_match_expected_formats() {
    assert_eq!(Period::Day.label(date(2024, 1, 15)), "2024-01-15");
    assert_eq!(Period::Week.label(date(2024, 1, 15)), "2024-W03");
    assert_eq!(Period::Month.label(date(2024, 1, 1)), "2024-01");
}

#[test]
fn test_week_label_follows_iso_week_year_at_new_year() {
    // Monday 2024-12-30 belongs to ISO week 1 of 2025
    assert_eq!(Period::Week.label(date(2024, 12, 30)), "2025-W01");
    // Monday 2026-12-28 belongs to ISO week 53 of 2026
    assert_eq!(Period::Week.label(date(2026, 12, 28)), "2026-W53");
}

#[test]
fn test_period_parsing_round_trips_wire_names() {
    for period in [Period::Day, Period::Week, Period::Month] {
        let parsed = Period::from_param("workout_summary", period.as_str()).unwrap();
        assert_eq!(parsed, period);
    }
}

#[test]
fn test_unknown_period_reports_operation_and_field() {
    let err = Period::from_param("chart_data", "quarter").unwrap_err();
    match err {
        StatsError::InvalidParameter {
            operation,
            parameter,
            reason,
        } => {
            assert_eq!(operation, "chart_data");
            assert_eq!(parameter, "period");
            assert!(reason.contains("quarter"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_half_open_ranges_clip_one_side_only() {
    let from_only = DateRange::new(Some(date(2024, 6, 1)), None);
    assert!(!from_only.contains(date(2024, 5, 31)));
    assert!(from_only.contains(date(2030, 1, 1)));

    let to_only = DateRange::new(None, Some(date(2024, 6, 30)));
    assert!(to_only.contains(date(1990, 1, 1)));
    assert!(!to_only.contains(date(2024, 7, 1)));
}

#[test]
fn test_single_day_range_is_valid() {
    let range = DateRange::new(Some(date(2024, 6, 15)), Some(date(2024, 6, 15)));
    assert!(range.validate("workout_summary").is_ok());
    assert!(range.contains(date(2024, 6, 15)));
    assert!(!range.contains(date(2024, 6, 16)));
}

#[test]
fn test_inverted_range_is_rejected_with_field_name() {
    let range = DateRange::new(Some(date(2024, 6, 16)), Some(date(2024, 6, 15)));
    let err = range.validate("workout_progress").unwrap_err();
    match err {
        StatsError::InvalidParameter {
            operation,
            parameter,
            ..
        } => {
            assert_eq!(operation, "workout_progress");
            assert_eq!(parameter, "date_range");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
