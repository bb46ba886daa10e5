// ABOUTME: Time-period bucketing for workout aggregation queries
// ABOUTME: Parses period parameters, truncates timestamps to bucket starts, renders labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Period bucketing and date-range scoping
//!
//! A [`Period`] maps each workout start timestamp to the first calendar date
//! of its bucket. Weeks follow ISO 8601 and start on Monday; months start on
//! the first of the month. A [`DateRange`] optionally narrows a query to
//! workouts starting within an inclusive date window.

use crate::errors::{StatsError, StatsResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Aggregation granularity accepted by the bucketed operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per calendar date
    Day,
    /// One bucket per ISO week, keyed by its Monday
    Week,
    /// One bucket per calendar month, keyed by its first day
    Month,
}

impl Period {
    /// Parse a period request parameter
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] naming the `period` field when
    /// the value is not one of `day`, `week`, or `month`.
    pub fn from_param(operation: &str, value: &str) -> StatsResult<Self> {
        match value {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(StatsError::invalid_parameter(
                operation,
                "period",
                format!("unrecognized period '{other}', expected day, week, or month"),
            )),
        }
    }

    /// Wire name of this period
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Truncate a timestamp to the first calendar date of its bucket
    #[must_use]
    pub fn bucket_start(self, timestamp: DateTime<Utc>) -> NaiveDate {
        let date = timestamp.date_naive();
        match self {
            Self::Day => date,
            Self::Week => date - Duration::days(i64::from(date.weekday().num_days_from_monday())),
            Self::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Render the display label for a bucket key produced by
    /// [`Self::bucket_start`]
    #[must_use]
    pub fn label(self, bucket: NaiveDate) -> String {
        match self {
            Self::Day => bucket.format("%Y-%m-%d").to_string(),
            Self::Week => {
                let iso = bucket.iso_week();
                format!("{}-W{:02}", iso.year(), iso.week())
            }
            Self::Month => format!("{:04}-{:02}", bucket.year(), bucket.month()),
        }
    }
}

/// Inclusive date window scoping a query, open on either end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from optional endpoints
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// First date admitted, if bounded below
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Last date admitted, if bounded above
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Reject inverted ranges before any aggregation work happens
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] naming the `date_range` field
    /// when both endpoints are set and start is after end.
    pub fn validate(&self, operation: &str) -> StatsResult<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(StatsError::invalid_parameter(
                    operation,
                    "date_range",
                    format!("start {start} is after end {end}"),
                ));
            }
        }
        Ok(())
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}
