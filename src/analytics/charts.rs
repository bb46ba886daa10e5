// ABOUTME: Chart-ready series extraction from bucketed workout summaries
// ABOUTME: Produces aligned label and value arrays for one metric over a period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Chart data series
//!
//! Projects bucketed summaries onto a single requested metric, producing a
//! label array and a value array aligned by index so a plotting layer can
//! consume them directly. Duration charts are reported in minutes; heart
//! rate buckets with no recorded data chart as zero so the series stays
//! aligned with its labels.

use super::period::{DateRange, Period};
use super::summary::{self, BucketSummary};
use crate::constants::time::SECONDS_PER_MINUTE_F64;
use crate::errors::{StatsError, StatsResult};
use crate::models::Workout;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operation name used in parameter errors and log records
pub const OPERATION: &str = "chart_data";

/// Metric a chart series can be charted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    /// Total distance per bucket in kilometers
    Distance,
    /// Total energy expenditure per bucket in kilocalories
    Calories,
    /// Total session time per bucket in minutes
    Duration,
    /// Mean recorded average heart rate per bucket in bpm
    HeartRate,
}

impl ChartMetric {
    /// Parse a metric request parameter
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] naming the `metric` field when
    /// the value is not one of `distance`, `calories`, `duration`, or
    /// `heart_rate`.
    pub fn from_param(operation: &str, value: &str) -> StatsResult<Self> {
        match value {
            "distance" => Ok(Self::Distance),
            "calories" => Ok(Self::Calories),
            "duration" => Ok(Self::Duration),
            "heart_rate" => Ok(Self::HeartRate),
            other => Err(StatsError::invalid_parameter(
                operation,
                "metric",
                format!(
                    "unrecognized metric '{other}', expected distance, calories, duration, or heart_rate"
                ),
            )),
        }
    }

    /// Wire name of this metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::Duration => "duration",
            Self::HeartRate => "heart_rate",
        }
    }

    /// Unit the series values are reported in
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Distance => "km",
            Self::Calories => "kcal",
            Self::Duration => "min",
            Self::HeartRate => "bpm",
        }
    }

    /// Project one bucket summary onto this metric
    fn bucket_value(self, bucket: &BucketSummary) -> f64 {
        match self {
            Self::Distance => bucket.total_distance_km,
            Self::Calories => bucket.total_calories as f64,
            Self::Duration => bucket.total_duration_seconds as f64 / SECONDS_PER_MINUTE_F64,
            Self::HeartRate => bucket.average_heart_rate.unwrap_or(0.0),
        }
    }
}

/// One metric charted over calendar buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Metric the values measure
    pub metric: ChartMetric,
    /// Unit of every value in the series
    pub unit: String,
    /// Bucket labels, index-aligned with `values`
    pub labels: Vec<String>,
    /// Metric values, index-aligned with `labels`
    pub values: Vec<f64>,
}

/// Chart one metric of a user's workouts over calendar buckets
///
/// The returned label and value arrays always have equal length.
///
/// # Errors
///
/// Returns [`StatsError::InvalidParameter`] when `range` has its start after
/// its end.
pub fn chart_series(
    user_id: Uuid,
    workouts: &[Workout],
    metric: ChartMetric,
    period: Period,
    range: &DateRange,
) -> StatsResult<ChartSeries> {
    let buckets = summary::summarize_for(OPERATION, user_id, workouts, period, range)?;

    let mut labels = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        values.push(metric.bucket_value(&bucket));
        labels.push(bucket.label);
    }

    Ok(ChartSeries {
        metric,
        unit: metric.unit().to_owned(),
        labels,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WorkoutBuilder, WorkoutType};
    use chrono::{Duration, TimeZone, Utc};

    fn swim(user_id: Uuid, day: u32, minutes: i64, distance: f64) -> Workout {
        let start = Utc.with_ymd_and_hms(2024, 6, day, 6, 30, 0).unwrap();
        WorkoutBuilder::new(
            Uuid::new_v4(),
            user_id,
            WorkoutType::Swimming,
            "Pool session",
            start,
            start + Duration::minutes(minutes),
        )
        .distance_km(distance)
        .build()
        .unwrap()
    }

    #[test]
    fn test_labels_and_values_stay_aligned() {
        let user_id = Uuid::new_v4();
        let workouts = vec![swim(user_id, 3, 45, 2.0), swim(user_id, 7, 30, 1.5)];
        let series = chart_series(
            user_id,
            &workouts,
            ChartMetric::Distance,
            Period::Day,
            &DateRange::default(),
        )
        .unwrap();
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.labels, vec!["2024-06-03", "2024-06-07"]);
        assert!((series.values[0] - 2.0).abs() < f64::EPSILON);
        assert_eq!(series.unit, "km");
    }

    #[test]
    fn test_duration_series_reports_minutes() {
        let user_id = Uuid::new_v4();
        let workouts = vec![swim(user_id, 3, 45, 2.0)];
        let series = chart_series(
            user_id,
            &workouts,
            ChartMetric::Duration,
            Period::Day,
            &DateRange::default(),
        )
        .unwrap();
        assert!((series.values[0] - 45.0).abs() < f64::EPSILON);
        assert_eq!(series.unit, "min");
    }

    #[test]
    fn test_heart_rate_series_charts_zero_when_unrecorded() {
        let user_id = Uuid::new_v4();
        let workouts = vec![swim(user_id, 3, 45, 2.0)];
        let series = chart_series(
            user_id,
            &workouts,
            ChartMetric::HeartRate,
            Period::Day,
            &DateRange::default(),
        )
        .unwrap();
        assert_eq!(series.values, vec![0.0]);
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let err = ChartMetric::from_param(OPERATION, "cadence").unwrap_err();
        match err {
            StatsError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "metric"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
