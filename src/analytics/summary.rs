// ABOUTME: Period-bucketed workout summaries for one user
// ABOUTME: Groups records by bucket start date and aggregates count, duration, distance, calories, heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Bucketed workout summaries
//!
//! Groups a user's workouts into calendar buckets and aggregates each bucket
//! independently. Buckets with no workouts are omitted rather than emitted as
//! zeros, and results are sorted by bucket start date ascending.

use super::{scoped_workouts, DateRange, Period};
use crate::errors::StatsResult;
use crate::models::Workout;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Operation name used in parameter errors and log records
pub const OPERATION: &str = "workout_summary";

/// Aggregated statistics for one calendar bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// First calendar date of the bucket
    pub bucket: NaiveDate,
    /// Display label, e.g. `2024-01-15`, `2024-W03`, or `2024-01`
    pub label: String,
    /// Number of workouts starting in this bucket
    pub workout_count: u32,
    /// Summed session durations in seconds
    pub total_duration_seconds: u64,
    /// Summed distance in kilometers, treating absent distances as zero
    pub total_distance_km: f64,
    /// Summed energy expenditure in kilocalories
    pub total_calories: u64,
    /// Mean of the per-workout average heart rates that were recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<f64>,
    /// Workout count per activity type wire name
    pub workouts_by_type: HashMap<String, u32>,
}

/// Running aggregate for one bucket while records stream in
#[derive(Default)]
struct BucketAccum {
    workouts: u32,
    duration_seconds: u64,
    distance_km: f64,
    calories: u64,
    heart_rate_sum: u64,
    heart_rate_count: u32,
    by_type: HashMap<String, u32>,
}

impl BucketAccum {
    fn add(&mut self, workout: &Workout) {
        self.workouts += 1;
        self.duration_seconds += workout.duration_seconds();
        self.distance_km += workout.distance_km().unwrap_or(0.0);
        self.calories += u64::from(workout.calories().unwrap_or(0));
        if let Some(avg) = workout.average_heart_rate() {
            self.heart_rate_sum += u64::from(avg);
            self.heart_rate_count += 1;
        }
        *self
            .by_type
            .entry(workout.workout_type().wire_name().to_owned())
            .or_insert(0) += 1;
    }

    fn finalize(self, bucket: NaiveDate, period: Period) -> BucketSummary {
        let average_heart_rate = (self.heart_rate_count > 0)
            .then(|| self.heart_rate_sum as f64 / f64::from(self.heart_rate_count));
        BucketSummary {
            bucket,
            label: period.label(bucket),
            workout_count: self.workouts,
            total_duration_seconds: self.duration_seconds,
            total_distance_km: self.distance_km,
            total_calories: self.calories,
            average_heart_rate,
            workouts_by_type: self.by_type,
        }
    }
}

/// Summarize one user's workouts per calendar bucket
///
/// Workouts are assigned to the bucket containing their start timestamp.
/// An empty result is a valid answer, not an error.
///
/// # Errors
///
/// Returns [`crate::errors::StatsError::InvalidParameter`] when `range` has
/// its start after its end.
pub fn summarize(
    user_id: Uuid,
    workouts: &[Workout],
    period: Period,
    range: &DateRange,
) -> StatsResult<Vec<BucketSummary>> {
    summarize_for(OPERATION, user_id, workouts, period, range)
}

/// Same bucketing pass, attributed to the calling operation in errors and
/// log records. Progress and chart series are derived from these buckets.
pub(crate) fn summarize_for(
    operation: &'static str,
    user_id: Uuid,
    workouts: &[Workout],
    period: Period,
    range: &DateRange,
) -> StatsResult<Vec<BucketSummary>> {
    range.validate(operation)?;

    let mut buckets: HashMap<NaiveDate, BucketAccum> = HashMap::new();
    for workout in scoped_workouts(operation, user_id, workouts, range) {
        let key = period.bucket_start(workout.start_time());
        buckets.entry(key).or_default().add(workout);
    }

    let mut summaries: Vec<BucketSummary> = buckets
        .into_iter()
        .map(|(bucket, accum)| accum.finalize(bucket, period))
        .collect();
    summaries.sort_unstable_by_key(|summary| summary.bucket);

    debug!(
        operation = operation,
        period = period.as_str(),
        buckets = summaries.len(),
        "bucketed workout summary computed"
    );

    Ok(summaries)
}
