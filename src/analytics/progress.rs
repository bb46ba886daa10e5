// ABOUTME: Cumulative progress series across chronological workout buckets
// ABOUTME: Produces running totals that never decrease from one bucket to the next
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Cumulative progress tracking
//!
//! Buckets workouts exactly like the summary operation, then folds the
//! buckets in chronological order into running totals. Every series value is
//! monotonically non-decreasing because each point adds a non-negative
//! bucket aggregate to its predecessor.

use super::period::{DateRange, Period};
use super::summary;
use crate::errors::StatsResult;
use crate::models::Workout;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operation name used in parameter errors and log records
pub const OPERATION: &str = "workout_progress";

/// Running totals up to and including one calendar bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// First calendar date of the bucket
    pub bucket: NaiveDate,
    /// Display label matching the summary operation's labels
    pub label: String,
    /// Workouts recorded up to this bucket
    pub cumulative_workouts: u32,
    /// Seconds of session time accumulated up to this bucket
    pub cumulative_duration_seconds: u64,
    /// Kilometers accumulated up to this bucket
    pub cumulative_distance_km: f64,
    /// Kilocalories accumulated up to this bucket
    pub cumulative_calories: u64,
}

/// Compute a user's cumulative progress per calendar bucket
///
/// Points appear only for buckets that contain workouts; the totals still
/// carry everything accumulated before each point.
///
/// # Errors
///
/// Returns [`crate::errors::StatsError::InvalidParameter`] when `range` has
/// its start after its end.
pub fn cumulative_progress(
    user_id: Uuid,
    workouts: &[Workout],
    period: Period,
    range: &DateRange,
) -> StatsResult<Vec<ProgressPoint>> {
    let buckets = summary::summarize_for(OPERATION, user_id, workouts, period, range)?;

    let mut workouts_so_far = 0u32;
    let mut duration_so_far = 0u64;
    let mut distance_so_far = 0f64;
    let mut calories_so_far = 0u64;

    let points = buckets
        .into_iter()
        .map(|bucket| {
            workouts_so_far += bucket.workout_count;
            duration_so_far += bucket.total_duration_seconds;
            distance_so_far += bucket.total_distance_km;
            calories_so_far += bucket.total_calories;
            ProgressPoint {
                bucket: bucket.bucket,
                label: bucket.label,
                cumulative_workouts: workouts_so_far,
                cumulative_duration_seconds: duration_so_far,
                cumulative_distance_km: distance_so_far,
                cumulative_calories: calories_so_far,
            }
        })
        .collect();

    Ok(points)
}
