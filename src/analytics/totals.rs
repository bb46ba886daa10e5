// ABOUTME: Whole-history rollups for one user's workouts
// ABOUTME: Aggregates totals, averages, and per-user bests over an optional date window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Overall totals
//!
//! A single un-bucketed rollup across everything the user recorded in the
//! window: totals, the mean of recorded average heart rates, and bests
//! (highest max heart rate, longest distance, longest duration).

use super::{scoped_workouts, DateRange};
use crate::errors::StatsResult;
use crate::models::Workout;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Operation name used in parameter errors and log records
pub const OPERATION: &str = "workout_totals";

/// Whole-history aggregate for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    /// Number of workouts in the window
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
    /// Highest recorded max heart rate across the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_max_heart_rate: Option<u32>,
    /// Longest single-workout distance in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_distance_km: Option<f64>,
    /// Longest single-workout duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_duration_seconds: Option<u64>,
    /// Workout count per activity type wire name
    pub workouts_by_type: HashMap<String, u32>,
}

/// Roll up one user's workouts into a single overall summary
///
/// A window with no workouts yields zeroed totals with every best unset.
///
/// # Errors
///
/// Returns [`crate::errors::StatsError::InvalidParameter`] when `range` has
/// its start after its end.
pub fn overall_totals(
    user_id: Uuid,
    workouts: &[Workout],
    range: &DateRange,
) -> StatsResult<TotalsSummary> {
    range.validate(OPERATION)?;

    let mut totals = TotalsSummary::default();
    let mut heart_rate_sum = 0u64;
    let mut heart_rate_count = 0u32;

    for workout in scoped_workouts(OPERATION, user_id, workouts, range) {
        totals.workout_count += 1;
        totals.total_calories += u64::from(workout.calories().unwrap_or(0));

        let duration = workout.duration_seconds();
        totals.total_duration_seconds += duration;
        totals.longest_duration_seconds = Some(
            totals
                .longest_duration_seconds
                .map_or(duration, |best| best.max(duration)),
        );

        if let Some(distance) = workout.distance_km() {
            totals.total_distance_km += distance;
            totals.longest_distance_km = Some(
                totals
                    .longest_distance_km
                    .map_or(distance, |best| best.max(distance)),
            );
        }

        if let Some(avg) = workout.average_heart_rate() {
            heart_rate_sum += u64::from(avg);
            heart_rate_count += 1;
        }
        if let Some(max) = workout.max_heart_rate() {
            totals.highest_max_heart_rate = Some(
                totals
                    .highest_max_heart_rate
                    .map_or(max, |best| best.max(max)),
            );
        }

        *totals
            .workouts_by_type
            .entry(workout.workout_type().wire_name().to_owned())
            .or_insert(0) += 1;
    }

    totals.average_heart_rate =
        (heart_rate_count > 0).then(|| heart_rate_sum as f64 / f64::from(heart_rate_count));

    debug!(
        operation = OPERATION,
        workouts = totals.workout_count,
        "overall totals computed"
    );

    Ok(totals)
}
