// ABOUTME: Benchmark test fixtures for generating realistic workout data
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Benchmark test fixtures for generating realistic workout data.
//!
//! Provides deterministic data generation for reproducible performance
//! measurements. All values are derived from the record index so repeated
//! runs measure the same inputs.

use chrono::{DateTime, Duration, Utc};
use fitstats::models::{MetricSample, MetricSampleBuilder, Workout, WorkoutBuilder, WorkoutType};
use uuid::Uuid;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// Small dataset (10 workouts) - quick benchmarks
    Small,
    /// Medium dataset (100 workouts) - typical user
    Medium,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

/// Fixed owner id so query benchmarks and fixtures agree
#[must_use]
pub const fn bench_user_id() -> Uuid {
    Uuid::from_u128(0xF17_57A75)
}

const fn determine_workout_type(index: usize) -> WorkoutType {
    match index % 4 {
        0 => WorkoutType::Running,
        1 => WorkoutType::Cycling,
        2 => WorkoutType::Swimming,
        _ => WorkoutType::Walking,
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn calculate_duration(index: usize) -> i64 {
    let base_duration = 1800_i64; // 30 minutes base
    let duration_variation = ((index * 137) % 3600) as i64;
    base_duration + duration_variation
}

#[allow(clippy::cast_precision_loss)]
const fn calculate_distance_km(index: usize) -> f64 {
    let base_distance = 5.0; // 5km base
    let distance_variation = ((index * 251) % 10000) as f64;
    base_distance + distance_variation / 1000.0
}

#[allow(clippy::cast_possible_truncation)]
const fn calculate_heart_rate(index: usize) -> u32 {
    let base_hr = 130_u32;
    let hr_variation = ((index * 17) % 40) as u32;
    base_hr + hr_variation
}

/// Generate a single workout for benchmarking
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_workout(index: usize, base_date: DateTime<Utc>) -> Workout {
    let workout_type = determine_workout_type(index);
    let duration_seconds = calculate_duration(index);
    let avg_hr = calculate_heart_rate(index);
    let days_ago = (index * 2) as i64;
    let start = base_date - Duration::days(days_ago) - Duration::seconds(duration_seconds);

    WorkoutBuilder::new(
        Uuid::from_u128(index as u128 + 1),
        bench_user_id(),
        workout_type,
        format!("Benchmark Workout {index}"),
        start,
        start + Duration::seconds(duration_seconds),
    )
    .distance_km(calculate_distance_km(index))
    .calories(((duration_seconds / 60) * 10) as u32)
    .average_heart_rate(avg_hr)
    .max_heart_rate(avg_hr + 25)
    .build()
    .unwrap()
}

/// Generate a batch of deterministic workouts
#[must_use]
pub fn generate_workouts(batch_size: WorkoutBatchSize) -> Vec<Workout> {
    generate_workouts_custom(batch_size.count())
}

/// Generate a custom number of deterministic workouts
#[must_use]
pub fn generate_workouts_custom(count: usize) -> Vec<Workout> {
    let base_date = Utc::now();
    (0..count)
        .map(|index| generate_workout(index, base_date))
        .collect()
}

/// Generate one workout with `count` evenly spaced heart-rate samples
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn generate_sampled_workout(count: usize) -> (Workout, Vec<MetricSample>) {
    let workout = generate_workout(0, Utc::now());
    let duration_seconds = workout.duration_seconds() as i64;

    let samples = (0..count)
        .map(|index| {
            let offset = (index as i64) % duration_seconds.max(1);
            let heart_rate = 110 + ((index * 13) % 70) as u32;
            MetricSampleBuilder::new(
                Uuid::from_u128(0x5A00_0000 + index as u128),
                workout.id(),
                workout.start_time() + Duration::seconds(offset),
            )
            .heart_rate(heart_rate)
            .build()
            .unwrap()
        })
        .collect();

    (workout, samples)
}
