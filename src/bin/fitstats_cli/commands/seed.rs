// ABOUTME: Synthetic snapshot seeder for fitstats-cli
// ABOUTME: Generates reproducible workouts and metric samples without any tracker export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration, Utc};
use fitstats::constants::heart_rate::{MAX_VALID_HR, MIN_VALID_HR};
use fitstats::models::{MetricSample, MetricSampleBuilder, Workout, WorkoutBuilder, WorkoutType};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use crate::helpers::snapshot::Snapshot;

/// Workout type configuration for snapshot generation
struct ActivityProfile {
    workout_type: WorkoutType,
    /// Weight for random selection (higher = more common)
    weight: u32,
    /// Duration range in minutes (min, max)
    duration_range: (i64, i64),
    /// Distance range in kilometers (min, max), None for gym activities
    distance_range: Option<(f64, f64)>,
    /// Average heart rate range (bpm)
    heart_rate_range: (u32, u32),
    /// Energy expenditure range (kcal)
    calorie_range: (u32, u32),
    /// Workout title templates
    titles: &'static [&'static str],
}

/// All activity profiles with realistic parameters
fn activity_profiles() -> Vec<ActivityProfile> {
    vec![
        // Running (most common)
        ActivityProfile {
            workout_type: WorkoutType::Running,
            weight: 25,
            duration_range: (20, 120),
            distance_range: Some((3.0, 25.0)),
            heart_rate_range: (140, 175),
            calorie_range: (250, 1100),
            titles: &[
                "Morning Run",
                "Easy Run",
                "Tempo Run",
                "Long Run",
                "Recovery Run",
                "Interval Session",
            ],
        },
        ActivityProfile {
            workout_type: WorkoutType::Cycling,
            weight: 20,
            duration_range: (30, 240),
            distance_range: Some((15.0, 120.0)),
            heart_rate_range: (130, 170),
            calorie_range: (400, 2000),
            titles: &[
                "Morning Ride",
                "Endurance Ride",
                "Tempo Ride",
                "Group Ride",
                "Solo Spin",
            ],
        },
        ActivityProfile {
            workout_type: WorkoutType::Swimming,
            weight: 8,
            duration_range: (20, 90),
            distance_range: Some((0.5, 5.0)),
            heart_rate_range: (120, 160),
            calorie_range: (200, 800),
            titles: &[
                "Pool Swim",
                "Lap Session",
                "Endurance Swim",
                "Drill Work",
                "Speed Set",
            ],
        },
        ActivityProfile {
            workout_type: WorkoutType::WeightTraining,
            weight: 12,
            duration_range: (30, 90),
            distance_range: None,
            heart_rate_range: (100, 140),
            calorie_range: (150, 500),
            titles: &[
                "Upper Body",
                "Leg Day",
                "Full Body Strength",
                "Push Session",
                "Pull Session",
            ],
        },
        ActivityProfile {
            workout_type: WorkoutType::Yoga,
            weight: 8,
            duration_range: (30, 75),
            distance_range: None,
            heart_rate_range: (70, 100),
            calorie_range: (80, 300),
            titles: &["Vinyasa Flow", "Morning Yoga", "Yin Session", "Power Yoga"],
        },
        ActivityProfile {
            workout_type: WorkoutType::Hiit,
            weight: 8,
            duration_range: (20, 50),
            distance_range: None,
            heart_rate_range: (145, 180),
            calorie_range: (200, 600),
            titles: &[
                "HIIT Session",
                "Circuit Training",
                "Cardio Blast",
                "Functional Fitness",
            ],
        },
        ActivityProfile {
            workout_type: WorkoutType::Walking,
            weight: 12,
            duration_range: (20, 120),
            distance_range: Some((1.5, 10.0)),
            heart_rate_range: (85, 115),
            calorie_range: (80, 450),
            titles: &[
                "Morning Walk",
                "Lunch Walk",
                "Evening Stroll",
                "City Walk",
                "Park Loop",
            ],
        },
    ]
}

/// Build weighted selection vector from activity profiles
fn build_weighted_profiles(profiles: &[ActivityProfile]) -> Vec<usize> {
    let mut weighted = Vec::new();
    for (index, profile) in profiles.iter().enumerate() {
        for _ in 0..profile.weight {
            weighted.push(index);
        }
    }
    weighted
}

/// Round to two decimal places for readable snapshot values
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate evenly spaced metric samples across one workout
fn generate_samples(
    rng: &mut StdRng,
    workout: &Workout,
    per_workout: u32,
) -> Result<Vec<MetricSample>> {
    let duration_secs = workout.duration_seconds();
    if per_workout == 0 || duration_secs == 0 {
        return Ok(Vec::new());
    }

    let avg_hr = workout.average_heart_rate().unwrap_or(120);
    let max_hr = workout.max_heart_rate().unwrap_or(avg_hr + 20);
    let total_distance = workout.distance_km();
    let step = (duration_secs / u64::from(per_workout)).max(1);

    let mut samples = Vec::with_capacity(per_workout as usize);
    for index in 0..u64::from(per_workout) {
        let offset = index * step;
        if offset > duration_secs {
            break;
        }
        #[allow(clippy::cast_possible_wrap)]
        let offset_secs = offset as i64; // bounded by the 24h session cap
        let timestamp = workout.start_time() + Duration::seconds(offset_secs);

        let heart_rate = rng
            .gen_range(avg_hr.saturating_sub(15)..=max_hr)
            .clamp(MIN_VALID_HR, MAX_VALID_HR);
        let mut builder = MetricSampleBuilder::new(Uuid::new_v4(), workout.id(), timestamp)
            .heart_rate(heart_rate);

        if let Some(total) = total_distance {
            let progress = offset as f64 / duration_secs as f64;
            let avg_speed = total / (duration_secs as f64 / 3600.0);
            builder = builder
                .distance_km(round2(total * progress))
                .speed_kmh(round2(avg_speed * rng.gen_range(0.85..1.15)));
        }

        samples.push(builder.build()?);
    }
    Ok(samples)
}

/// Generate a synthetic snapshot and write it to `out`
pub fn run(
    out: &Path,
    user: Option<Uuid>,
    count: u32,
    days: u32,
    samples_per_workout: u32,
    seed: u64,
) -> Result<()> {
    let user_id = user.unwrap_or_else(Uuid::new_v4);

    info!("Fitstats snapshot seeder");
    info!("   User ID: {}", user_id);
    info!("   Count: {} workouts", count);
    info!("   Days: {} days of history", days);
    info!("   Samples: {} per workout", samples_per_workout);
    info!("   Random seed: {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let profiles = activity_profiles();
    let weighted = build_weighted_profiles(&profiles);

    let now = Utc::now();
    let mut workouts = Vec::with_capacity(count as usize);
    let mut samples = Vec::new();
    let mut by_type: HashMap<String, u32> = HashMap::new();

    for i in 0..count {
        let profile = &profiles[*weighted.choose(&mut rng).unwrap_or(&0)];

        // Random start within the history window, always in the past
        let days_ago = rng.gen_range(0..days.max(1));
        let hour = rng.gen_range(5..21);
        let minute = rng.gen_range(0..60);
        let start = now - Duration::days(i64::from(days_ago))
            - Duration::hours(24 - i64::from(hour))
            + Duration::minutes(i64::from(minute));

        let duration_mins = rng.gen_range(profile.duration_range.0..=profile.duration_range.1);
        let distance = profile
            .distance_range
            .map(|(min, max)| round2(rng.gen_range(min..=max)));
        let avg_hr = rng.gen_range(profile.heart_rate_range.0..=profile.heart_rate_range.1);
        let max_hr = (avg_hr + rng.gen_range(10..30)).min(MAX_VALID_HR);
        let calories = rng.gen_range(profile.calorie_range.0..=profile.calorie_range.1);

        let title = format!(
            "{} #{}",
            profile.titles.choose(&mut rng).unwrap_or(&"Workout"),
            i + 1
        );

        let workout = WorkoutBuilder::new(
            Uuid::new_v4(),
            user_id,
            profile.workout_type.clone(),
            title,
            start,
            start + Duration::minutes(duration_mins),
        )
        .distance_km_opt(distance)
        .calories(calories)
        .average_heart_rate(avg_hr)
        .max_heart_rate(max_hr)
        .build()?;

        samples.extend(generate_samples(&mut rng, &workout, samples_per_workout)?);
        *by_type
            .entry(workout.workout_type().wire_name().to_owned())
            .or_insert(0) += 1;
        workouts.push(workout);
    }

    let snapshot = Snapshot {
        user_id,
        workouts,
        samples,
    };
    snapshot.save(out)?;

    info!(
        "Created {} workouts with {} samples",
        count,
        snapshot.samples.len()
    );
    info!("Workout breakdown:");
    let mut sorted_types: Vec<_> = by_type.iter().collect();
    sorted_types.sort_by(|a, b| b.1.cmp(a.1));
    for (workout_type, n) in sorted_types {
        info!("   {}: {}", workout_type, n);
    }
    info!("Snapshot written to {}", out.display());

    Ok(())
}
