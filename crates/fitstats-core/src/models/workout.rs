// ABOUTME: Workout record model with validating builder and derived duration helpers
// ABOUTME: Boundary validation rejects malformed records before they reach aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkoutType;
use crate::constants::heart_rate::{MAX_VALID_HR, MIN_VALID_HR};
use crate::constants::time::{MAX_WORKOUT_DURATION_SECS, SECONDS_PER_MINUTE};
use crate::errors::{StatsError, StatsResult};

/// Represents a single recorded workout session
///
/// A workout carries the timing, distance, and heart-rate summary the
/// aggregation engine consumes. Fields are private to ensure data integrity -
/// use accessor methods to read and `WorkoutBuilder` to construct new
/// instances; the builder rejects malformed records at the boundary.
///
/// # Examples
///
/// ```rust
/// use fitstats_core::models::{WorkoutBuilder, WorkoutType};
/// use chrono::{TimeZone, Utc};
/// use uuid::Uuid;
///
/// # fn main() -> fitstats_core::errors::StatsResult<()> {
/// let start = Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).single()
///     .ok_or_else(|| fitstats_core::errors::StatsError::invalid_record("start_time", "bad"))?;
/// let workout = WorkoutBuilder::new(
///     Uuid::new_v4(),
///     Uuid::new_v4(),
///     WorkoutType::Running,
///     "Morning Run",
///     start,
///     start + chrono::Duration::minutes(45),
/// )
/// .distance_km(5.2)
/// .average_heart_rate(150)
/// .build()?;
///
/// assert_eq!(workout.title(), "Morning Run");
/// assert_eq!(workout.duration_minutes(), 45);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier for the workout
    id: Uuid,
    /// Owning user; every aggregation is scoped to one owner
    user_id: Uuid,
    /// Type of workout (running, cycling, etc.)
    workout_type: WorkoutType,
    /// Human-readable title of the session
    title: String,
    /// Free-form description (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Private notes attached to the session
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    /// When the workout started (UTC)
    start_time: DateTime<Utc>,
    /// When the workout ended (UTC); never precedes the start
    end_time: DateTime<Utc>,
    /// Total distance covered in kilometers (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    /// Estimated calories burned
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<u32>,
    /// Average heart rate during the session (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
    /// Maximum heart rate reached during the session (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    max_heart_rate: Option<u32>,
}

/// Accessor methods for Workout fields
impl Workout {
    /// Returns the unique identifier for the workout
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning user's identifier
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the type of workout
    #[must_use]
    pub const fn workout_type(&self) -> &WorkoutType {
        &self.workout_type
    }

    /// Returns the human-readable title of the session
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form description (if provided)
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the private notes attached to the session
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the workout started (UTC)
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Returns when the workout ended (UTC)
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Returns the total distance covered in kilometers (if applicable)
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Returns the estimated calories burned
    #[must_use]
    pub const fn calories(&self) -> Option<u32> {
        self.calories
    }

    /// Returns the average heart rate during the session (BPM)
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Returns the maximum heart rate reached during the session (BPM)
    #[must_use]
    pub const fn max_heart_rate(&self) -> Option<u32> {
        self.max_heart_rate
    }

    /// Elapsed time between start and end
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Session duration in whole seconds
    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        self.duration().num_seconds().max(0) as u64
    }

    /// Session duration in whole minutes
    #[must_use]
    pub fn duration_minutes(&self) -> u64 {
        self.duration_seconds() / SECONDS_PER_MINUTE as u64
    }

    /// Whether `timestamp` falls within the session window (both ends inclusive)
    #[must_use]
    pub fn spans(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start_time && timestamp <= self.end_time
    }
}

impl Default for Workout {
    fn default() -> Self {
        let start = Utc::now() - Duration::hours(2);
        Self {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            workout_type: WorkoutType::Running,
            title: "Test Workout".into(),
            description: None,
            notes: None,
            start_time: start,
            end_time: start + Duration::minutes(30),
            distance_km: Some(5.0),
            calories: Some(350),
            average_heart_rate: Some(150),
            max_heart_rate: Some(180),
        }
    }
}

/// Builder for constructing Workout instances
///
/// Since Workout fields are private, use this builder to create new instances.
/// Required fields are set in `new()`, optional fields via builder methods.
/// `build()` is the validation boundary: records that violate the timing or
/// physiological constraints never reach the aggregation engine.
///
/// # Examples
///
/// ```rust
/// use fitstats_core::models::{WorkoutBuilder, WorkoutType};
/// use chrono::{Duration, Utc};
/// use uuid::Uuid;
///
/// let start = Utc::now() - Duration::hours(1);
/// let result = WorkoutBuilder::new(
///     Uuid::new_v4(),
///     Uuid::new_v4(),
///     WorkoutType::Cycling,
///     "Evening Ride",
///     start,
///     start - Duration::minutes(5), // ends before it starts
/// )
/// .build();
///
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    /// Creates a new `WorkoutBuilder` with required fields
    #[must_use]
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        workout_type: WorkoutType,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            workout: Workout {
                id,
                user_id,
                workout_type,
                title: title.into(),
                description: None,
                notes: None,
                start_time,
                end_time,
                distance_km: None,
                calories: None,
                average_heart_rate: None,
                max_heart_rate: None,
            },
        }
    }

    /// Sets the description
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.workout.description = Some(value.into());
        self
    }

    /// Sets the description (optional)
    #[must_use]
    pub fn description_opt(mut self, value: Option<String>) -> Self {
        self.workout.description = value;
        self
    }

    /// Sets the private notes
    #[must_use]
    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.workout.notes = Some(value.into());
        self
    }

    /// Sets the private notes (optional)
    #[must_use]
    pub fn notes_opt(mut self, value: Option<String>) -> Self {
        self.workout.notes = value;
        self
    }

    /// Sets the distance in kilometers
    #[must_use]
    pub const fn distance_km(mut self, value: f64) -> Self {
        self.workout.distance_km = Some(value);
        self
    }

    /// Sets the distance in kilometers (optional)
    #[must_use]
    pub const fn distance_km_opt(mut self, value: Option<f64>) -> Self {
        self.workout.distance_km = value;
        self
    }

    /// Sets the calories burned
    #[must_use]
    pub const fn calories(mut self, value: u32) -> Self {
        self.workout.calories = Some(value);
        self
    }

    /// Sets the calories burned (optional)
    #[must_use]
    pub const fn calories_opt(mut self, value: Option<u32>) -> Self {
        self.workout.calories = value;
        self
    }

    /// Sets the average heart rate
    #[must_use]
    pub const fn average_heart_rate(mut self, value: u32) -> Self {
        self.workout.average_heart_rate = Some(value);
        self
    }

    /// Sets the average heart rate (optional)
    #[must_use]
    pub const fn average_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.workout.average_heart_rate = value;
        self
    }

    /// Sets the maximum heart rate
    #[must_use]
    pub const fn max_heart_rate(mut self, value: u32) -> Self {
        self.workout.max_heart_rate = Some(value);
        self
    }

    /// Sets the maximum heart rate (optional)
    #[must_use]
    pub const fn max_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.workout.max_heart_rate = value;
        self
    }

    /// Validates and builds the `Workout`
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidRecord` naming the offending field when:
    /// - the end timestamp precedes the start timestamp
    /// - the session is longer than 24 hours
    /// - the start timestamp lies in the future
    /// - the distance is negative or not a finite number
    /// - a heart rate falls outside 30..=250 bpm
    /// - the max heart rate is below the average heart rate
    pub fn build(self) -> StatsResult<Workout> {
        let workout = self.workout;

        if workout.end_time < workout.start_time {
            return Err(StatsError::invalid_record(
                "end_time",
                "must not precede start_time",
            ));
        }
        if (workout.end_time - workout.start_time).num_seconds() > MAX_WORKOUT_DURATION_SECS {
            return Err(StatsError::invalid_record(
                "end_time",
                "session duration must not exceed 24 hours",
            ));
        }
        if workout.start_time > Utc::now() {
            return Err(StatsError::invalid_record(
                "start_time",
                "must not be in the future",
            ));
        }
        if let Some(distance) = workout.distance_km {
            if !distance.is_finite() || distance < 0.0 {
                return Err(StatsError::invalid_record(
                    "distance_km",
                    "must be a non-negative number",
                ));
            }
        }
        validate_heart_rate("average_heart_rate", workout.average_heart_rate)?;
        validate_heart_rate("max_heart_rate", workout.max_heart_rate)?;
        if let (Some(avg), Some(max)) = (workout.average_heart_rate, workout.max_heart_rate) {
            if max < avg {
                return Err(StatsError::invalid_record(
                    "max_heart_rate",
                    "must not be below average_heart_rate",
                ));
            }
        }

        Ok(workout)
    }
}

/// Rejects heart rates outside the physiologically plausible band
fn validate_heart_rate(field: &str, value: Option<u32>) -> StatsResult<()> {
    match value {
        Some(bpm) if !(MIN_VALID_HR..=MAX_VALID_HR).contains(&bpm) => Err(
            StatsError::invalid_record(field, "must be between 30 and 250 bpm"),
        ),
        _ => Ok(()),
    }
}
