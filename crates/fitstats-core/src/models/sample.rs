// ABOUTME: Per-timestamp metric sample model attached to a workout session
// ABOUTME: Validating builder enforces metric presence and physiological bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Workout;
use crate::constants::heart_rate::{MAX_VALID_HR, MIN_VALID_HR};
use crate::errors::{StatsError, StatsResult};

/// A single time-stamped measurement recorded during a workout
///
/// Samples are many-per-workout and consumed in timestamp order by the zone
/// analysis. Every metric field is optional, but a sample must carry at least
/// one value; a row of nothing-but-a-timestamp is rejected at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    /// Unique identifier for the sample
    id: Uuid,
    /// Workout this sample belongs to
    workout_id: Uuid,
    /// When the measurement was taken (UTC); falls within the session window
    timestamp: DateTime<Utc>,
    /// Heart rate at this instant (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    heart_rate: Option<u32>,
    /// Instantaneous speed in km/h
    #[serde(skip_serializing_if = "Option::is_none")]
    speed_kmh: Option<f64>,
    /// Cumulative distance covered so far in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    /// Cadence (RPM or steps/min)
    #[serde(skip_serializing_if = "Option::is_none")]
    cadence: Option<u32>,
    /// Power output in watts
    #[serde(skip_serializing_if = "Option::is_none")]
    power_watts: Option<u32>,
    /// Elevation in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation_m: Option<f64>,
}

/// Accessor methods for `MetricSample` fields
impl MetricSample {
    /// Returns the unique identifier for the sample
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the identifier of the workout this sample belongs to
    #[must_use]
    pub const fn workout_id(&self) -> Uuid {
        self.workout_id
    }

    /// Returns when the measurement was taken (UTC)
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the heart rate at this instant (BPM)
    #[must_use]
    pub const fn heart_rate(&self) -> Option<u32> {
        self.heart_rate
    }

    /// Returns the instantaneous speed in km/h
    #[must_use]
    pub const fn speed_kmh(&self) -> Option<f64> {
        self.speed_kmh
    }

    /// Returns the cumulative distance covered so far in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Returns the cadence (RPM or steps/min)
    #[must_use]
    pub const fn cadence(&self) -> Option<u32> {
        self.cadence
    }

    /// Returns the power output in watts
    #[must_use]
    pub const fn power_watts(&self) -> Option<u32> {
        self.power_watts
    }

    /// Returns the elevation in meters
    #[must_use]
    pub const fn elevation_m(&self) -> Option<f64> {
        self.elevation_m
    }

    /// Checks this sample against its owning workout
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidRecord` when the sample references a
    /// different workout or its timestamp falls outside the session window.
    pub fn validate_window(&self, workout: &Workout) -> StatsResult<()> {
        if self.workout_id != workout.id() {
            return Err(StatsError::invalid_record(
                "workout_id",
                "sample does not reference this workout",
            ));
        }
        if !workout.spans(self.timestamp) {
            return Err(StatsError::invalid_record(
                "timestamp",
                "must fall within the workout session window",
            ));
        }
        Ok(())
    }
}

/// Builder for constructing `MetricSample` instances
///
/// `build()` rejects samples that carry no metric value at all, heart rates
/// outside the plausible band, and negative speed or distance.
#[derive(Debug, Clone)]
pub struct MetricSampleBuilder {
    sample: MetricSample,
}

impl MetricSampleBuilder {
    /// Creates a new `MetricSampleBuilder` with required fields
    #[must_use]
    pub const fn new(id: Uuid, workout_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            sample: MetricSample {
                id,
                workout_id,
                timestamp,
                heart_rate: None,
                speed_kmh: None,
                distance_km: None,
                cadence: None,
                power_watts: None,
                elevation_m: None,
            },
        }
    }

    /// Sets the heart rate (BPM)
    #[must_use]
    pub const fn heart_rate(mut self, value: u32) -> Self {
        self.sample.heart_rate = Some(value);
        self
    }

    /// Sets the heart rate (optional)
    #[must_use]
    pub const fn heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.sample.heart_rate = value;
        self
    }

    /// Sets the speed in km/h
    #[must_use]
    pub const fn speed_kmh(mut self, value: f64) -> Self {
        self.sample.speed_kmh = Some(value);
        self
    }

    /// Sets the cumulative distance in kilometers
    #[must_use]
    pub const fn distance_km(mut self, value: f64) -> Self {
        self.sample.distance_km = Some(value);
        self
    }

    /// Sets the cadence
    #[must_use]
    pub const fn cadence(mut self, value: u32) -> Self {
        self.sample.cadence = Some(value);
        self
    }

    /// Sets the power output in watts
    #[must_use]
    pub const fn power_watts(mut self, value: u32) -> Self {
        self.sample.power_watts = Some(value);
        self
    }

    /// Sets the elevation in meters
    #[must_use]
    pub const fn elevation_m(mut self, value: f64) -> Self {
        self.sample.elevation_m = Some(value);
        self
    }

    /// Validates and builds the `MetricSample`
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidRecord` naming the offending field when:
    /// - no metric value is present at all
    /// - the heart rate falls outside 30..=250 bpm
    /// - speed or distance is negative or not a finite number
    pub fn build(self) -> StatsResult<MetricSample> {
        let sample = self.sample;

        let has_metric = sample.heart_rate.is_some()
            || sample.speed_kmh.is_some()
            || sample.distance_km.is_some()
            || sample.cadence.is_some()
            || sample.power_watts.is_some()
            || sample.elevation_m.is_some();
        if !has_metric {
            return Err(StatsError::invalid_record(
                "sample",
                "at least one metric value must be provided",
            ));
        }
        if let Some(bpm) = sample.heart_rate {
            if !(MIN_VALID_HR..=MAX_VALID_HR).contains(&bpm) {
                return Err(StatsError::invalid_record(
                    "heart_rate",
                    "must be between 30 and 250 bpm",
                ));
            }
        }
        validate_non_negative("speed_kmh", sample.speed_kmh)?;
        validate_non_negative("distance_km", sample.distance_km)?;

        Ok(sample)
    }
}

fn validate_non_negative(field: &str, value: Option<f64>) -> StatsResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(StatsError::invalid_record(
            field,
            "must be a non-negative number",
        )),
        _ => Ok(()),
    }
}
