// ABOUTME: Heart-rate zone distribution over one workout's metric samples
// ABOUTME: Classifies samples into configured zones and reports counts and time fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Heart-rate zone analysis
//!
//! Partitions the heart-rate-bearing samples of a single workout into the
//! configured zones. Samples without a heart rate are reported but excluded
//! from the distribution, so the per-zone fractions always sum to one
//! whenever at least one sample carries a heart rate.
//!
//! The reference max heart rate resolves in order: the caller's explicit
//! value, the workout's recorded max, then the highest observed sample.
//! When none resolves the analysis returns an empty zone list instead of
//! guessing a ceiling.

use crate::config::ZoneConfig;
use crate::constants::heart_rate::{MAX_VALID_HR, MIN_VALID_HR};
use crate::errors::{StatsError, StatsResult};
use crate::models::{MetricSample, Workout};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Operation name used in parameter errors and log records
pub const OPERATION: &str = "zone_analysis";

/// Clamping cast for sample counts reported on the wire
#[inline]
fn clamp_count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// One heart-rate zone with its share of the workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBreakdown {
    /// Zone display name, e.g. `Endurance`
    pub name: String,
    /// Lowest heart rate counted into this zone (bpm)
    pub min_hr: u32,
    /// Highest heart rate counted into this zone (bpm); rates above the top
    /// zone's ceiling still count into the top zone
    pub max_hr: u32,
    /// Heart-rate-bearing samples classified into this zone
    pub sample_count: u32,
    /// This zone's share of all heart-rate-bearing samples, in `[0, 1]`
    pub time_fraction: f64,
}

/// Zone distribution for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAnalysis {
    /// Workout the samples belong to
    pub workout_id: Uuid,
    /// Max heart rate the zone boundaries were computed against, when one
    /// could be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_max_hr: Option<u32>,
    /// Samples considered after ownership and window filtering
    pub samples_total: u32,
    /// Considered samples that carried a heart rate
    pub samples_with_heart_rate: u32,
    /// Per-zone distribution, lowest intensity first; empty when no
    /// reference max heart rate could be resolved
    pub zones: Vec<ZoneBreakdown>,
}

/// Distribute one workout's samples across heart-rate zones
///
/// Samples referencing a different workout or timestamped outside the
/// session window are logged and excluded. Samples without a heart rate
/// count toward `samples_total` but not the distribution.
///
/// # Errors
///
/// Returns [`StatsError::Config`] when `config` is not a valid zone scheme,
/// or [`StatsError::InvalidParameter`] naming `max_hr` when the explicit
/// override is outside the physiologically accepted band.
pub fn analyze_zones(
    workout: &Workout,
    samples: &[MetricSample],
    config: &ZoneConfig,
    explicit_max_hr: Option<u32>,
) -> StatsResult<ZoneAnalysis> {
    config.validate()?;

    if let Some(max_hr) = explicit_max_hr {
        if !(MIN_VALID_HR..=MAX_VALID_HR).contains(&max_hr) {
            return Err(StatsError::invalid_parameter(
                OPERATION,
                "max_hr",
                format!("must be between {MIN_VALID_HR} and {MAX_VALID_HR} bpm"),
            ));
        }
    }

    let eligible: Vec<&MetricSample> = samples
        .iter()
        .filter(|sample| {
            if sample.workout_id() != workout.id() {
                warn!(
                    operation = OPERATION,
                    sample_id = %sample.id(),
                    "skipping sample referencing another workout"
                );
                return false;
            }
            if !workout.spans(sample.timestamp()) {
                warn!(
                    operation = OPERATION,
                    sample_id = %sample.id(),
                    "skipping sample timestamped outside the session window"
                );
                return false;
            }
            true
        })
        .collect();

    let heart_rates: Vec<u32> = eligible
        .iter()
        .filter_map(|sample| sample.heart_rate())
        .collect();

    let reference = explicit_max_hr
        .or_else(|| workout.max_heart_rate())
        .or_else(|| heart_rates.iter().copied().max());

    let Some(reference_max_hr) = reference else {
        debug!(
            operation = OPERATION,
            workout_id = %workout.id(),
            "no reference max heart rate could be resolved"
        );
        return Ok(ZoneAnalysis {
            workout_id: workout.id(),
            reference_max_hr: None,
            samples_total: clamp_count(eligible.len()),
            samples_with_heart_rate: 0,
            zones: Vec::new(),
        });
    };

    let counts = heart_rates
        .par_iter()
        .fold(
            || vec![0usize; config.zone_count()],
            |mut acc, &hr| {
                acc[config.zone_index(hr, reference_max_hr)] += 1;
                acc
            },
        )
        .reduce(
            || vec![0usize; config.zone_count()],
            |mut left, right| {
                for (slot, value) in left.iter_mut().zip(right) {
                    *slot += value;
                }
                left
            },
        );

    let hr_total = heart_rates.len();
    let zones = config
        .names()
        .iter()
        .zip(config.zone_bounds_bpm(reference_max_hr))
        .zip(counts)
        .map(|((name, (min_hr, max_hr)), count)| {
            let time_fraction = if hr_total == 0 {
                0.0
            } else {
                count as f64 / hr_total as f64
            };
            ZoneBreakdown {
                name: name.clone(),
                min_hr,
                max_hr,
                sample_count: clamp_count(count),
                time_fraction,
            }
        })
        .collect();

    debug!(
        operation = OPERATION,
        workout_id = %workout.id(),
        reference_max_hr,
        samples = hr_total,
        "zone distribution computed"
    );

    Ok(ZoneAnalysis {
        workout_id: workout.id(),
        reference_max_hr: Some(reference_max_hr),
        samples_total: clamp_count(eligible.len()),
        samples_with_heart_rate: clamp_count(hr_total),
        zones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricSampleBuilder, WorkoutBuilder, WorkoutType};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn session(max_heart_rate: Option<u32>) -> Workout {
        let start = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        WorkoutBuilder::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            WorkoutType::Running,
            "Interval session",
            start,
            start + Duration::hours(1),
        )
        .max_heart_rate_opt(max_heart_rate)
        .build()
        .unwrap()
    }

    fn hr_sample(workout: &Workout, offset_mins: i64, heart_rate: u32) -> MetricSample {
        MetricSampleBuilder::new(
            Uuid::new_v4(),
            workout.id(),
            workout.start_time() + Duration::minutes(offset_mins),
        )
        .heart_rate(heart_rate)
        .build()
        .unwrap()
    }

    fn timestamp(workout: &Workout, offset_mins: i64) -> DateTime<Utc> {
        workout.start_time() + Duration::minutes(offset_mins)
    }

    #[test]
    fn test_each_default_zone_catches_its_band() {
        let workout = session(Some(200));
        // With max 200 the default ceilings give 120/140/160/180/200 bpm
        let samples = vec![
            hr_sample(&workout, 1, 100),
            hr_sample(&workout, 2, 130),
            hr_sample(&workout, 3, 150),
            hr_sample(&workout, 4, 170),
            hr_sample(&workout, 5, 190),
        ];
        let analysis =
            analyze_zones(&workout, &samples, &ZoneConfig::default(), None).unwrap();
        assert_eq!(analysis.reference_max_hr, Some(200));
        assert_eq!(analysis.zones.len(), 5);
        for zone in &analysis.zones {
            assert_eq!(zone.sample_count, 1);
            assert!((zone.time_fraction - 0.2).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_samples_without_heart_rate_leave_the_denominator() {
        let workout = session(Some(190));
        let no_hr = MetricSampleBuilder::new(
            Uuid::new_v4(),
            workout.id(),
            timestamp(&workout, 10),
        )
        .speed_kmh(9.5)
        .build()
        .unwrap();
        let samples = vec![
            hr_sample(&workout, 1, 120),
            hr_sample(&workout, 2, 120),
            no_hr,
        ];
        let analysis =
            analyze_zones(&workout, &samples, &ZoneConfig::default(), None).unwrap();
        assert_eq!(analysis.samples_total, 3);
        assert_eq!(analysis.samples_with_heart_rate, 2);
        let fraction_sum: f64 = analysis.zones.iter().map(|z| z.time_fraction).sum();
        assert!((fraction_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_falls_back_to_observed_max() {
        let workout = session(None);
        let samples = vec![hr_sample(&workout, 1, 152), hr_sample(&workout, 2, 164)];
        let analysis =
            analyze_zones(&workout, &samples, &ZoneConfig::default(), None).unwrap();
        assert_eq!(analysis.reference_max_hr, Some(164));
    }

    #[test]
    fn test_unresolvable_reference_yields_empty_zones() {
        let workout = session(None);
        let analysis = analyze_zones(&workout, &[], &ZoneConfig::default(), None).unwrap();
        assert_eq!(analysis.reference_max_hr, None);
        assert!(analysis.zones.is_empty());
    }

    #[test]
    fn test_explicit_max_out_of_band_is_rejected() {
        let workout = session(None);
        let err =
            analyze_zones(&workout, &[], &ZoneConfig::default(), Some(400)).unwrap_err();
        match err {
            StatsError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "max_hr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_foreign_samples_are_excluded() {
        let workout = session(Some(200));
        let other = session(Some(200));
        let samples = vec![hr_sample(&workout, 1, 130), hr_sample(&other, 1, 130)];
        let analysis =
            analyze_zones(&workout, &samples, &ZoneConfig::default(), None).unwrap();
        assert_eq!(analysis.samples_total, 1);
    }
}
