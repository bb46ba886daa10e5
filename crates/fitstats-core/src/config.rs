// ABOUTME: Heart-rate zone configuration with environment overrides
// ABOUTME: Defines zone names and ceiling fractions used by the zone analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Zone Configuration
//!
//! Heart-rate zones are bands of effort defined by ascending ceiling
//! fractions of a reference max heart rate. The default scheme is five zones
//! (Recovery through VO2 Max); deployments can nudge the four inner ceilings
//! through environment variables or supply an entirely custom scheme.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use crate::constants::zones::{DEFAULT_ZONE_CEILINGS, DEFAULT_ZONE_NAMES};
use crate::errors::{StatsError, StatsResult};

/// Heart-rate zone scheme: parallel zone names and ceiling fractions.
///
/// Zone `i` spans from the previous ceiling (exclusive) up to `ceilings[i]`
/// (inclusive), expressed as fractions of the reference max heart rate.
/// Heart rates above the last ceiling are counted in the top zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Zone display names, lowest intensity first
    names: Vec<String>,
    /// Ascending ceiling fractions, one per zone
    ceilings: Vec<f64>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_ZONE_NAMES.iter().map(|&n| n.to_owned()).collect(),
            ceilings: DEFAULT_ZONE_CEILINGS.to_vec(),
        }
    }
}

impl ZoneConfig {
    /// Load the zone scheme from the environment.
    ///
    /// The four inner ceilings are read from `FITSTATS_ZONE1_CEILING` through
    /// `FITSTATS_ZONE4_CEILING` (fractions of max heart rate); unset or
    /// unparseable variables keep their defaults. A combination that fails
    /// validation (for example, non-ascending ceilings) falls back to the
    /// default scheme entirely.
    #[must_use]
    pub fn from_env() -> Self {
        let candidate = Self {
            names: DEFAULT_ZONE_NAMES.iter().map(|&n| n.to_owned()).collect(),
            ceilings: vec![
                env_ceiling("FITSTATS_ZONE1_CEILING", DEFAULT_ZONE_CEILINGS[0]),
                env_ceiling("FITSTATS_ZONE2_CEILING", DEFAULT_ZONE_CEILINGS[1]),
                env_ceiling("FITSTATS_ZONE3_CEILING", DEFAULT_ZONE_CEILINGS[2]),
                env_ceiling("FITSTATS_ZONE4_CEILING", DEFAULT_ZONE_CEILINGS[3]),
                DEFAULT_ZONE_CEILINGS[4],
            ],
        };
        match candidate.validate() {
            Ok(()) => candidate,
            Err(error) => {
                warn!(
                    error = %error,
                    "zone ceilings from environment are invalid, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Build a custom zone scheme.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Config` when `names` and `ceilings` differ in
    /// length or the ceilings fail validation (see [`Self::validate`]).
    pub fn custom(names: Vec<String>, ceilings: Vec<f64>) -> StatsResult<Self> {
        if names.len() != ceilings.len() {
            return Err(StatsError::config(
                "zone_names",
                "must match the number of zone ceilings",
            ));
        }
        let config = Self { names, ceilings };
        config.validate()?;
        Ok(config)
    }

    /// Validate the zone scheme.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Config` when the scheme is empty, a ceiling is
    /// not a finite fraction in (0, 1], or the ceilings are not strictly
    /// ascending.
    pub fn validate(&self) -> StatsResult<()> {
        if self.ceilings.is_empty() {
            return Err(StatsError::config(
                "zone_ceilings",
                "at least one zone is required",
            ));
        }
        for &ceiling in &self.ceilings {
            if !ceiling.is_finite() || ceiling <= 0.0 || ceiling > 1.0 {
                return Err(StatsError::config(
                    "zone_ceilings",
                    "ceilings must be fractions in (0, 1]",
                ));
            }
        }
        for pair in self.ceilings.windows(2) {
            if pair[1] <= pair[0] {
                return Err(StatsError::config(
                    "zone_ceilings",
                    "ceilings must be strictly ascending",
                ));
            }
        }
        Ok(())
    }

    /// Number of zones in the scheme
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.ceilings.len()
    }

    /// Zone display names, lowest intensity first
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Ascending ceiling fractions, one per zone
    #[must_use]
    pub fn ceilings(&self) -> &[f64] {
        &self.ceilings
    }

    /// Zone index for a heart rate against a reference max heart rate.
    ///
    /// Rates above the last ceiling clamp into the top zone.
    #[must_use]
    pub fn zone_index(&self, heart_rate: u32, reference_max_hr: u32) -> usize {
        let fraction = f64::from(heart_rate) / f64::from(reference_max_hr.max(1));
        self.ceilings
            .iter()
            .position(|&ceiling| fraction <= ceiling)
            .unwrap_or(self.ceilings.len() - 1)
    }

    /// Per-zone bpm bounds `(floor, ceiling)` for a reference max heart rate
    #[must_use]
    pub fn zone_bounds_bpm(&self, reference_max_hr: u32) -> Vec<(u32, u32)> {
        let max = f64::from(reference_max_hr);
        let mut bounds = Vec::with_capacity(self.ceilings.len());
        let mut floor = 0u32;
        for &ceiling in &self.ceilings {
            let upper = (max * ceiling).round() as u32;
            bounds.push((floor, upper));
            floor = upper.saturating_add(1);
        }
        bounds
    }
}

/// Read one ceiling fraction from the environment with a constant fallback
fn env_ceiling(var: &str, default: f64) -> f64 {
    env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme_is_valid() {
        let config = ZoneConfig::default();
        assert_eq!(config.zone_count(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zone_index_clamps_above_max() {
        let config = ZoneConfig::default();
        // 105% of max still lands in the top zone
        assert_eq!(config.zone_index(200, 190), config.zone_count() - 1);
        // 50% of max is the first zone
        assert_eq!(config.zone_index(95, 190), 0);
    }

    #[test]
    fn test_custom_rejects_non_ascending() {
        let err = ZoneConfig::custom(
            vec!["Low".into(), "High".into()],
            vec![0.8, 0.6],
        )
        .unwrap_err();
        assert_eq!(err.field(), "zone_ceilings");
    }

    #[test]
    fn test_custom_rejects_out_of_range_fraction() {
        let err = ZoneConfig::custom(vec!["All".into()], vec![1.4]).unwrap_err();
        assert_eq!(err.field(), "zone_ceilings");
    }

    #[test]
    fn test_zone_bounds_cover_contiguously() {
        let config = ZoneConfig::default();
        let bounds = config.zone_bounds_bpm(200);
        assert_eq!(bounds.len(), 5);
        assert_eq!(bounds[0].0, 0);
        assert_eq!(bounds[4].1, 200);
        for pair in bounds.windows(2) {
            assert_eq!(pair[1].0, pair[0].1 + 1);
        }
    }
}
