// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological limits, zone defaults, and time conversions for workout analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Validation boundaries mirror the
//! ranges accepted at record construction; zone defaults feed
//! [`crate::config::ZoneConfig`].

/// Heart rate validation limits
pub mod heart_rate {
    /// Lowest heart rate accepted on records and samples (bpm).
    /// Resting rates below this are not physiologically plausible for exercise data.
    pub const MIN_VALID_HR: u32 = 30;

    /// Highest heart rate accepted on records and samples (bpm).
    /// Upper bound of age-predicted maxima with margin (Fox formula ceiling).
    pub const MAX_VALID_HR: u32 = 250;
}

/// Default heart-rate zone scheme: five bands by fraction of max heart rate
pub mod zones {
    /// Number of zones in the default scheme
    pub const ZONE_COUNT: usize = 5;

    /// Zone display names, lowest intensity first
    pub const DEFAULT_ZONE_NAMES: [&str; ZONE_COUNT] =
        ["Recovery", "Endurance", "Tempo", "Threshold", "VO2 Max"];

    /// Upper zone boundaries as fractions of reference max heart rate.
    /// Each zone spans from the previous ceiling (exclusive) to its own
    /// (inclusive); the first zone starts at zero.
    pub const DEFAULT_ZONE_CEILINGS: [f64; ZONE_COUNT] = [0.60, 0.70, 0.80, 0.90, 1.00];
}

/// Service identity reported in structured log output
pub mod service {
    /// Logical service name attached to startup log records
    pub const SERVICE_NAME: &str = "fitstats";
}

/// Time conversions and duration limits
pub mod time {
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Seconds per minute as `f64` for rate math
    pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: i64 = 60;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: i64 = 3600;
    /// Longest accepted workout duration in seconds (24 hours).
    /// Sessions beyond this are rejected at construction as data errors.
    pub const MAX_WORKOUT_DURATION_SECS: i64 = 24 * SECONDS_PER_HOUR;
}
