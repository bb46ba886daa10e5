// ABOUTME: Aggregation operations over one user's workout records
// ABOUTME: Period bucketing, summaries, cumulative progress, chart series, zone analysis, totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Analytics Module
//!
//! The aggregation operations of the statistics engine. Each operation is a
//! pure synchronous function over a caller-supplied snapshot: an owning user
//! id, a slice of [`Workout`] records, and typed request parameters.
//!
//! Operations never mutate their inputs and hold no state between calls.
//! Records owned by a different user are skipped with a warning rather than
//! aggregated, so a mixed snapshot cannot leak another user's data into a
//! result.

use crate::models::Workout;
use tracing::warn;
use uuid::Uuid;

/// Chart-ready label/value series for a chosen metric
pub mod charts;
/// Period parsing, bucket truncation, and optional date ranges
pub mod period;
/// Cumulative running totals across chronological buckets
pub mod progress;
/// Per-bucket workout summaries
pub mod summary;
/// Whole-history rollups with per-user bests
pub mod totals;
/// Heart-rate zone distribution over one workout's samples
pub mod zones;

pub use charts::{chart_series, ChartMetric, ChartSeries};
pub use period::{DateRange, Period};
pub use progress::{cumulative_progress, ProgressPoint};
pub use summary::{summarize, BucketSummary};
pub use totals::{overall_totals, TotalsSummary};
pub use zones::{analyze_zones, ZoneAnalysis, ZoneBreakdown};

/// Select the records an operation may aggregate: owned by `user_id` and
/// starting within `range`.
///
/// A record owned by another user is logged and excluded instead of failing
/// the whole operation; callers assemble snapshots from storage layers this
/// crate does not control.
pub(crate) fn scoped_workouts<'a>(
    operation: &'static str,
    user_id: Uuid,
    workouts: &'a [Workout],
    range: &DateRange,
) -> impl Iterator<Item = &'a Workout> + 'a {
    let range = *range;
    workouts.iter().filter(move |workout| {
        if workout.user_id() != user_id {
            warn!(
                operation = operation,
                workout_id = %workout.id(),
                "skipping record owned by another user"
            );
            return false;
        }
        range.contains(workout.start_time().date_naive())
    })
}
