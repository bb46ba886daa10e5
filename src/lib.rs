// ABOUTME: Main library entry point for the fitstats workout statistics engine
// ABOUTME: Provides period bucketing, progress tracking, chart series, and zone analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

#![deny(unsafe_code)]

//! # Fitstats
//!
//! A workout statistics engine. Given one user's workout records and their
//! time-stamped metric samples, fitstats computes period-bucketed summaries,
//! cumulative progress series, chart-ready label/value pairs, and
//! heart-rate-zone distributions.
//!
//! ## Features
//!
//! - **Bucketed statistics**: group workouts by day, ISO week, or month
//! - **Cumulative progress**: running totals across chronological buckets
//! - **Chart data**: aligned label and value arrays for direct plotting
//! - **Zone analysis**: configurable heart-rate zones over one workout's samples
//! - **Overall totals**: whole-history rollups with bests
//!
//! ## Architecture
//!
//! The engine owns no storage, transport, or identity. A hosting layer
//! supplies pre-authenticated user identity, record collections, and request
//! parameters; every operation is a pure synchronous function of that
//! snapshot:
//! - **Models**: validated domain records (`fitstats-core`)
//! - **Analytics**: the aggregation operations
//! - **Config**: heart-rate zone schemes with environment overrides
//! - **Logging**: structured tracing setup for binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use fitstats::analytics::{summarize, DateRange, Period};
//! use fitstats::errors::StatsResult;
//! use uuid::Uuid;
//!
//! fn main() -> StatsResult<()> {
//!     let user_id = Uuid::new_v4();
//!     let period = Period::from_param("workout_summary", "day")?;
//!
//!     // No workouts in range is an empty result, not an error
//!     let buckets = summarize(user_id, &[], period, &DateRange::default())?;
//!     assert!(buckets.is_empty());
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Aggregation operations: summaries, progress, charts, zones, totals
pub mod analytics;

/// Heart-rate zone configuration re-exported from fitstats-core
pub mod config;

/// Domain constants re-exported from fitstats-core
pub mod constants;

/// Unified error handling re-exported from fitstats-core
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models re-exported from fitstats-core
pub mod models;
