// ABOUTME: Core data models re-exported from fitstats-core
// ABOUTME: Re-exports Workout, MetricSample, WorkoutType and their builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Data Models
//!
//! Core data structures consumed by the aggregation engine. These live in the
//! `fitstats-core` foundation crate and are re-exported here so engine users
//! need a single dependency.
//!
//! ## Core Models
//!
//! - `Workout`: a single recorded session (timing, distance, heart rate)
//! - `MetricSample`: one time-stamped measurement belonging to a workout
//! - `WorkoutType`: enumeration of supported workout categories

pub use fitstats_core::models::*;
