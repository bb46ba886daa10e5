// ABOUTME: Core data models for the fitstats workout analytics engine
// ABOUTME: Re-exports Workout, MetricSample, WorkoutType and their builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Data Models
//!
//! Core data structures shared by the aggregation engine and its callers.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: the engine consumes plain collections; persistence
//!   lives in the hosting layer
//! - **Validated at the Boundary**: builders reject malformed records before
//!   they can reach any computation
//! - **Serializable**: all models support JSON serialization for the hosting
//!   layer
//!
//! ## Core Models
//!
//! - `Workout`: a single recorded session (timing, distance, heart rate)
//! - `MetricSample`: one time-stamped measurement belonging to a workout
//! - `WorkoutType`: enumeration of supported workout categories

// Domain modules
mod sample;
mod workout;
mod workout_type;

// Re-export all public types for convenience
// Workout domain
pub use workout::{Workout, WorkoutBuilder};

// Sample domain
pub use sample::{MetricSample, MetricSampleBuilder};

// Workout types
pub use workout_type::WorkoutType;
