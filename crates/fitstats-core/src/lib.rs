// ABOUTME: Core types and constants for the fitstats workout analytics engine
// ABOUTME: Foundation crate with domain models, error handling, constants, and zone config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

#![deny(unsafe_code)]

//! # Fitstats Core
//!
//! Foundation crate providing shared types and constants for the fitstats
//! workout statistics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `StatsError` and field-level context
//! - **constants**: Physiological limits and unit conversions organized by domain
//! - **models**: Domain models (`Workout`, `MetricSample`, `WorkoutType`) with
//!   validating builders
//! - **config**: Heart-rate zone configuration with environment overrides

/// Unified error handling for aggregation and boundary validation
pub mod errors;

/// Physiological limits and unit conversion constants organized by domain
pub mod constants;

/// Core data models (`Workout`, `MetricSample`, `WorkoutType`)
pub mod models;

/// Heart-rate zone configuration (defaults, environment overrides, custom schemes)
pub mod config;
