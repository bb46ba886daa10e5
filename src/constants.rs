// ABOUTME: Domain constants re-exported from fitstats-core
// ABOUTME: Physiological limits, zone defaults, and time conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Constants
//!
//! Physiological limits and unit conversions, re-exported from
//! `fitstats-core`.

pub use fitstats_core::constants::*;
