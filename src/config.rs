// ABOUTME: Heart-rate zone configuration re-exported from fitstats-core
// ABOUTME: Zone schemes with environment overrides and custom boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Configuration
//!
//! Heart-rate zone configuration, re-exported from `fitstats-core`. Defaults
//! come from constants; deployments override ceilings through
//! `FITSTATS_ZONE{1..4}_CEILING` environment variables.

pub use fitstats_core::config::ZoneConfig;
