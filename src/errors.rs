// ABOUTME: Unified error handling re-exported from fitstats-core
// ABOUTME: Re-exports StatsError and the StatsResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Error Handling
//!
//! The engine's single error type and result alias, re-exported from
//! `fitstats-core`. Every variant names the parameter or field at fault; an
//! empty result set is never an error.

pub use fitstats_core::errors::{StatsError, StatsResult};
