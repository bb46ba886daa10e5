// ABOUTME: Unified error types for aggregation requests and record construction
// ABOUTME: Structured variants name the offending field so callers can surface it directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

//! # Error Types
//!
//! One structured error enum for the whole engine:
//! - `InvalidParameter` / `MissingParameter` - request parameters rejected
//!   before any computation (unknown period or metric, inverted date range)
//! - `InvalidRecord` - record or sample construction rejected at the boundary
//! - `Config` - malformed zone configuration
//!
//! An empty result set is never an error; operations return empty collections
//! when nothing falls in range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors produced by aggregation operations and boundary validation.
///
/// Every variant names the field or parameter at fault so the hosting layer
/// can surface it to the caller without string parsing.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum StatsError {
    /// Request parameter failed validation
    #[error("Invalid parameter '{parameter}' for {operation}: {reason}")]
    InvalidParameter {
        /// Operation that rejected the parameter
        operation: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },
    /// Required request parameter is missing
    #[error("Missing required parameter '{parameter}' for {operation}")]
    MissingParameter {
        /// Operation that required the parameter
        operation: String,
        /// Name of the missing parameter
        parameter: String,
    },
    /// Record or sample construction rejected at the boundary
    #[error("Invalid record field '{field}': {reason}")]
    InvalidRecord {
        /// Field that failed validation
        field: String,
        /// Reason the value was rejected
        reason: String,
    },
    /// Zone configuration is malformed
    #[error("Invalid zone configuration '{parameter}': {reason}")]
    Config {
        /// Configuration parameter at fault
        parameter: String,
        /// Reason the configuration is invalid
        reason: String,
    },
}

impl StatsError {
    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        operation: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            operation: operation.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an "invalid record" error
    #[must_use]
    pub fn invalid_record(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a "config" error
    #[must_use]
    pub fn config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter or field this error is about
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidParameter { parameter, .. }
            | Self::MissingParameter { parameter, .. }
            | Self::Config { parameter, .. } => parameter,
            Self::InvalidRecord { field, .. } => field,
        }
    }
}
