// ABOUTME: Workout type enumeration for fitness sessions
// ABOUTME: Defines supported workout categories with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use serde::{Deserialize, Serialize};

/// Enumeration of supported workout types
///
/// Covers the categories tracked by the engine. The `Other` variant carries
/// source strings that don't map to a standard category, so ingestion never
/// drops a session over an unknown type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running session
    Running,
    /// Cycling session
    Cycling,
    /// Swimming session
    Swimming,
    /// Weight/strength training session
    WeightTraining,
    /// Yoga practice
    Yoga,
    /// High-intensity interval training
    Hiit,
    /// Walking session
    Walking,
    /// Workout type not covered by standard categories
    Other(String),
}

impl WorkoutType {
    /// Create `WorkoutType` from its wire string (`running`, `weight_training`, ...)
    #[must_use]
    pub fn from_wire_string(wire_name: &str) -> Self {
        match wire_name {
            "running" => Self::Running,
            "cycling" => Self::Cycling,
            "swimming" => Self::Swimming,
            "weight_training" => Self::WeightTraining,
            "yoga" => Self::Yoga,
            "hiit" => Self::Hiit,
            "walking" => Self::Walking,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire string for this workout type, used as the key in per-type count maps
    #[must_use]
    pub fn wire_name(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::WeightTraining => "weight_training",
            Self::Yoga => "yoga",
            Self::Hiit => "hiit",
            Self::Walking => "walking",
            Self::Other(name) => name,
        }
    }

    /// Get the human-readable name for this workout type
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "run",
            Self::Cycling => "bike ride",
            Self::Swimming => "swim",
            Self::WeightTraining => "strength training",
            Self::Yoga => "yoga session",
            Self::Hiit => "HIIT session",
            Self::Walking => "walk",
            Self::Other(_name) => "workout", // Could use name but keeping generic
        }
    }
}
