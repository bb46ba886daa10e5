// ABOUTME: JSON snapshot file handling for fitstats-cli
// ABOUTME: Loads and saves the workout collection the engine operates on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use fitstats::models::{MetricSample, Workout};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// One user's exported workout history
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Owner of the records in the snapshot
    pub user_id: Uuid,
    /// Workout records, any order
    pub workouts: Vec<Workout>,
    /// Metric samples belonging to the workouts
    #[serde(default)]
    pub samples: Vec<MetricSample>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read snapshot {}: {e}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Failed to parse snapshot {}: {e}", path.display()))?;
        Ok(snapshot)
    }

    /// Write the snapshot to a JSON file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create {}: {e}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .map_err(|e| anyhow!("Failed to write snapshot {}: {e}", path.display()))?;
        Ok(())
    }

    /// Samples belonging to `workout` that pass window validation
    pub fn samples_for(&self, workout: &Workout) -> Vec<MetricSample> {
        self.samples
            .iter()
            .filter(|sample| {
                if sample.workout_id() != workout.id() {
                    return false;
                }
                if let Err(error) = sample.validate_window(workout) {
                    warn!(
                        sample_id = %sample.id(),
                        error = %error,
                        "dropping sample that fails window validation"
                    );
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }
}
