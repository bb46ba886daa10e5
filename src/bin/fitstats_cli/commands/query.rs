// ABOUTME: Statistics query commands for fitstats-cli
// ABOUTME: Bridges parsed CLI arguments to the analytics operations and renders results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors

use anyhow::{anyhow, Result};
use fitstats::analytics::charts::OPERATION as CHART_OPERATION;
use fitstats::analytics::progress::OPERATION as PROGRESS_OPERATION;
use fitstats::analytics::summary::OPERATION as SUMMARY_OPERATION;
use fitstats::analytics::{
    analyze_zones, chart_series, cumulative_progress, overall_totals, summarize, ChartMetric,
    DateRange, Period,
};
use fitstats::config::ZoneConfig;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display;
use crate::helpers::snapshot::Snapshot;

/// Resolve which user the query runs for
fn resolve_user(snapshot: &Snapshot, user: Option<Uuid>) -> Uuid {
    user.unwrap_or(snapshot.user_id)
}

/// Run the bucketed summary operation
pub fn summary(
    snapshot: &Snapshot,
    user: Option<Uuid>,
    period: &str,
    range: DateRange,
    json: bool,
) -> Result<()> {
    let user_id = resolve_user(snapshot, user);
    let period = Period::from_param(SUMMARY_OPERATION, period)?;
    let buckets = summarize(user_id, &snapshot.workouts, period, &range)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
    } else {
        display::render_summary(&buckets);
    }
    Ok(())
}

/// Run the cumulative progress operation
pub fn progress(
    snapshot: &Snapshot,
    user: Option<Uuid>,
    period: &str,
    range: DateRange,
    json: bool,
) -> Result<()> {
    let user_id = resolve_user(snapshot, user);
    let period = Period::from_param(PROGRESS_OPERATION, period)?;
    let points = cumulative_progress(user_id, &snapshot.workouts, period, &range)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        display::render_progress(&points);
    }
    Ok(())
}

/// Run the chart series operation
pub fn chart(
    snapshot: &Snapshot,
    user: Option<Uuid>,
    metric: &str,
    period: &str,
    range: DateRange,
    json: bool,
) -> Result<()> {
    let user_id = resolve_user(snapshot, user);
    let metric = ChartMetric::from_param(CHART_OPERATION, metric)?;
    let period = Period::from_param(CHART_OPERATION, period)?;
    let series = chart_series(user_id, &snapshot.workouts, metric, period, &range)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        display::render_chart(&series);
    }
    Ok(())
}

/// Run the zone analysis operation for one workout
pub fn zones(snapshot: &Snapshot, workout_id: Uuid, max_hr: Option<u32>, json: bool) -> Result<()> {
    let workout = snapshot
        .workouts
        .iter()
        .find(|workout| workout.id() == workout_id)
        .ok_or_else(|| anyhow!("Workout {workout_id} not found in snapshot"))?;

    let samples = snapshot.samples_for(workout);
    info!(
        "Analyzing {} samples for '{}'",
        samples.len(),
        workout.title()
    );

    let config = ZoneConfig::from_env();
    let analysis = analyze_zones(workout, &samples, &config, max_hr)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        display::render_zones(&analysis);
    }
    Ok(())
}

/// Run the overall totals operation
pub fn totals(snapshot: &Snapshot, user: Option<Uuid>, range: DateRange, json: bool) -> Result<()> {
    let user_id = resolve_user(snapshot, user);
    let totals = overall_totals(user_id, &snapshot.workouts, &range)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        display::render_totals(&totals);
    }
    Ok(())
}
