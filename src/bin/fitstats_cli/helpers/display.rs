// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors
// ABOUTME: Output formatting helpers for fitstats-cli
// ABOUTME: Renders summaries, progress, charts, zones, and totals as readable tables

use fitstats::analytics::{BucketSummary, ChartSeries, ProgressPoint, TotalsSummary, ZoneAnalysis};

const RULE_WIDTH: usize = 80;
const BAR_WIDTH: f64 = 30.0;

/// Render seconds as `3h 05m` or `45m`
fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}

/// Render a per-type count map as `running:2 swimming:1`, sorted by name
fn format_type_counts(counts: &std::collections::HashMap<String, u32>) -> String {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .iter()
        .map(|(name, count)| format!("{name}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display bucketed summaries as a table
pub fn render_summary(buckets: &[BucketSummary]) {
    println!("\nWorkout Summary");
    println!("{}", "=".repeat(RULE_WIDTH));
    if buckets.is_empty() {
        println!("No workouts in the requested window.");
        return;
    }
    println!(
        "{:<12} {:>8} {:>9} {:>11} {:>9} {:>7}  Types",
        "Bucket", "Workouts", "Duration", "Distance", "Calories", "Avg HR"
    );
    for bucket in buckets {
        let avg_hr = bucket
            .average_heart_rate
            .map_or_else(|| "-".to_owned(), |hr| format!("{hr:.0}"));
        println!(
            "{:<12} {:>8} {:>9} {:>8.1} km {:>9} {:>7}  {}",
            bucket.label,
            bucket.workout_count,
            format_duration(bucket.total_duration_seconds),
            bucket.total_distance_km,
            bucket.total_calories,
            avg_hr,
            format_type_counts(&bucket.workouts_by_type)
        );
    }
    println!("{}", "=".repeat(RULE_WIDTH));
    let total: u32 = buckets.iter().map(|b| b.workout_count).sum();
    println!("Total: {} workouts across {} buckets", total, buckets.len());
}

/// Display cumulative progress as a table
pub fn render_progress(points: &[ProgressPoint]) {
    println!("\nCumulative Progress");
    println!("{}", "=".repeat(RULE_WIDTH));
    if points.is_empty() {
        println!("No workouts in the requested window.");
        return;
    }
    println!(
        "{:<12} {:>8} {:>9} {:>11} {:>9}",
        "Bucket", "Workouts", "Duration", "Distance", "Calories"
    );
    for point in points {
        println!(
            "{:<12} {:>8} {:>9} {:>8.1} km {:>9}",
            point.label,
            point.cumulative_workouts,
            format_duration(point.cumulative_duration_seconds),
            point.cumulative_distance_km,
            point.cumulative_calories
        );
    }
}

/// Display a chart series with proportional bars
pub fn render_chart(series: &ChartSeries) {
    println!("\nChart: {} ({})", series.metric.as_str(), series.unit);
    println!("{}", "=".repeat(RULE_WIDTH));
    if series.labels.is_empty() {
        println!("No workouts in the requested window.");
        return;
    }
    let peak = series.values.iter().copied().fold(0.0_f64, f64::max);
    for (label, value) in series.labels.iter().zip(&series.values) {
        let bar = if peak > 0.0 {
            "#".repeat((value / peak * BAR_WIDTH) as usize)
        } else {
            String::new()
        };
        println!("{label:<12} {value:>10.2}  {bar}");
    }
}

/// Display a zone distribution with proportional bars
pub fn render_zones(analysis: &ZoneAnalysis) {
    println!("\nHeart-Rate Zones for workout {}", analysis.workout_id);
    println!("{}", "=".repeat(RULE_WIDTH));
    match analysis.reference_max_hr {
        Some(max_hr) => println!("Reference max HR: {max_hr} bpm"),
        None => {
            println!("No reference max heart rate could be resolved; no zones to show.");
            return;
        }
    }
    println!(
        "Samples: {} of {} carry heart rate",
        analysis.samples_with_heart_rate, analysis.samples_total
    );
    println!(
        "{:<12} {:>13} {:>9} {:>8}",
        "Zone", "Range (bpm)", "Samples", "Share"
    );
    for zone in &analysis.zones {
        let bar = "#".repeat((zone.time_fraction * BAR_WIDTH) as usize);
        println!(
            "{:<12} {:>13} {:>9} {:>7.1}%  {}",
            zone.name,
            format!("{}-{}", zone.min_hr, zone.max_hr),
            zone.sample_count,
            zone.time_fraction * 100.0,
            bar
        );
    }
}

/// Display the overall totals block
pub fn render_totals(totals: &TotalsSummary) {
    println!("\nOverall Totals");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Workouts:       {}", totals.workout_count);
    println!(
        "   Duration:       {}",
        format_duration(totals.total_duration_seconds)
    );
    println!("   Distance:       {:.1} km", totals.total_distance_km);
    println!("   Calories:       {} kcal", totals.total_calories);
    if let Some(avg_hr) = totals.average_heart_rate {
        println!("   Avg heart rate: {avg_hr:.0} bpm");
    }
    if let Some(max_hr) = totals.highest_max_heart_rate {
        println!("   Peak heart rate: {max_hr} bpm");
    }
    if let Some(distance) = totals.longest_distance_km {
        println!("   Longest distance: {distance:.1} km");
    }
    if let Some(duration) = totals.longest_duration_seconds {
        println!("   Longest session:  {}", format_duration(duration));
    }
    if !totals.workouts_by_type.is_empty() {
        println!("   By type:        {}", format_type_counts(&totals.workouts_by_type));
    }
}
