// ABOUTME: Fitstats CLI - command-line front end for the workout statistics engine
// ABOUTME: Runs summaries, progress, charts, zones, and totals over a JSON workout snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitstats Contributors
//!
//! Usage:
//! ```bash
//! # Generate a reproducible synthetic snapshot
//! fitstats-cli seed --count 120 --days 180
//!
//! # Weekly summary over the whole snapshot
//! fitstats-cli summary --period week
//!
//! # Cumulative monthly progress for a date window
//! fitstats-cli progress --period month --from 2024-01-01 --to 2024-06-30
//!
//! # Chart-ready distance series as JSON
//! fitstats-cli chart --metric distance --period week --json
//!
//! # Heart-rate zones for one workout
//! fitstats-cli zones --workout 6e4f2c3a-8d21-4bb0-9a70-5a6f3f1c2d44
//!
//! # Overall totals with bests
//! fitstats-cli totals
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitstats::analytics::DateRange;
use fitstats::logging::LoggingConfig;
use tracing::debug;
use uuid::Uuid;

use helpers::snapshot::Snapshot;

/// Snapshot location used when `--snapshot` is not given
const DEFAULT_SNAPSHOT_PATH: &str = "data/workouts.json";

#[derive(Parser)]
#[command(
    name = "fitstats-cli",
    about = "Fitstats Workout Statistics CLI",
    long_about = "Command-line front end for the fitstats engine: bucketed summaries, cumulative progress, chart series, heart-rate zone distributions, and overall totals over a JSON workout snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file override
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// User id override (defaults to the snapshot's owner)
    #[arg(long, global = true)]
    user: Option<Uuid>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Per-bucket workout summaries
    Summary {
        /// Bucket granularity: day, week, or month
        #[arg(long, default_value = "week")]
        period: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Cumulative running totals per bucket
    Progress {
        /// Bucket granularity: day, week, or month
        #[arg(long, default_value = "week")]
        period: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Chart-ready label/value series for one metric
    Chart {
        /// Metric to chart: distance, calories, duration, or heart_rate
        #[arg(long)]
        metric: String,

        /// Bucket granularity: day, week, or month
        #[arg(long, default_value = "week")]
        period: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Heart-rate zone distribution for one workout
    Zones {
        /// Workout id to analyze
        #[arg(long)]
        workout: Uuid,

        /// Reference max heart rate override (bpm)
        #[arg(long)]
        max_hr: Option<u32>,
    },

    /// Overall totals with per-user bests
    Totals {
        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Generate a reproducible synthetic snapshot
    Seed {
        /// Number of workouts to generate
        #[arg(long, default_value = "90")]
        count: u32,

        /// Days of history to spread workouts over
        #[arg(long, default_value = "180")]
        days: u32,

        /// Metric samples per workout
        #[arg(long, default_value = "60")]
        samples: u32,

        /// Random seed for reproducible data
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let snapshot_path = cli
        .snapshot
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH));
    debug!("Snapshot path: {}", snapshot_path.display());

    match cli.command {
        Command::Summary { period, from, to } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            commands::query::summary(
                &snapshot,
                cli.user,
                &period,
                DateRange::new(from, to),
                cli.json,
            )?;
        }
        Command::Progress { period, from, to } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            commands::query::progress(
                &snapshot,
                cli.user,
                &period,
                DateRange::new(from, to),
                cli.json,
            )?;
        }
        Command::Chart {
            metric,
            period,
            from,
            to,
        } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            commands::query::chart(
                &snapshot,
                cli.user,
                &metric,
                &period,
                DateRange::new(from, to),
                cli.json,
            )?;
        }
        Command::Zones { workout, max_hr } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            commands::query::zones(&snapshot, workout, max_hr, cli.json)?;
        }
        Command::Totals { from, to } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            commands::query::totals(&snapshot, cli.user, DateRange::new(from, to), cli.json)?;
        }
        Command::Seed {
            count,
            days,
            samples,
            seed,
        } => {
            commands::seed::run(&snapshot_path, cli.user, count, days, samples, seed)?;
        }
    }

    Ok(())
}
