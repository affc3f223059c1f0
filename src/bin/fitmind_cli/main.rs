// ABOUTME: FitMind CLI - command-line front end for the weight-loss planning engine
// ABOUTME: Computes calculators, plans, timelines, trends, and progress insights as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors
//!
//! Usage:
//! ```bash
//! # BMR, TDEE and BMI for a person
//! fitmind-cli bmr --weight 80 --height 170 --age 30 --gender male --activity moderate
//!
//! # Healthy target weights, optionally evaluating a chosen target
//! fitmind-cli recommend --height 170 --weight 90 --target 72
//!
//! # Plan from a profile JSON file (or stdin) at a pace or toward a date
//! fitmind-cli plan --profile profile.json --pace fast
//! fitmind-cli plan --profile - --target-date 2026-06-01 < profile.json
//!
//! # Selectable pace/duration choices
//! fitmind-cli timeline --current 80 --target 70
//!
//! # Trend of a weight history (JSON array of {"weight_kg", "date"})
//! fitmind-cli trend --input weights.json --window-days 21
//!
//! # Progress insights from {"profile": {...}, "entries": [...]}
//! fitmind-cli progress --input progress.json --today 2026-03-01
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fitmind_engine::logging::LoggingConfig;
use fitmind_engine::{ActivityLevel, Gender, Pace};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "fitmind-cli",
    version,
    about = "FitMind weight-loss planning CLI",
    long_about = "Command-line front end for the FitMind engine. Inputs are flags or JSON documents; results are printed to stdout as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Compute as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// BMR, TDEE, BMI and BMI category
    Bmr {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Biological sex (male, female)
        #[arg(long)]
        gender: Gender,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
    },

    /// Healthy target-weight suggestions
    Recommend {
        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Current weight (kg)
        #[arg(long)]
        weight: f64,

        /// Chosen target weight to evaluate (kg)
        #[arg(long)]
        target: Option<f64>,
    },

    /// Weight-loss plan for a profile
    Plan {
        /// Profile JSON file, `-` or omitted for stdin
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Pace (slow, moderate, fast); ignored when a target date is given
        #[arg(long, default_value = "moderate")]
        pace: Pace,

        /// Desired completion date (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<NaiveDate>,
    },

    /// Selectable pace and duration options
    Timeline {
        /// Current weight (kg)
        #[arg(long)]
        current: f64,

        /// Target weight (kg)
        #[arg(long)]
        target: f64,
    },

    /// Trend analysis of a weight history
    Trend {
        /// Weight history JSON file, `-` or omitted for stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Recent window (days); the configured window when omitted
        #[arg(long)]
        window_days: Option<u32>,
    },

    /// Progress insights for a stored profile and its weight history
    Progress {
        /// Progress JSON file, `-` or omitted for stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(Level::DEBUG);
    }
    logging.init()?;

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    debug!(%today, "FitMind CLI starting");

    match cli.command {
        Command::Bmr {
            weight,
            height,
            age,
            gender,
            activity,
        } => commands::calculate::energy(weight, height, age, gender, activity),
        Command::Recommend {
            height,
            weight,
            target,
        } => commands::calculate::recommend(height, weight, target),
        Command::Plan {
            profile,
            pace,
            target_date,
        } => commands::plan::plan(profile.as_deref(), pace, target_date, today),
        Command::Timeline { current, target } => commands::plan::timeline(current, target, today),
        Command::Trend { input, window_days } => {
            commands::trend::trend(input.as_deref(), window_days, today)
        }
        Command::Progress { input } => commands::trend::progress(input.as_deref(), today),
    }
}
