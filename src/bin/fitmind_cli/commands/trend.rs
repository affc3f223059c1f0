// ABOUTME: Trend and progress commands for fitmind-cli
// ABOUTME: Analyzes weight histories and builds progress insights from JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::helpers::emit;
use anyhow::Result;
use chrono::NaiveDate;
use fitmind_engine::input::read_json;
use fitmind_engine::{
    interpret_trend, ProgressProfile, ProgressTracker, TrendAnalysis, TrendAnalyzer,
    TrendInterpretation, WeightLossPlanner, WeightObservation,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize)]
struct TrendReport {
    analysis: TrendAnalysis,
    interpretation: TrendInterpretation,
}

/// Progress document: a stored profile and its weight history
#[derive(Deserialize)]
struct ProgressInput {
    profile: ProgressProfile,
    #[serde(default)]
    entries: Vec<WeightObservation>,
}

/// Print the trend analysis and interpretation of a weight history
pub fn trend(input: Option<&Path>, window_days: Option<u32>, today: NaiveDate) -> Result<()> {
    let observations: Vec<WeightObservation> = read_json(input)?;
    let analyzer = TrendAnalyzer::new();
    let window_days = window_days.unwrap_or(analyzer.config().recent_window_days);

    let analysis = analyzer.analyze_as_of(&observations, window_days, today);
    let interpretation = interpret_trend(&analysis);
    emit(&TrendReport {
        analysis,
        interpretation,
    })
}

/// Print progress insights for a stored profile and its weight history
pub fn progress(input: Option<&Path>, today: NaiveDate) -> Result<()> {
    let ProgressInput { profile, entries } = read_json(input)?;
    let planner = WeightLossPlanner::new();
    let analyzer = TrendAnalyzer::new();

    let insights = ProgressTracker::new(&planner, &analyzer).insights(&profile, &entries, today);
    emit(&insights)
}
