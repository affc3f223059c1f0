// ABOUTME: Planning commands for fitmind-cli
// ABOUTME: Weight-loss plans from a profile document and selectable timeline options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::helpers::emit;
use anyhow::Result;
use chrono::NaiveDate;
use fitmind_engine::input::read_json;
use fitmind_engine::{Pace, TimelineGenerator, UserProfile, WeightLossPlanner, WeightLossResult};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct PlanReport {
    #[serde(flatten)]
    plan: WeightLossResult,
    pace_description: &'static str,
    warning_messages: Vec<String>,
}

/// Print a weight-loss plan for the profile read from `profile_path` (stdin when absent)
pub fn plan(
    profile_path: Option<&Path>,
    pace: Pace,
    target_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let profile: UserProfile = read_json(profile_path)?;
    let plan = WeightLossPlanner::new().plan_as_of(&profile, pace, target_date, today)?;

    info!(
        weekly_loss_kg = plan.weekly_weight_loss_kg,
        duration_weeks = plan.estimated_duration_weeks,
        safe = plan.is_healthy_safe,
        "Plan computed"
    );

    let pace_description = Pace::for_weekly_loss(plan.weekly_weight_loss_kg).description();
    let warning_messages = plan.warning_messages();
    emit(&PlanReport {
        plan,
        pace_description,
        warning_messages,
    })
}

/// Print selectable pace and duration options
pub fn timeline(current_kg: f64, target_kg: f64, today: NaiveDate) -> Result<()> {
    let options = TimelineGenerator::new().options_as_of(current_kg, target_kg, today);
    emit(&options)
}
