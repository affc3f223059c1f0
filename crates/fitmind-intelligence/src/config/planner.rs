// ABOUTME: Weight-loss planner configuration for safety thresholds and deficit split
// ABOUTME: Configures minimum intake, maximum deficit, pace clamping, and the diet/exercise shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Weight-Loss Planner Configuration
//!
//! Safety thresholds applied to every plan. Crossing one of them never rejects a
//! plan; it attaches a warning and may clear the plan's safety flag.

use fitmind_core::Gender;
use serde::{Deserialize, Serialize};

/// Planner safety and breakdown settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Lowest safe daily intake for men (kcal)
    pub min_daily_calories_male: f64,
    /// Lowest safe daily intake for women (kcal)
    pub min_daily_calories_female: f64,
    /// Largest safe daily deficit (kcal)
    pub max_daily_deficit_kcal: f64,
    /// Date-derived rates above this are clamped (kg/week)
    pub max_weekly_loss_kg: f64,
    /// Rates below this trigger a slow-pace warning (kg/week)
    pub slow_weekly_loss_kg: f64,
    /// Share of the deficit covered by eating less
    pub diet_deficit_share: f64,
    /// Share of the deficit covered by exercise
    pub exercise_deficit_share: f64,
}

impl PlannerConfig {
    /// Minimum safe daily intake for the given sex
    #[must_use]
    pub const fn min_daily_calories(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.min_daily_calories_male,
            Gender::Female => self.min_daily_calories_female,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_daily_calories_male: 1500.0,
            min_daily_calories_female: 1200.0,
            max_daily_deficit_kcal: 1000.0,
            max_weekly_loss_kg: 1.0,
            slow_weekly_loss_kg: 0.25,
            diet_deficit_share: 0.7,
            exercise_deficit_share: 0.3,
        }
    }
}
