// ABOUTME: Progress insight configuration for on-track checks, streaks, and achievements
// ABOUTME: Thresholds feeding the numeric coaching context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use serde::{Deserialize, Serialize};

/// Progress tracking thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Days of history needed before weekly averages and on-track checks apply
    pub min_days_for_rate: i64,
    /// Fraction of the expected loss that still counts as on track
    pub on_track_ratio: f64,
    /// Average loss below this fraction of the weekly goal is flagged as slow
    pub slow_progress_ratio: f64,
    /// How far back the logging streak may reach (days)
    pub streak_lookback_days: u32,
    /// Streak length below which logging is flagged as inconsistent
    pub consistent_streak_days: u32,
    /// Completion estimate used when no rate is known (weeks)
    pub default_completion_weeks: f64,
    /// Loss that earns a weight-lost achievement (kg)
    pub weight_lost_achievement_kg: f64,
    /// Progress that earns a goal-progress achievement (percent)
    pub progress_achievement_percent: f64,
    /// Age assumed when the profile has neither age nor birth date
    pub fallback_age: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            min_days_for_rate: 7,
            on_track_ratio: 0.8,
            slow_progress_ratio: 0.5,
            streak_lookback_days: 30,
            consistent_streak_days: 7,
            default_completion_weeks: 52.0,
            weight_lost_achievement_kg: 1.0,
            progress_achievement_percent: 10.0,
            fallback_age: 25,
        }
    }
}
