// ABOUTME: Timeline option generator configuration
// ABOUTME: Fixed timeframes, realistic-rate bounds, recommendation band, and duplicate spacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use serde::{Deserialize, Serialize};

/// Settings for enumerating pace/duration choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Fixed-duration scenarios, in months
    pub fixed_timeframes_months: Vec<u32>,
    /// Slowest implied rate still worth offering (kg/week)
    pub min_realistic_weekly_loss_kg: f64,
    /// Fastest implied rate still worth offering (kg/week)
    pub max_realistic_weekly_loss_kg: f64,
    /// Lower bound of the recommended band for fixed-duration entries (kg/week)
    pub recommended_min_weekly_loss_kg: f64,
    /// Upper bound of the recommended band for fixed-duration entries (kg/week)
    pub recommended_max_weekly_loss_kg: f64,
    /// Entries closer than this many weeks to an earlier one are dropped
    pub duplicate_threshold_weeks: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fixed_timeframes_months: vec![3, 6, 12],
            min_realistic_weekly_loss_kg: 0.2,
            max_realistic_weekly_loss_kg: 1.2,
            recommended_min_weekly_loss_kg: 0.4,
            recommended_max_weekly_loss_kg: 0.8,
            duplicate_threshold_weeks: 2,
        }
    }
}
