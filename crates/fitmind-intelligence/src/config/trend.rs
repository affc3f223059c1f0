// ABOUTME: Trend analyzer configuration for smoothing, windowing, and confidence thresholds
// ABOUTME: Configures moving-average width, recent-window anchoring, and noise classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Trend Analyzer Configuration
//!
//! Thresholds for separating genuine weight change from day-to-day fluctuation
//! (water, food mass, scale placement).

use fitmind_core::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date the recent window is measured back from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAnchor {
    /// The wall-clock (or caller-supplied) current date
    Today,
    /// The date of the newest observation, for feeds that lag behind real time
    LatestObservation,
}

impl fmt::Display for WindowAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Today => "today",
            Self::LatestObservation => "latest_observation",
        })
    }
}

impl FromStr for WindowAnchor {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" | "now" => Ok(Self::Today),
            "latest_observation" | "latest" => Ok(Self::LatestObservation),
            _ => Err(ParseEnumError::new(
                "window anchor",
                s,
                "today, latest_observation",
            )),
        }
    }
}

/// Trend analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Default recent window when the caller does not pass one (days)
    pub recent_window_days: u32,
    /// Trailing moving-average width (observations, not days)
    pub smoothing_window: usize,
    /// Fewer observations than this (overall or in-window) yields a low-confidence result
    pub min_observations: usize,
    /// In-window observations needed for high confidence
    pub high_confidence_min_observations: usize,
    /// Mean daily fluctuation must stay below this for high confidence (kg)
    pub high_confidence_max_noise_kg: f64,
    /// In-window observations needed for medium confidence
    pub medium_confidence_min_observations: usize,
    /// Mean daily fluctuation must stay below this for medium confidence (kg)
    pub medium_confidence_max_noise_kg: f64,
    /// Smoothed changes smaller than this are always noise (kg)
    pub noise_change_threshold_kg: f64,
    /// Where the recent window is anchored
    pub window_anchor: WindowAnchor,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 14,
            smoothing_window: 7,
            min_observations: 3,
            high_confidence_min_observations: 14,
            high_confidence_max_noise_kg: 0.5,
            medium_confidence_min_observations: 7,
            medium_confidence_max_noise_kg: 1.0,
            noise_change_threshold_kg: 0.3,
            window_anchor: WindowAnchor::Today,
        }
    }
}
