// ABOUTME: Weight trend analyzer separating real weight change from daily fluctuation
// ABOUTME: Trailing moving average, recent-window change, noise estimate, and confidence grading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Weight Trend Analyzer
//!
//! Day-to-day scale readings swing by a kilogram or more from water and food
//! mass alone. The analyzer smooths the series with a trailing moving average and
//! compares the smoothed values across a recent window to decide whether the
//! change is real or just noise.
//!
//! The analyzer never fails: sparse input degrades to a low-confidence result.
//! Input is expected in ascending date order; unsorted input is stably re-sorted
//! first.

use crate::config::{EngineConfig, TrendConfig, WindowAnchor};
use chrono::{Days, NaiveDate, Utc};
use fitmind_core::WeightObservation;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Confidence in a trend assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Plenty of recent readings with low fluctuation
    High,
    /// Enough recent readings with moderate fluctuation
    Medium,
    /// Too little data or too much fluctuation
    Low,
}

/// A raw observation paired with its smoothed value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    /// Date of the observation
    pub date: NaiveDate,
    /// Raw weight (kg)
    pub weight_kg: f64,
    /// Trailing moving average ending at this observation (kg)
    pub smoothed_kg: f64,
}

/// Result of analyzing a weight series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Latest smoothed weight (kg)
    pub current_trend_kg: f64,
    /// Smoothed change across the recent window (kg, negative means loss)
    pub real_change_kg: f64,
    /// Confidence in the assessment
    pub confidence: Confidence,
    /// Whether the recent change is most likely fluctuation
    pub is_noise: bool,
    /// Every observation with its smoothed value, in date order
    pub smoothed_series: Vec<SmoothedPoint>,
}

/// Trailing moving average over `window` observations
///
/// The window counts observations, not days. Early points average whatever is
/// available, so the output always has one point per input observation.
#[must_use]
pub fn moving_average(observations: &[WeightObservation], window: usize) -> Vec<SmoothedPoint> {
    let window = window.max(1);
    observations
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            let slice = &observations[(i + 1).saturating_sub(window)..=i];
            let sum: f64 = slice.iter().map(|o| o.weight_kg).sum();
            SmoothedPoint {
                date: obs.date,
                weight_kg: obs.weight_kg,
                smoothed_kg: sum / slice.len() as f64,
            }
        })
        .collect()
}

/// Borrow the input when already ascending by date, otherwise return a stably sorted copy
pub(crate) fn ensure_ascending(observations: &[WeightObservation]) -> Cow<'_, [WeightObservation]> {
    if observations.windows(2).all(|pair| pair[0].date <= pair[1].date) {
        return Cow::Borrowed(observations);
    }

    debug!(
        observations = observations.len(),
        "Weight observations out of date order, sorting before analysis"
    );
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|obs| obs.date);
    Cow::Owned(sorted)
}

/// Weight trend analysis service
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Create an analyzer using the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().trend.clone())
    }

    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Analyze as of the current UTC date
    #[must_use]
    pub fn analyze(
        &self,
        observations: &[WeightObservation],
        recent_window_days: u32,
    ) -> TrendAnalysis {
        self.analyze_as_of(observations, recent_window_days, Utc::now().date_naive())
    }

    /// Analyze as of an explicit date
    ///
    /// The recent window holds observations dated strictly after
    /// `anchor - recent_window_days`, where the anchor is `today` or the newest
    /// observation depending on [`WindowAnchor`].
    #[must_use]
    pub fn analyze_as_of(
        &self,
        observations: &[WeightObservation],
        recent_window_days: u32,
        today: NaiveDate,
    ) -> TrendAnalysis {
        let observations = ensure_ascending(observations);

        if observations.len() < self.config.min_observations {
            return TrendAnalysis {
                current_trend_kg: observations.last().map_or(0.0, |obs| obs.weight_kg),
                real_change_kg: 0.0,
                confidence: Confidence::Low,
                is_noise: true,
                smoothed_series: moving_average(&observations, 1),
            };
        }

        let smoothed = moving_average(&observations, self.config.smoothing_window);
        let current_trend_kg = smoothed.last().map_or(0.0, |point| point.smoothed_kg);

        let anchor = match self.config.window_anchor {
            WindowAnchor::Today => today,
            WindowAnchor::LatestObservation => observations.last().map_or(today, |obs| obs.date),
        };
        let start = anchor
            .checked_sub_days(Days::new(u64::from(recent_window_days)))
            .map_or(0, |cutoff| smoothed.partition_point(|point| point.date <= cutoff));
        let recent = &smoothed[start..];

        let sparse = recent.len() < self.config.min_observations;
        let (false, [first, .., last]) = (sparse, recent) else {
            debug!(
                in_window = recent.len(),
                recent_window_days, "Too few recent observations for a trend"
            );
            return TrendAnalysis {
                current_trend_kg,
                real_change_kg: 0.0,
                confidence: Confidence::Low,
                is_noise: true,
                smoothed_series: smoothed,
            };
        };
        let real_change_kg = last.smoothed_kg - first.smoothed_kg;
        let daily_noise_kg = recent
            .windows(2)
            .map(|pair| (pair[1].weight_kg - pair[0].weight_kg).abs())
            .sum::<f64>()
            / (recent.len() - 1) as f64;

        let confidence = self.grade(recent.len(), daily_noise_kg);
        let is_noise = real_change_kg.abs() < self.config.noise_change_threshold_kg
            || daily_noise_kg > real_change_kg.abs();

        debug!(
            real_change_kg,
            daily_noise_kg,
            ?confidence,
            is_noise,
            "Analyzed weight trend"
        );

        TrendAnalysis {
            current_trend_kg,
            real_change_kg,
            confidence,
            is_noise,
            smoothed_series: smoothed,
        }
    }

    /// Analyze many independent series in parallel, preserving input order
    #[must_use]
    pub fn analyze_batch(&self, series: &[Vec<WeightObservation>]) -> Vec<TrendAnalysis> {
        self.analyze_batch_as_of(series, Utc::now().date_naive())
    }

    /// Parallel batch analysis with the configured window as of an explicit date
    #[must_use]
    pub fn analyze_batch_as_of(
        &self,
        series: &[Vec<WeightObservation>],
        today: NaiveDate,
    ) -> Vec<TrendAnalysis> {
        series
            .par_iter()
            .map(|observations| {
                self.analyze_as_of(observations, self.config.recent_window_days, today)
            })
            .collect()
    }

    fn grade(&self, in_window: usize, daily_noise_kg: f64) -> Confidence {
        if in_window >= self.config.high_confidence_min_observations
            && daily_noise_kg < self.config.high_confidence_max_noise_kg
        {
            Confidence::High
        } else if in_window >= self.config.medium_confidence_min_observations
            && daily_noise_kg < self.config.medium_confidence_max_noise_kg
        {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
