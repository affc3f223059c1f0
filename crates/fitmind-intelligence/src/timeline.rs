// ABOUTME: Timeline option generator offering discrete pace and duration choices
// ABOUTME: Combines fixed-pace scenarios with fixed-duration scenarios, deduplicated and sorted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::config::{EngineConfig, TimelineConfig};
use crate::numeric::round_to;
use crate::weight_loss_planner::weeks_needed;
use chrono::{Days, Months, NaiveDate, Utc};
use fitmind_core::constants::calendar;
use fitmind_core::Pace;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One selectable pace/duration choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineOption {
    /// Duration in weeks
    pub duration_weeks: u32,
    /// Date the target would be reached
    pub target_date: NaiveDate,
    /// Weekly loss rate (kg/week)
    pub weekly_loss_kg: f64,
    /// Pace bucket the rate falls into
    pub pace_label: Pace,
    /// Human-readable summary
    pub description: String,
    /// Whether the choice is suggested by default
    pub is_recommended: bool,
}

/// Generator for selectable pace/duration choices
#[derive(Debug, Clone)]
pub struct TimelineGenerator {
    config: TimelineConfig,
}

impl Default for TimelineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineGenerator {
    /// Create a generator using the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().timeline.clone())
    }

    /// Create a generator with explicit configuration
    #[must_use]
    pub const fn with_config(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// Options as of the current UTC date
    #[must_use]
    pub fn options(&self, current_weight_kg: f64, target_weight_kg: f64) -> Vec<TimelineOption> {
        self.options_as_of(current_weight_kg, target_weight_kg, Utc::now().date_naive())
    }

    /// Options as of an explicit date, sorted by ascending duration
    ///
    /// Empty when there is no weight to lose.
    #[must_use]
    pub fn options_as_of(
        &self,
        current_weight_kg: f64,
        target_weight_kg: f64,
        today: NaiveDate,
    ) -> Vec<TimelineOption> {
        let total = current_weight_kg - target_weight_kg;
        if total <= 0.0 {
            return Vec::new();
        }

        let mut candidates: Vec<TimelineOption> = Pace::ALL
            .iter()
            .map(|&pace| pace_option(pace, total, today))
            .collect();
        candidates.extend(
            self.config
                .fixed_timeframes_months
                .iter()
                .filter_map(|&months| self.timeframe_option(months, total, today)),
        );

        let threshold = i64::from(self.config.duplicate_threshold_weeks);
        let mut options: Vec<TimelineOption> = candidates
            .iter()
            .enumerate()
            .filter(|(index, option)| {
                !candidates[..*index].iter().any(|earlier| {
                    (i64::from(earlier.duration_weeks) - i64::from(option.duration_weeks)).abs()
                        < threshold
                })
            })
            .map(|(_, option)| option.clone())
            .collect();
        options.sort_by_key(|option| option.duration_weeks);

        debug!(
            candidates = candidates.len(),
            kept = options.len(),
            "Generated timeline options"
        );
        options
    }

    fn timeframe_option(
        &self,
        months: u32,
        total: f64,
        today: NaiveDate,
    ) -> Option<TimelineOption> {
        let weeks = f64::from(months) * calendar::WEEKS_PER_MONTH;
        let rate = total / weeks;
        if !(self.config.min_realistic_weekly_loss_kg..=self.config.max_realistic_weekly_loss_kg)
            .contains(&rate)
        {
            return None;
        }

        let duration_weeks = weeks.round() as u32;
        let target_date = today
            .checked_add_months(Months::new(months))
            .or_else(|| add_weeks(today, duration_weeks))
            .unwrap_or(NaiveDate::MAX);
        let weekly_loss_kg = round_to(rate, 2);

        Some(TimelineOption {
            duration_weeks,
            target_date,
            weekly_loss_kg,
            pace_label: Pace::for_weekly_loss(rate),
            description: format!("{} - {weekly_loss_kg} kg/week", timeframe_label(months)),
            is_recommended: (self.config.recommended_min_weekly_loss_kg
                ..=self.config.recommended_max_weekly_loss_kg)
                .contains(&rate),
        })
    }
}

fn pace_option(pace: Pace, total: f64, today: NaiveDate) -> TimelineOption {
    let rate = pace.weekly_loss_kg();
    let duration_weeks = weeks_needed(total, rate);
    TimelineOption {
        duration_weeks,
        target_date: add_weeks(today, duration_weeks).unwrap_or(NaiveDate::MAX),
        weekly_loss_kg: rate,
        pace_label: pace,
        description: format!("{} - {duration_weeks} weeks ({rate} kg/week)", pace.label()),
        is_recommended: pace == Pace::Moderate,
    }
}

fn add_weeks(date: NaiveDate, weeks: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(weeks) * calendar::DAYS_PER_WEEK))
}

fn timeframe_label(months: u32) -> String {
    match months {
        12 => "1 year".to_owned(),
        m if m % 12 == 0 => format!("{} years", m / 12),
        m => format!("{m} months"),
    }
}
