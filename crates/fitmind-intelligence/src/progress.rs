// ABOUTME: Progress insights combining a profile, weight history, trend analysis, and a fresh plan
// ABOUTME: Computes loss, pace, streaks, completion estimate, challenges, and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Progress Insights
//!
//! Produces the numeric coaching context a text generator can narrate. The
//! tracker borrows an existing planner and analyzer; it never builds its own.

use crate::anthropometrics::{age_on, bmi, bmi_category, BmiCategory};
use crate::config::{EngineConfig, ProgressConfig};
use crate::numeric::round_to;
use crate::trend_analyzer::{ensure_ascending, TrendAnalysis, TrendAnalyzer};
use crate::trend_interpreter::{interpret_trend, TrendInterpretation};
use crate::weight_loss_planner::WeightLossPlanner;
use chrono::{Days, NaiveDate};
use fitmind_core::constants::energy;
use fitmind_core::{ActivityLevel, Gender, Pace, UserProfile, WeightObservation};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Stored profile the insights are computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressProfile {
    /// Weight when the user started (kg); zero means "use the first logged weight"
    pub start_weight_kg: f64,
    /// Weight recorded on the profile (kg)
    pub current_weight_kg: f64,
    /// Goal weight (kg)
    pub target_weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Planned weekly loss (kg/week)
    pub weekly_goal_kg: f64,
    /// Previously stored calorie target, used when a plan cannot be recomputed
    #[serde(default)]
    pub target_calories: Option<f64>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Birth date, used when `age` is absent
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Biological sex
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Activity level, moderate when absent; legacy spellings are accepted
    #[serde(default, deserialize_with = "lossy_activity_level")]
    pub activity_level: Option<ActivityLevel>,
    /// Date the profile was created
    pub created_on: NaiveDate,
}

/// Stored profiles predate the closed activity enum and may hold free-form names
fn lossy_activity_level<'de, D>(deserializer: D) -> Result<Option<ActivityLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(ActivityLevel::from_str_lossy))
}

/// Something holding progress back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Challenge {
    /// Total loss is below 80% of what the weekly goal implies
    BehindWeeklyTarget,
    /// Average weekly loss is under half the weekly goal
    SlowerThanPlanned,
    /// Logging streak is shorter than a week
    InconsistentLogging,
    /// The smoothed trend is moving upward
    TrendSlowing,
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BehindWeeklyTarget => "Not meeting the weekly loss target",
            Self::SlowerThanPlanned => "Losing weight more slowly than planned",
            Self::InconsistentLogging => "Inconsistent weight logging",
            Self::TrendSlowing => "The downward trend is slowing",
        })
    }
}

/// Something worth celebrating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Achievement {
    /// At least a kilogram lost
    WeightLost {
        /// Total loss (kg)
        kg: f64,
    },
    /// At least a week of consecutive logging
    LoggingStreak {
        /// Streak length (days)
        days: u32,
    },
    /// At least 10% of the way to the goal
    GoalProgress {
        /// Progress toward the goal (percent)
        percent: f64,
    },
    /// Meeting the weekly goal with some loss recorded
    OnTrack,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLost { kg } => write!(f, "Lost {kg:.1} kg"),
            Self::LoggingStreak { days } => write!(f, "{days} consecutive days of logging"),
            Self::GoalProgress { percent } => write!(f, "{percent:.0}% of the way to the goal"),
            Self::OnTrack => f.write_str("Meeting the weekly goals"),
        }
    }
}

/// Numeric coaching context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressInsights {
    /// Loss since the start weight, never negative (kg)
    pub total_weight_loss_kg: f64,
    /// Average loss per week once a week of history exists (kg/week)
    pub avg_weekly_loss_kg: f64,
    /// Share of the goal reached, 0 to 100
    pub progress_percentage: f64,
    /// Whether the loss keeps pace with the weekly goal
    pub is_on_track: bool,
    /// Number of logged entries
    pub days_active: usize,
    /// Days between the first and latest entry (at least 1)
    pub days_elapsed: i64,
    /// Consecutive logged days ending today
    pub streak_days: u32,
    /// BMI at the latest weight
    pub current_bmi: f64,
    /// Category of the current BMI
    pub bmi_category: BmiCategory,
    /// Projected date the goal is reached
    pub estimated_completion_date: NaiveDate,
    /// Obstacles detected in the history
    pub challenges: Vec<Challenge>,
    /// Milestones reached
    pub achievements: Vec<Achievement>,
    /// Daily calorie target from a fresh moderate-pace plan, or the stored target
    pub daily_calorie_target: Option<f64>,
    /// Trend analysis of the history
    pub trend: TrendAnalysis,
    /// Interpretation of the trend
    pub trend_interpretation: TrendInterpretation,
}

/// Builds progress insights from borrowed planning and trend services
#[derive(Debug, Clone)]
pub struct ProgressTracker<'a> {
    planner: &'a WeightLossPlanner,
    analyzer: &'a TrendAnalyzer,
    config: ProgressConfig,
}

impl<'a> ProgressTracker<'a> {
    /// Create a tracker using the global progress configuration
    #[must_use]
    pub fn new(planner: &'a WeightLossPlanner, analyzer: &'a TrendAnalyzer) -> Self {
        Self::with_config(planner, analyzer, EngineConfig::global().progress.clone())
    }

    /// Create a tracker with explicit configuration
    #[must_use]
    pub const fn with_config(
        planner: &'a WeightLossPlanner,
        analyzer: &'a TrendAnalyzer,
        config: ProgressConfig,
    ) -> Self {
        Self {
            planner,
            analyzer,
            config,
        }
    }

    /// Compute insights for a profile and its weight history as of `today`
    #[must_use]
    pub fn insights(
        &self,
        profile: &ProgressProfile,
        entries: &[WeightObservation],
        today: NaiveDate,
    ) -> ProgressInsights {
        let entries = ensure_ascending(entries);
        let first = entries.first();
        let latest = entries.last();

        let start_weight = if profile.start_weight_kg > 0.0 {
            profile.start_weight_kg
        } else {
            first.map_or(profile.current_weight_kg, |obs| obs.weight_kg)
        };
        let current_weight = latest.map_or(profile.current_weight_kg, |obs| obs.weight_kg);
        let target_weight = profile.target_weight_kg;

        let total_weight_loss_kg = (start_weight - current_weight).max(0.0);
        let total_to_lose = start_weight - target_weight;
        let progress_percentage = if total_to_lose > 0.0 {
            (total_weight_loss_kg / total_to_lose * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let (period_start, period_end) = match (first, latest) {
            (Some(first), Some(latest)) => (first.date, latest.date),
            _ => (profile.created_on, today),
        };
        let days_elapsed = (period_end - period_start).num_days().max(1);
        let weeks_elapsed = (days_elapsed as f64 / energy::DAYS_PER_WEEK).max(0.1);
        let has_rate_history = days_elapsed >= self.config.min_days_for_rate;

        let avg_weekly_loss_kg = if has_rate_history && total_weight_loss_kg > 0.0 {
            total_weight_loss_kg / weeks_elapsed
        } else {
            0.0
        };
        let is_on_track = !has_rate_history
            || total_weight_loss_kg
                >= weeks_elapsed * profile.weekly_goal_kg * self.config.on_track_ratio;

        let current_bmi = bmi(current_weight, profile.height_cm);
        let remaining = (current_weight - target_weight).max(0.0);
        let estimated_completion_date =
            self.completion_date(remaining, avg_weekly_loss_kg, profile.weekly_goal_kg, today);
        let streak_days = self.streak(&entries, today);

        let trend = self.analyzer.analyze_as_of(
            &entries,
            self.analyzer.config().recent_window_days,
            today,
        );
        let trend_interpretation = interpret_trend(&trend);

        let mut challenges = Vec::new();
        if !is_on_track && has_rate_history {
            challenges.push(Challenge::BehindWeeklyTarget);
        }
        if avg_weekly_loss_kg > 0.0
            && avg_weekly_loss_kg < profile.weekly_goal_kg * self.config.slow_progress_ratio
        {
            challenges.push(Challenge::SlowerThanPlanned);
        }
        if streak_days < self.config.consistent_streak_days {
            challenges.push(Challenge::InconsistentLogging);
        }
        if trend.real_change_kg > 0.0 {
            challenges.push(Challenge::TrendSlowing);
        }

        let mut achievements = Vec::new();
        if total_weight_loss_kg >= self.config.weight_lost_achievement_kg {
            achievements.push(Achievement::WeightLost {
                kg: round_to(total_weight_loss_kg, 1),
            });
        }
        if streak_days >= self.config.consistent_streak_days {
            achievements.push(Achievement::LoggingStreak { days: streak_days });
        }
        if progress_percentage >= self.config.progress_achievement_percent {
            achievements.push(Achievement::GoalProgress {
                percent: progress_percentage.round(),
            });
        }
        if is_on_track && total_weight_loss_kg > 0.0 {
            achievements.push(Achievement::OnTrack);
        }

        debug!(
            total_weight_loss_kg,
            avg_weekly_loss_kg,
            streak_days,
            challenges = challenges.len(),
            achievements = achievements.len(),
            "Computed progress insights"
        );

        ProgressInsights {
            total_weight_loss_kg,
            avg_weekly_loss_kg,
            progress_percentage,
            is_on_track,
            days_active: entries.len(),
            days_elapsed,
            streak_days,
            current_bmi,
            bmi_category: bmi_category(current_bmi).category,
            estimated_completion_date,
            challenges,
            achievements,
            daily_calorie_target: self.calorie_target(profile, today),
            trend,
            trend_interpretation,
        }
    }

    fn completion_date(
        &self,
        remaining: f64,
        avg_weekly_loss: f64,
        weekly_goal: f64,
        today: NaiveDate,
    ) -> NaiveDate {
        let weeks = if avg_weekly_loss > 0.0 && remaining > 0.0 {
            remaining / avg_weekly_loss
        } else if weekly_goal > 0.0 {
            remaining / weekly_goal
        } else {
            self.config.default_completion_weeks
        };
        let days = (weeks * energy::DAYS_PER_WEEK).round().max(0.0) as u64;
        today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Consecutive days ending `today` that have at least one entry
    fn streak(&self, entries: &[WeightObservation], today: NaiveDate) -> u32 {
        let logged: HashSet<NaiveDate> = entries.iter().map(|obs| obs.date).collect();
        (0..self.config.streak_lookback_days)
            .map_while(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
            .take_while(|day| logged.contains(day))
            .count() as u32
    }

    /// Recompute the calorie target through the injected planner at moderate pace
    fn calorie_target(&self, profile: &ProgressProfile, today: NaiveDate) -> Option<f64> {
        let Some(gender) = profile.gender else {
            return profile.target_calories;
        };
        let age = profile
            .age
            .or_else(|| profile.date_of_birth.map(|dob| age_on(dob, today)))
            .filter(|&age| age > 0)
            .unwrap_or(self.config.fallback_age);
        let user = UserProfile {
            current_weight_kg: profile.current_weight_kg,
            target_weight_kg: profile.target_weight_kg,
            height_cm: profile.height_cm,
            age,
            gender,
            activity_level: profile.activity_level.unwrap_or(ActivityLevel::Moderate),
        };

        match self.planner.plan_as_of(&user, Pace::Moderate, None, today) {
            Ok(plan) => Some(plan.daily_calories),
            Err(err) => {
                debug!(
                    code = err.code(),
                    "Plan not recomputable, using stored calorie target"
                );
                profile.target_calories
            }
        }
    }
}
