// ABOUTME: Engine configuration for weight-loss planning and trend analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `planner` - Safety thresholds and the diet/exercise deficit split
//! - `timeline` - Fixed timeframes and realistic-rate bounds
//! - `trend` - Smoothing width, recent-window anchoring, confidence thresholds
//! - `progress` - On-track, streak, and achievement thresholds
//!
//! Physiological constants (energy density of fat, BMI bands, pace rates, activity
//! multipliers) are not configurable; they live in `fitmind_core::constants`.

pub mod error;
pub mod planner;
pub mod progress;
pub mod timeline;
pub mod trend;

pub use error::ConfigError;
pub use planner::PlannerConfig;
pub use progress::ProgressConfig;
pub use timeline::TimelineConfig;
pub use trend::{TrendConfig, WindowAnchor};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration for the weight-loss planner
    pub planner: PlannerConfig,
    /// Configuration for timeline option generation
    pub timeline: TimelineConfig,
    /// Configuration for weight trend analysis
    pub trend: TrendConfig,
    /// Configuration for progress insights
    pub progress: ProgressConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_planner()?;
        self.validate_timeline()?;
        self.validate_trend()?;
        self.validate_progress()
    }

    fn validate_planner(&self) -> Result<(), ConfigError> {
        let planner = &self.planner;

        if planner.min_daily_calories_male <= 0.0 || planner.min_daily_calories_female <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum daily calories must be positive",
            ));
        }
        if planner.max_daily_deficit_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum daily deficit must be positive",
            ));
        }
        if planner.slow_weekly_loss_kg <= 0.0
            || planner.slow_weekly_loss_kg >= planner.max_weekly_loss_kg
        {
            return Err(ConfigError::InvalidRange(
                "slow_weekly_loss must be positive and < max_weekly_loss",
            ));
        }
        if !(0.0..=1.0).contains(&planner.diet_deficit_share)
            || !(0.0..=1.0).contains(&planner.exercise_deficit_share)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Deficit shares must be between 0.0 and 1.0",
            ));
        }
        if (planner.diet_deficit_share + planner.exercise_deficit_share - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Diet and exercise deficit shares must sum to 1.0",
            ));
        }

        Ok(())
    }

    fn validate_timeline(&self) -> Result<(), ConfigError> {
        let timeline = &self.timeline;

        if timeline.fixed_timeframes_months.contains(&0) {
            return Err(ConfigError::ValueOutOfRange(
                "Fixed timeframes must be at least one month",
            ));
        }
        if timeline.min_realistic_weekly_loss_kg >= timeline.max_realistic_weekly_loss_kg {
            return Err(ConfigError::InvalidRange(
                "min_realistic_weekly_loss must be < max_realistic_weekly_loss",
            ));
        }
        if timeline.recommended_min_weekly_loss_kg >= timeline.recommended_max_weekly_loss_kg {
            return Err(ConfigError::InvalidRange(
                "recommended_min_weekly_loss must be < recommended_max_weekly_loss",
            ));
        }

        Ok(())
    }

    fn validate_trend(&self) -> Result<(), ConfigError> {
        let trend = &self.trend;

        if trend.recent_window_days == 0 || trend.smoothing_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend window and smoothing width must be at least 1",
            ));
        }
        // Noise needs at least one day-to-day difference
        if trend.min_observations < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend analysis needs at least 2 observations",
            ));
        }
        if trend.medium_confidence_min_observations > trend.high_confidence_min_observations {
            return Err(ConfigError::InvalidRange(
                "medium_confidence_min_observations must be <= high_confidence_min_observations",
            ));
        }
        if trend.high_confidence_max_noise_kg > trend.medium_confidence_max_noise_kg {
            return Err(ConfigError::InvalidRange(
                "high_confidence_max_noise must be <= medium_confidence_max_noise",
            ));
        }

        Ok(())
    }

    fn validate_progress(&self) -> Result<(), ConfigError> {
        let progress = &self.progress;

        if progress.on_track_ratio <= 0.0 || progress.on_track_ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "on_track_ratio must be in (0.0, 1.0]",
            ));
        }
        if progress.slow_progress_ratio <= 0.0 || progress.slow_progress_ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "slow_progress_ratio must be in (0.0, 1.0]",
            ));
        }
        if progress.default_completion_weeks <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_completion_weeks must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Planner overrides
        Self::apply_env_var(
            "FITMIND_MIN_CALORIES_MALE",
            &mut self.planner.min_daily_calories_male,
        )?;
        Self::apply_env_var(
            "FITMIND_MIN_CALORIES_FEMALE",
            &mut self.planner.min_daily_calories_female,
        )?;
        Self::apply_env_var(
            "FITMIND_MAX_DAILY_DEFICIT",
            &mut self.planner.max_daily_deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITMIND_MAX_WEEKLY_LOSS",
            &mut self.planner.max_weekly_loss_kg,
        )?;
        Self::apply_env_var(
            "FITMIND_SLOW_WEEKLY_LOSS",
            &mut self.planner.slow_weekly_loss_kg,
        )?;

        // Trend overrides
        Self::apply_env_var(
            "FITMIND_TREND_WINDOW_DAYS",
            &mut self.trend.recent_window_days,
        )?;
        Self::apply_env_var(
            "FITMIND_TREND_SMOOTHING_WINDOW",
            &mut self.trend.smoothing_window,
        )?;
        Self::apply_env_var(
            "FITMIND_TREND_WINDOW_ANCHOR",
            &mut self.trend.window_anchor,
        )?;

        Ok(self)
    }
}
