// ABOUTME: Main library entry point for the FitMind weight-loss planning engine
// ABOUTME: Re-exports the core types and intelligence algorithms, plus logging and input helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![deny(unsafe_code)]

//! # FitMind Engine
//!
//! Weight-loss planning and weight-trend analysis for a personal fitness
//! application.
//!
//! ## Features
//!
//! - **Calculators**: BMR (Mifflin-St Jeor), TDEE, BMI and WHO category
//! - **Recommendations**: healthy target weights from height and current weight
//! - **Planning**: calorie-deficit plans with safety warnings, from a pace or a target date
//! - **Timeline**: deduplicated pace/duration choices for a selection list
//! - **Trend analysis**: real change vs daily fluctuation in a weight series
//! - **Progress insights**: numeric coaching context built from all of the above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitmind_engine::{ActivityLevel, Gender, Pace, UserProfile, WeightLossPlanner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = UserProfile {
//!     current_weight_kg: 80.0,
//!     target_weight_kg: 70.0,
//!     height_cm: 170.0,
//!     age: 30,
//!     gender: Gender::Male,
//!     activity_level: ActivityLevel::Moderate,
//! };
//!
//! let plan = WeightLossPlanner::new().plan(&profile, Pace::Moderate, None)?;
//! println!("{} kcal/day for {} weeks", plan.daily_calories, plan.estimated_duration_weeks);
//! # Ok(())
//! # }
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

/// JSON input loading for command-line and batch use
pub mod input;

pub use fitmind_core::{
    constants, ActivityLevel, Gender, Pace, ParseEnumError, UserProfile, ValidationError,
    WeightObservation,
};
pub use fitmind_intelligence::{
    age_on, bmi, bmi_category, bmr, config, interpret_trend, moving_average, tdee, Achievement,
    BmiCategory, BmiClassification, CalorieBreakdown, Challenge, Confidence, ConfigError,
    EngineConfig, PlanWarning, ProgressInsights, ProgressProfile, ProgressTracker,
    RecommendationWarning, SmoothedPoint, TargetEvaluation, TimelineGenerator, TimelineOption,
    TrendAnalysis, TrendAnalyzer, TrendColor, TrendInterpretation, TrendStatus,
    WeightLossPlanner, WeightLossResult, WeightRecommendation, WeightRecommendationEngine,
};
