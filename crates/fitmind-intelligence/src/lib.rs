// ABOUTME: Weight-loss planning and weight-trend analysis engine
// ABOUTME: Pure, synchronous algorithms over immutable profile and weight-history inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![deny(unsafe_code)]

//! # FitMind Intelligence
//!
//! Two independent branches share this crate:
//!
//! - **Planning**: profile → anthropometric calculators → recommendation engine,
//!   weight-loss planner, timeline options (a point-in-time plan)
//! - **Trend**: weight history → trend analyzer → trend interpreter (a longitudinal assessment)
//!
//! `progress` joins them into the numeric coaching context. Every entry point is a
//! pure function or a method on an immutable, `Send + Sync` service value; nothing
//! here performs I/O or holds mutable state.

/// Engine configuration (safety thresholds, trend windows, progress thresholds)
pub mod config;

/// BMR, TDEE, BMI, BMI category, and age calculators
pub mod anthropometrics;

/// Healthy target-weight recommendations
pub mod recommendation_engine;

/// Calorie-deficit planning under safety constraints
pub mod weight_loss_planner;

/// Discrete pace/duration choices for selection lists
pub mod timeline;

/// Smoothing and real-change vs noise classification of weight series
pub mod trend_analyzer;

/// Qualitative status for a trend analysis
pub mod trend_interpreter;

/// Numeric coaching context built from profile, history, and a plan
pub mod progress;

mod numeric;

pub use anthropometrics::{age_on, bmi, bmi_category, bmr, tdee, BmiCategory, BmiClassification};
pub use config::{ConfigError, EngineConfig};
pub use progress::{Achievement, Challenge, ProgressInsights, ProgressProfile, ProgressTracker};
pub use recommendation_engine::{
    RecommendationWarning, TargetEvaluation, WeightRecommendation, WeightRecommendationEngine,
};
pub use timeline::{TimelineGenerator, TimelineOption};
pub use trend_analyzer::{moving_average, Confidence, SmoothedPoint, TrendAnalysis, TrendAnalyzer};
pub use trend_interpreter::{interpret_trend, TrendColor, TrendInterpretation, TrendStatus};
pub use weight_loss_planner::{CalorieBreakdown, PlanWarning, WeightLossPlanner, WeightLossResult};
