// ABOUTME: Physiological constants used throughout the planning engine
// ABOUTME: Energy density, Mifflin-St Jeor coefficients, BMI bands, activity factors, pace table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Physiological constants based on nutrition research
//!
//! These values are fixed by the underlying science, not tuned per deployment.
//! Tunable safety thresholds live in the intelligence crate's configuration.

/// Energy balance constants
pub mod energy {
    /// Energy stored in one kilogram of body fat (kcal)
    /// Reference: Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
    pub const KCAL_PER_KG_FAT: f64 = 7700.0;

    /// Days in a week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Mifflin-St Jeor equation coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
/// expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// Coefficient applied to body weight (kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Coefficient applied to height (cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Coefficient applied to age (years)
    pub const AGE_COEF: f64 = -5.0;
    /// Constant term for men
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant term for women
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_factors {
    /// Little to no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Heavy exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Very heavy exercise, twice a day
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Body Mass Index bands (WHO classification)
pub mod bmi {
    /// Below this BMI a person is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this BMI (and at or above underweight) weight is normal
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// At or above this BMI a person is obese
    pub const OBESE_FROM: f64 = 30.0;
    /// Lower bound of the healthy reference range
    pub const HEALTHY_MIN: f64 = 18.5;
    /// Upper bound of the healthy reference range
    pub const HEALTHY_MAX: f64 = 24.9;
    /// BMI commonly used as the "ideal" point inside the healthy range
    pub const IDEAL: f64 = 22.0;
    /// No plan may target a BMI below this value
    pub const MIN_SAFE_TARGET: f64 = 16.0;
}

/// Fixed weekly-loss rates for each pace (kg/week)
pub mod pace_rates {
    /// Slow and safe
    pub const SLOW_KG_PER_WEEK: f64 = 0.5;
    /// Moderate and effective
    pub const MODERATE_KG_PER_WEEK: f64 = 0.75;
    /// Fast but safe
    pub const FAST_KG_PER_WEEK: f64 = 1.0;
}

/// Calendar approximations
pub mod calendar {
    /// Average number of weeks in a month
    pub const WEEKS_PER_MONTH: f64 = 4.33;
    /// Days in a week
    pub const DAYS_PER_WEEK: u64 = 7;
}
