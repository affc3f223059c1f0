// ABOUTME: Integration tests for engine configuration loading and environment overrides
// ABOUTME: Tests override parsing, validation failures, and overrides flowing into services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_profile, today};
use fitmind_engine::config::WindowAnchor;
use fitmind_engine::{
    ConfigError, EngineConfig, Gender, Pace, PlanWarning, UserProfile, WeightLossPlanner,
};
use serial_test::serial;
use std::env;

const VARS: [&str; 8] = [
    "FITMIND_MIN_CALORIES_MALE",
    "FITMIND_MIN_CALORIES_FEMALE",
    "FITMIND_MAX_DAILY_DEFICIT",
    "FITMIND_MAX_WEEKLY_LOSS",
    "FITMIND_SLOW_WEEKLY_LOSS",
    "FITMIND_TREND_WINDOW_DAYS",
    "FITMIND_TREND_SMOOTHING_WINDOW",
    "FITMIND_TREND_WINDOW_ANCHOR",
];

/// Run `f` with the given overrides set, clearing every override afterwards
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    init_test_logging();
    for var in VARS {
        env::remove_var(var);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = f();
    for var in VARS {
        env::remove_var(var);
    }
    result
}

#[test]
#[serial]
fn test_no_overrides_loads_defaults() {
    let config = with_env(&[], EngineConfig::load).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_all_overrides_applied() {
    let config = with_env(
        &[
            ("FITMIND_MIN_CALORIES_MALE", "1600"),
            ("FITMIND_MIN_CALORIES_FEMALE", "1300"),
            ("FITMIND_MAX_DAILY_DEFICIT", "900"),
            ("FITMIND_MAX_WEEKLY_LOSS", "0.9"),
            ("FITMIND_SLOW_WEEKLY_LOSS", "0.3"),
            ("FITMIND_TREND_WINDOW_DAYS", "21"),
            ("FITMIND_TREND_SMOOTHING_WINDOW", "5"),
            ("FITMIND_TREND_WINDOW_ANCHOR", "latest"),
        ],
        EngineConfig::load,
    )
    .unwrap();

    assert!((config.planner.min_daily_calories_male - 1600.0).abs() < f64::EPSILON);
    assert!((config.planner.min_daily_calories_female - 1300.0).abs() < f64::EPSILON);
    assert!((config.planner.max_daily_deficit_kcal - 900.0).abs() < f64::EPSILON);
    assert!((config.planner.max_weekly_loss_kg - 0.9).abs() < f64::EPSILON);
    assert!((config.planner.slow_weekly_loss_kg - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.trend.recent_window_days, 21);
    assert_eq!(config.trend.smoothing_window, 5);
    assert_eq!(config.trend.window_anchor, WindowAnchor::LatestObservation);
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    let result = with_env(&[("FITMIND_SLOW_WEEKLY_LOSS", "2.0")], EngineConfig::load);
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_unknown_anchor_rejected() {
    let result = with_env(
        &[("FITMIND_TREND_WINDOW_ANCHOR", "yesterday")],
        EngineConfig::load,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("FITMIND_TREND_WINDOW_ANCHOR"));
}

#[test]
#[serial]
fn test_overridden_thresholds_change_plan_safety() {
    let config = with_env(&[("FITMIND_MAX_DAILY_DEFICIT", "500")], EngineConfig::load).unwrap();
    let planner = WeightLossPlanner::with_config(config.planner);

    let plan = planner
        .plan_as_of(&reference_profile(), Pace::Moderate, None, today())
        .unwrap();
    assert!(!plan.is_healthy_safe);
    assert!(plan
        .warnings
        .contains(&PlanWarning::DeficitTooAggressive { deficit_kcal: 825.0 }));

    // Raising the female floor flags an otherwise acceptable plan
    let config =
        with_env(&[("FITMIND_MIN_CALORIES_FEMALE", "2000")], EngineConfig::load).unwrap();
    let planner = WeightLossPlanner::with_config(config.planner);
    let profile = UserProfile {
        gender: Gender::Female,
        ..reference_profile()
    };
    let plan = planner
        .plan_as_of(&profile, Pace::Slow, None, today())
        .unwrap();
    assert!(plan
        .warnings
        .contains(&PlanWarning::BelowMinimumCalories { minimum_kcal: 2000.0 }));
}

#[test]
#[serial]
fn test_global_config_is_valid() {
    let config = with_env(&[], EngineConfig::global);
    assert!(config.validate().is_ok());
}
