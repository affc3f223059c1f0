// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet test logging, reference profiles, and dated weight series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitmind_engine`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{Days, NaiveDate};
use fitmind_engine::{ActivityLevel, Gender, ProgressProfile, UserProfile, WeightObservation};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference date so date arithmetic in assertions is stable
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// 80 kg -> 70 kg, 170 cm, 30-year-old moderately active man
pub fn reference_profile() -> UserProfile {
    UserProfile {
        current_weight_kg: 80.0,
        target_weight_kg: 70.0,
        height_cm: 170.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
    }
}

/// Stored profile matching `reference_profile`, started at 84 kg on New Year's Day
pub fn reference_progress_profile() -> ProgressProfile {
    ProgressProfile {
        start_weight_kg: 84.0,
        current_weight_kg: 80.0,
        target_weight_kg: 70.0,
        height_cm: 170.0,
        weekly_goal_kg: 0.5,
        target_calories: Some(1900.0),
        age: None,
        date_of_birth: NaiveDate::from_ymd_opt(1995, 1, 1),
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::Moderate),
        created_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    }
}

/// One observation per day, the last one dated `end`
pub fn daily_series(weights: &[f64], end: NaiveDate) -> Vec<WeightObservation> {
    let last = weights.len() as u64;
    weights
        .iter()
        .zip(1..=last)
        .map(|(&weight, n)| WeightObservation::new(weight, end - Days::new(last - n)))
        .collect()
}

/// Linear series of `days` daily readings changing by `per_day` kg, ending on `end`
pub fn linear_series(
    days: u32,
    start_kg: f64,
    per_day: f64,
    end: NaiveDate,
) -> Vec<WeightObservation> {
    let weights: Vec<f64> = (0..days)
        .map(|i| per_day.mul_add(f64::from(i), start_kg))
        .collect();
    daily_series(&weights, end)
}
