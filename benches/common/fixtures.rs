// ABOUTME: Benchmark fixtures generating realistic profiles and weight histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Benchmark fixtures for generating realistic weight-loss data.

use chrono::{Days, NaiveDate};
use fitmind_engine::{ActivityLevel, Gender, UserProfile, WeightObservation};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Two weeks of daily logging
    Small,
    /// A quarter of daily logging (the usual query range)
    Medium,
    /// Two years of daily logging
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Small => 14,
            Self::Medium => 90,
            Self::Large => 730,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "14d",
            Self::Medium => "90d",
            Self::Large => "730d",
        }
    }
}

/// Fixed anchor date so every run analyzes the same window
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or(NaiveDate::MIN)
}

/// Profiles covering both sexes and every activity level
#[must_use]
pub fn generate_profiles() -> Vec<UserProfile> {
    let mut profiles = Vec::new();
    for (index, activity_level) in ActivityLevel::ALL.into_iter().enumerate() {
        for gender in [Gender::Male, Gender::Female] {
            let offset = index as f64 * 6.0;
            profiles.push(UserProfile {
                current_weight_kg: 78.0 + offset,
                target_weight_kg: 66.0 + offset / 2.0,
                height_cm: 160.0 + offset,
                age: 25 + index as u32 * 8,
                gender,
                activity_level,
            });
        }
    }
    profiles
}

/// Daily readings with a slow downward drift plus a deterministic water-weight wobble
#[must_use]
pub fn generate_history(size: HistorySize, seed: usize) -> Vec<WeightObservation> {
    let days = size.days();
    let today = bench_today();
    (0..days)
        .map(|index| {
            let drift = index as f64 * 0.04;
            let wobble = ((index * 7 + seed * 13) % 11) as f64 / 10.0 - 0.5;
            let date = today
                .checked_sub_days(Days::new((days - 1 - index) as u64))
                .unwrap_or(today);
            WeightObservation::new(92.0 - drift + wobble, date)
        })
        .collect()
}
