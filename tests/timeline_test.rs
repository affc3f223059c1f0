// ABOUTME: Integration tests for timeline option generation
// ABOUTME: Tests spacing, ordering, recommendation flags, and agreement with the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_profile, today};
use fitmind_engine::config::{PlannerConfig, TimelineConfig};
use fitmind_engine::{Pace, TimelineGenerator, UserProfile, WeightLossPlanner};

fn generator() -> TimelineGenerator {
    init_test_logging();
    TimelineGenerator::with_config(TimelineConfig::default())
}

#[test]
fn test_durations_spaced_and_sorted_for_many_goals() {
    let generator = generator();
    for tenths in (5..=600_u32).step_by(5) {
        let to_lose = f64::from(tenths) / 10.0;
        let options = generator.options_as_of(120.0, 120.0 - to_lose, today());

        assert!(!options.is_empty(), "{to_lose} kg");
        for pair in options.windows(2) {
            assert!(
                pair[0].duration_weeks + 2 <= pair[1].duration_weeks,
                "{to_lose} kg: {} then {}",
                pair[0].duration_weeks,
                pair[1].duration_weeks
            );
        }
    }
}

#[test]
fn test_fixed_timeframes_stay_realistic() {
    let generator = generator();
    for to_lose in [3.0, 8.0, 15.0, 30.0, 45.0] {
        for option in generator.options_as_of(110.0, 110.0 - to_lose, today()) {
            assert!(
                (0.2..=1.2).contains(&option.weekly_loss_kg),
                "{to_lose} kg: {option:?}"
            );
        }
    }
}

#[test]
fn test_pace_entries_agree_with_planner() {
    let planner = WeightLossPlanner::with_config(PlannerConfig::default());
    let profile = reference_profile();
    let options = generator().options_as_of(
        profile.current_weight_kg,
        profile.target_weight_kg,
        today(),
    );

    for pace in Pace::ALL {
        let plan = planner.plan_as_of(&profile, pace, None, today()).unwrap();
        let option = options
            .iter()
            .find(|o| o.duration_weeks == plan.estimated_duration_weeks)
            .unwrap();
        assert_eq!(option.target_date, plan.target_date);
    }
}

#[test]
fn test_only_moderate_pace_recommended_among_paces() {
    let options = generator().options_as_of(100.0, 90.0, today());
    let recommended: Vec<&str> = options
        .iter()
        .filter(|o| o.is_recommended && o.description.contains("weeks ("))
        .map(|o| o.description.as_str())
        .collect();
    assert_eq!(recommended, vec!["Moderate and effective - 14 weeks (0.75 kg/week)"]);
}

#[test]
fn test_serializes_snake_case_pace() {
    let profile = UserProfile {
        current_weight_kg: 75.0,
        ..reference_profile()
    };
    let options = generator().options_as_of(
        profile.current_weight_kg,
        profile.target_weight_kg,
        today(),
    );
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json[0]["pace_label"], "fast");
}
