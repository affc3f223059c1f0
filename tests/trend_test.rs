// ABOUTME: Integration tests for weight trend analysis and interpretation
// ABOUTME: Tests noise vs real change, confidence grading, window anchoring, and batch analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Days;
use common::{daily_series, init_test_logging, linear_series, today};
use fitmind_engine::config::{TrendConfig, WindowAnchor};
use fitmind_engine::{
    interpret_trend, moving_average, Confidence, TrendAnalyzer, TrendColor, TrendStatus,
    WeightObservation,
};

fn analyzer() -> TrendAnalyzer {
    init_test_logging();
    TrendAnalyzer::with_config(TrendConfig::default())
}

#[test]
fn test_oscillation_reads_as_stable() {
    let weights: Vec<f64> = (0..20)
        .map(|i| if i % 2 == 0 { 80.2 } else { 79.8 })
        .collect();
    let analysis = analyzer().analyze_as_of(&daily_series(&weights, today()), 14, today());

    assert!(analysis.is_noise);
    assert_ne!(analysis.confidence, Confidence::Low);

    let reading = interpret_trend(&analysis);
    assert_eq!(reading.status, TrendStatus::Stable);
    assert_eq!(reading.color, TrendColor::Gray);
}

#[test]
fn test_steady_decline_reads_as_loss() {
    let series = linear_series(14, 82.0, -0.15, today());
    let analysis = analyzer().analyze_as_of(&series, 14, today());

    // Raw drop is 1.95 kg but the 7-point trailing average lags: 82.0 -> 80.5
    assert!((analysis.real_change_kg + 1.5).abs() < 1e-9);
    assert!(!analysis.is_noise);
    assert_eq!(analysis.confidence, Confidence::High);

    let reading = interpret_trend(&analysis);
    assert_eq!(reading.color, TrendColor::Green);
    assert_eq!(reading.message, "Real loss of 1.5 kg");
}

#[test]
fn test_week_of_gain_reads_as_gain_with_medium_confidence() {
    let series = linear_series(8, 70.0, 0.2, today());
    let analysis = analyzer().analyze_as_of(&series, 14, today());

    assert_eq!(analysis.confidence, Confidence::Medium);
    let reading = interpret_trend(&analysis);
    assert_eq!(reading.status, TrendStatus::Gaining);
    assert_eq!(reading.color, TrendColor::Red);
}

#[test]
fn test_smoothed_series_covers_every_observation() {
    let series = linear_series(40, 90.0, -0.05, today());
    let analysis = analyzer().analyze_as_of(&series, 14, today());

    assert_eq!(analysis.smoothed_series.len(), series.len());
    let expected = moving_average(&series, 7);
    assert_eq!(analysis.smoothed_series, expected);
    assert!(
        (analysis.current_trend_kg - expected.last().unwrap().smoothed_kg).abs() < f64::EPSILON
    );
}

#[test]
fn test_lagging_feed_needs_latest_observation_anchor() {
    // Readings stopped three weeks ago
    let series = linear_series(14, 85.0, -0.1, today() - Days::new(21));

    let today_anchored = analyzer().analyze_as_of(&series, 14, today());
    assert_eq!(today_anchored.confidence, Confidence::Low);
    assert!(today_anchored.is_noise);

    let latest_anchored = TrendAnalyzer::with_config(TrendConfig {
        window_anchor: WindowAnchor::LatestObservation,
        ..TrendConfig::default()
    })
    .analyze_as_of(&series, 14, today());
    assert_eq!(latest_anchored.confidence, Confidence::High);
    assert!(!latest_anchored.is_noise);
}

#[test]
fn test_batch_matches_individual_analysis() {
    let analyzer = analyzer();
    let batch: Vec<Vec<WeightObservation>> = (0..16_u32)
        .map(|i| linear_series(10 + i, 70.0 + f64::from(i), -0.05 * f64::from(i % 3), today()))
        .collect();

    let results = analyzer.analyze_batch_as_of(&batch, today());
    assert_eq!(results.len(), batch.len());
    for (series, result) in batch.iter().zip(&results) {
        let single = analyzer.analyze_as_of(series, analyzer.config().recent_window_days, today());
        assert_eq!(&single, result);
    }
}

#[test]
fn test_duplicate_dates_are_tolerated() {
    let mut series = daily_series(&[80.0, 79.8, 79.9, 79.7], today());
    series.push(WeightObservation::new(79.6, today()));
    let analysis = analyzer().analyze_as_of(&series, 14, today());
    assert_eq!(analysis.smoothed_series.len(), 5);
}
