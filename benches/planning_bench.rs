// ABOUTME: Criterion benchmarks for planning and trend analysis algorithms
// ABOUTME: Measures plan computation, timeline generation, trend analysis, and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Criterion benchmarks for the planning engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_today, generate_history, generate_profiles, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitmind_engine::config::{PlannerConfig, TimelineConfig, TrendConfig};
use fitmind_engine::{Pace, TimelineGenerator, TrendAnalyzer, WeightLossPlanner};

fn bench_plans(c: &mut Criterion) {
    let planner = WeightLossPlanner::with_config(PlannerConfig::default());
    let profiles = generate_profiles();
    let today = bench_today();

    let mut group = c.benchmark_group("plan");
    group.throughput(Throughput::Elements(profiles.len() as u64));
    for pace in Pace::ALL {
        group.bench_with_input(BenchmarkId::new("pace", pace), &pace, |b, &pace| {
            b.iter(|| {
                for profile in &profiles {
                    let _ = black_box(planner.plan_as_of(black_box(profile), pace, None, today));
                }
            });
        });
    }
    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let generator = TimelineGenerator::with_config(TimelineConfig::default());
    let today = bench_today();

    c.bench_function("timeline_options", |b| {
        b.iter(|| generator.options_as_of(black_box(96.0), black_box(74.0), today));
    });
}

fn bench_trend(c: &mut Criterion) {
    let analyzer = TrendAnalyzer::with_config(TrendConfig::default());
    let today = bench_today();

    let mut group = c.benchmark_group("trend");
    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let history = generate_history(size, 0);
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size.label()), &history, |b, history| {
            b.iter(|| analyzer.analyze_as_of(black_box(history), 14, today));
        });
    }
    group.finish();
}

fn bench_trend_batch(c: &mut Criterion) {
    let analyzer = TrendAnalyzer::with_config(TrendConfig::default());
    let today = bench_today();
    let batch: Vec<_> = (0..256)
        .map(|seed| generate_history(HistorySize::Medium, seed))
        .collect();

    let mut group = c.benchmark_group("trend_batch");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            batch
                .iter()
                .map(|history| analyzer.analyze_as_of(history, 14, today))
                .collect::<Vec<_>>()
        });
    });
    group.bench_function("parallel", |b| {
        b.iter(|| analyzer.analyze_batch_as_of(black_box(&batch), today));
    });
    group.finish();
}

criterion_group!(benches, bench_plans, bench_timeline, bench_trend, bench_trend_batch);
criterion_main!(benches);
