// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable profile and weight-history generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
