// ABOUTME: Re-exports command modules for fitmind-cli
// ABOUTME: Provides access to calculator, planning, and trend commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

pub mod calculate;
pub mod plan;
pub mod trend;
