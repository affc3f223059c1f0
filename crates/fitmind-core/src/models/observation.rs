// ABOUTME: Weight observation model, one raw scale reading on a calendar date
// ABOUTME: Input unit for trend analysis and progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightObservation {
    /// Measured weight in kilograms
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// Calendar date of the measurement
    pub date: NaiveDate,
}

impl WeightObservation {
    /// Create a new observation
    #[must_use]
    pub const fn new(weight_kg: f64, date: NaiveDate) -> Self {
        Self { weight_kg, date }
    }
}
