// ABOUTME: Error types shared by every planning and parsing entry point
// ABOUTME: ValidationError rejects impossible plans, ParseEnumError rejects unknown enum names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Error Types
//!
//! Only caller-supplied values that violate a precondition are errors. Everything
//! short of invalid (aggressive deficits, low calories, BMI concerns) is reported as
//! a warning attached to a usable result instead.

use chrono::NaiveDate;
use thiserror::Error;

/// A caller-supplied value violates a planning precondition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The current weight is not above the target weight
    #[error("current weight ({current_kg} kg) must exceed target weight ({target_kg} kg)")]
    CurrentNotAboveTarget {
        /// Current body weight in kilograms
        current_kg: f64,
        /// Requested target weight in kilograms
        target_kg: f64,
    },

    /// The target weight implies a dangerously low BMI
    #[error("target weight is too low to be safe (BMI {target_bmi:.1}, minimum {minimum_bmi})")]
    TargetBmiTooLow {
        /// BMI implied by the target weight
        target_bmi: f64,
        /// Lowest BMI a plan may aim for
        minimum_bmi: f64,
    },

    /// The requested completion date is today or already past
    #[error("target date {target_date} must be in the future (today is {today})")]
    TargetDateNotInFuture {
        /// Requested completion date
        target_date: NaiveDate,
        /// Date the plan was computed on
        today: NaiveDate,
    },
}

impl ValidationError {
    /// Stable machine-readable code for API consumers
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CurrentNotAboveTarget { .. } => "CURRENT_NOT_ABOVE_TARGET",
            Self::TargetBmiTooLow { .. } => "TARGET_BMI_TOO_LOW",
            Self::TargetDateNotInFuture { .. } => "TARGET_DATE_NOT_IN_FUTURE",
        }
    }
}

/// A string did not name any variant of a closed enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. "pace")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings, comma separated
    pub expected: &'static str,
}

impl ParseEnumError {
    /// Create a parse error for the given enum kind
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}
