// ABOUTME: Configuration error types for engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, share weights, and environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Configuration error types for engine configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds are inverted or overlap (e.g., min >= max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to the required total (e.g., diet + exercise != 1.0)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
