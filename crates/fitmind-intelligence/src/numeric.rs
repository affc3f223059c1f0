// ABOUTME: Small numeric helpers shared by the calculators
// ABOUTME: Decimal rounding for display values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

/// Round to a fixed number of decimal places (half away from zero)
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
