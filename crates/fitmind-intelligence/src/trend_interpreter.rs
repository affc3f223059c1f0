// ABOUTME: Qualitative interpretation of a weight trend analysis
// ABOUTME: Maps real change and confidence onto a status, message, advice, and display color
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::trend_analyzer::{Confidence, TrendAnalysis};
use serde::{Deserialize, Serialize};

/// Smallest smoothed change reported as a real loss or gain (kg)
const SIGNIFICANT_CHANGE_KG: f64 = 0.5;

/// Display color for a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendColor {
    /// Real loss
    Green,
    /// Real gain
    Red,
    /// Stable or inconclusive
    Gray,
}

/// Direction of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStatus {
    /// No significant change, or the change is noise
    Stable,
    /// Real weight loss
    Losing,
    /// Real weight gain
    Gaining,
}

/// User-facing reading of a trend analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendInterpretation {
    /// Direction of the trend
    pub status: TrendStatus,
    /// Short headline
    pub message: String,
    /// Suggested next step
    pub advice: String,
    /// Display color
    pub color: TrendColor,
}

impl TrendInterpretation {
    fn new(status: TrendStatus, message: String, advice: &str, color: TrendColor) -> Self {
        Self {
            status,
            message,
            advice: advice.to_owned(),
            color,
        }
    }
}

/// Interpret a trend analysis
#[must_use]
pub fn interpret_trend(analysis: &TrendAnalysis) -> TrendInterpretation {
    let change = analysis.real_change_kg;
    let high = analysis.confidence == Confidence::High;

    if analysis.is_noise || analysis.confidence == Confidence::Low {
        return TrendInterpretation::new(
            TrendStatus::Stable,
            "Your weight is stable".to_owned(),
            "Recent changes are most likely normal water and food fluctuations. Keep tracking!",
            TrendColor::Gray,
        );
    }

    if change <= -SIGNIFICANT_CHANGE_KG {
        return TrendInterpretation::new(
            TrendStatus::Losing,
            format!("Real loss of {:.1} kg", change.abs()),
            if high {
                "A clear downward trend - well done!"
            } else {
                "Looks like you are on the right track!"
            },
            TrendColor::Green,
        );
    }

    if change >= SIGNIFICANT_CHANGE_KG {
        return TrendInterpretation::new(
            TrendStatus::Gaining,
            format!("Gain of {change:.1} kg"),
            if high {
                "An upward trend - worth reviewing nutrition and activity"
            } else {
                "A slight gain - keep tracking"
            },
            TrendColor::Red,
        );
    }

    TrendInterpretation::new(
        TrendStatus::Stable,
        "Weight is stable".to_owned(),
        "No significant change recently",
        TrendColor::Gray,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(real_change_kg: f64, confidence: Confidence, is_noise: bool) -> TrendAnalysis {
        TrendAnalysis {
            current_trend_kg: 80.0,
            real_change_kg,
            confidence,
            is_noise,
            smoothed_series: Vec::new(),
        }
    }

    #[test]
    fn test_noise_and_low_confidence_are_gray() {
        let noisy = interpret_trend(&analysis(-2.0, Confidence::High, true));
        assert_eq!(noisy.color, TrendColor::Gray);
        assert_eq!(noisy.status, TrendStatus::Stable);

        let low = interpret_trend(&analysis(-2.0, Confidence::Low, false));
        assert_eq!(low.color, TrendColor::Gray);
    }

    #[test]
    fn test_loss_is_green_with_confidence_specific_advice() {
        let high = interpret_trend(&analysis(-1.04, Confidence::High, false));
        assert_eq!(high.color, TrendColor::Green);
        assert_eq!(high.message, "Real loss of 1.0 kg");

        let medium = interpret_trend(&analysis(-1.04, Confidence::Medium, false));
        assert_eq!(medium.status, TrendStatus::Losing);
        assert_ne!(high.advice, medium.advice);
    }

    #[test]
    fn test_gain_is_red() {
        let gain = interpret_trend(&analysis(0.76, Confidence::Medium, false));
        assert_eq!(gain.color, TrendColor::Red);
        assert_eq!(gain.message, "Gain of 0.8 kg");
    }

    #[test]
    fn test_small_real_change_is_stable() {
        let small = interpret_trend(&analysis(0.4, Confidence::High, false));
        assert_eq!(small.status, TrendStatus::Stable);
        assert_eq!(small.message, "Weight is stable");
    }
}
