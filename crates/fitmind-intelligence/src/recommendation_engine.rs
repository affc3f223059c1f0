// ABOUTME: Healthy target-weight recommendations derived from height and current weight
// ABOUTME: Suggests ideal/lower/upper targets in the healthy BMI band and annotates risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Weight Recommendation Engine
//!
//! This component only annotates: it never rejects an input. Blocking unsafe
//! targets is the planner's job.

use crate::anthropometrics::{bmi, bmi_category, BmiClassification};
use crate::numeric::round_to;
use fitmind_core::constants::bmi as bmi_bands;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationWarning {
    /// Current BMI is below 18.5
    UnderweightConsultDoctor,
    /// Current BMI is above 30
    ObesityConsultProfessional,
}

impl fmt::Display for RecommendationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnderweightConsultDoctor => {
                "You are currently underweight. Consult a doctor before starting any weight-loss plan"
            }
            Self::ObesityConsultProfessional => {
                "With obesity, consulting a doctor and a dietitian is recommended"
            }
        })
    }
}

/// Suggested target weights for a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecommendation {
    /// Category of the current BMI plus the healthy reference range
    pub recommended_range: BmiClassification,
    /// Ideal (BMI 22), lower (18.5) and upper (24.9) healthy weights, ascending, 0.1 kg
    pub suggested_targets: Vec<f64>,
    /// Current BMI rounded to 0.1
    pub current_bmi: f64,
    /// Advisories based on the current BMI
    pub warnings: Vec<RecommendationWarning>,
}

/// Assessment of a selected target weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetEvaluation {
    /// Selected target weight (kg)
    pub target_weight_kg: f64,
    /// BMI at the target weight rounded to 0.1
    pub target_bmi: f64,
    /// Whether the target lies inside the healthy BMI range
    pub is_healthy_target: bool,
}

/// Healthy target-weight recommendation engine
pub struct WeightRecommendationEngine;

impl WeightRecommendationEngine {
    /// Recommend target weights for the given height and current weight
    #[must_use]
    pub fn recommend(height_cm: f64, current_weight_kg: f64) -> WeightRecommendation {
        let current_bmi = bmi(current_weight_kg, height_cm);
        let height_m = height_cm / 100.0;
        let height_sq = height_m * height_m;

        let mut suggested_targets: Vec<f64> = [
            bmi_bands::IDEAL,
            bmi_bands::HEALTHY_MIN,
            bmi_bands::HEALTHY_MAX,
        ]
        .iter()
        .map(|band| round_to(band * height_sq, 1))
        .collect();
        suggested_targets.sort_by(f64::total_cmp);

        let mut warnings = Vec::new();
        if current_bmi < bmi_bands::UNDERWEIGHT_BELOW {
            warnings.push(RecommendationWarning::UnderweightConsultDoctor);
        } else if current_bmi > bmi_bands::OBESE_FROM {
            warnings.push(RecommendationWarning::ObesityConsultProfessional);
        }

        WeightRecommendation {
            recommended_range: bmi_category(current_bmi),
            suggested_targets,
            current_bmi: round_to(current_bmi, 1),
            warnings,
        }
    }

    /// Evaluate a target weight once the user has picked one
    #[must_use]
    pub fn evaluate_target(height_cm: f64, target_weight_kg: f64) -> TargetEvaluation {
        let target_bmi = bmi(target_weight_kg, height_cm);
        TargetEvaluation {
            target_weight_kg,
            target_bmi: round_to(target_bmi, 1),
            is_healthy_target: (bmi_bands::HEALTHY_MIN..=bmi_bands::HEALTHY_MAX)
                .contains(&target_bmi),
        }
    }
}
