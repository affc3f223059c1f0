// ABOUTME: Calculator commands for fitmind-cli
// ABOUTME: Energy expenditure, BMI, and healthy target-weight recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::helpers::emit;
use anyhow::Result;
use fitmind_engine::{
    bmi, bmi_category, bmr, tdee, ActivityLevel, BmiCategory, Gender, TargetEvaluation,
    WeightRecommendation, WeightRecommendationEngine,
};
use serde::Serialize;

#[derive(Serialize)]
struct EnergyReport {
    bmr: f64,
    tdee: f64,
    bmi: f64,
    bmi_category: BmiCategory,
    bmi_description: &'static str,
    healthy_bmi_min: f64,
    healthy_bmi_max: f64,
}

#[derive(Serialize)]
struct RecommendationReport {
    #[serde(flatten)]
    recommendation: WeightRecommendation,
    warning_messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetEvaluation>,
}

/// Print BMR, TDEE, BMI and the BMI category
pub fn energy(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
) -> Result<()> {
    let bmr = bmr(weight_kg, height_cm, age, gender);
    let bmi = bmi(weight_kg, height_cm);
    let classification = bmi_category(bmi);

    emit(&EnergyReport {
        bmr: bmr.round(),
        tdee: tdee(bmr, activity).round(),
        bmi: (bmi * 10.0).round() / 10.0,
        bmi_category: classification.category,
        bmi_description: classification.category.description(),
        healthy_bmi_min: classification.healthy_min,
        healthy_bmi_max: classification.healthy_max,
    })
}

/// Print healthy target suggestions and, when given, an evaluation of the chosen target
pub fn recommend(height_cm: f64, weight_kg: f64, target_kg: Option<f64>) -> Result<()> {
    let recommendation = WeightRecommendationEngine::recommend(height_cm, weight_kg);
    let warning_messages = recommendation
        .warnings
        .iter()
        .map(ToString::to_string)
        .collect();

    emit(&RecommendationReport {
        recommendation,
        warning_messages,
        target: target_kg
            .map(|target| WeightRecommendationEngine::evaluate_target(height_cm, target)),
    })
}
