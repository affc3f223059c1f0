// ABOUTME: Anthropometric calculators using peer-reviewed formulas
// ABOUTME: BMR (Mifflin-St Jeor), TDEE, BMI, BMI category, and age from date of birth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Anthropometric Calculators
//!
//! Pure functions with no validation: zero or negative inputs are the caller's
//! responsibility and produce meaningless (but finite where possible) numbers.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use chrono::{Datelike, NaiveDate};
use fitmind_core::constants::{bmi as bmi_bands, mifflin_st_jeor};
use fitmind_core::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let gender_constant = match gender {
        Gender::Male => mifflin_st_jeor::MALE_CONSTANT,
        Gender::Female => mifflin_st_jeor::FEMALE_CONSTANT,
    };

    mifflin_st_jeor::WEIGHT_COEF * weight_kg
        + mifflin_st_jeor::HEIGHT_COEF * height_cm
        + mifflin_st_jeor::AGE_COEF * f64::from(age)
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure: BMR x activity multiplier
#[must_use]
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Calculate Body Mass Index: weight / height(m)²
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// WHO BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Short guidance line for the category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight - consider consulting a doctor",
            Self::Normal => "Healthy weight - great!",
            Self::Overweight => "Overweight - weight loss is recommended",
            Self::Obese => "Obesity - weight loss is important for your health",
        }
    }
}

/// BMI category together with the healthy reference range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiClassification {
    /// Category the BMI falls into
    pub category: BmiCategory,
    /// Lower bound of the healthy BMI range
    pub healthy_min: f64,
    /// Upper bound of the healthy BMI range
    pub healthy_max: f64,
}

/// Classify a BMI value
///
/// The healthy reference range is `[18.5, 24.9]` regardless of category.
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiClassification {
    let category = if bmi < bmi_bands::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < bmi_bands::OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < bmi_bands::OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiClassification {
        category,
        healthy_min: bmi_bands::HEALTHY_MIN,
        healthy_max: bmi_bands::HEALTHY_MAX,
    }
}

/// Whole years between a birth date and `today` (0 for future birth dates)
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
