// ABOUTME: Profile snapshot plus the closed gender, activity-level, and pace enums
// ABOUTME: Strict FromStr parsing rejects unknown names instead of silently defaulting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use crate::constants::{activity_factors, pace_rates};
use crate::errors::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalize user-facing enum spellings ("Very-Active" -> "very_active")
fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

impl Gender {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ParseEnumError::new("gender", s, "male, female")),
        }
    }
}

/// Habitual activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Heavy exercise 6-7 days/week
    Active,
    /// Very heavy exercise, twice a day
    VeryActive,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => activity_factors::SEDENTARY,
            Self::Light => activity_factors::LIGHT,
            Self::Moderate => activity_factors::MODERATE,
            Self::Active => activity_factors::ACTIVE,
            Self::VeryActive => activity_factors::VERY_ACTIVE,
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Parse leniently, falling back to `Moderate` for unrecognized input
    ///
    /// Only for records written by older clients that stored free-form strings
    /// (e.g. `lightly_active`). New inputs should go through `FromStr`.
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match normalize(value).as_str() {
            "lightly_active" => Self::Light,
            "moderately_active" => Self::Moderate,
            other => other.parse().unwrap_or(Self::Moderate),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(ParseEnumError::new(
                "activity level",
                s,
                "sedentary, light, moderate, active, very_active",
            )),
        }
    }
}

/// Named weekly weight-loss tier, bound to a fixed rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    /// 0.5 kg/week
    Slow,
    /// 0.75 kg/week
    Moderate,
    /// 1.0 kg/week
    Fast,
}

impl Pace {
    /// Every pace, slowest first
    pub const ALL: [Self; 3] = [Self::Slow, Self::Moderate, Self::Fast];

    /// Fixed weekly loss for this pace (kg/week)
    #[must_use]
    pub const fn weekly_loss_kg(self) -> f64 {
        match self {
            Self::Slow => pace_rates::SLOW_KG_PER_WEEK,
            Self::Moderate => pace_rates::MODERATE_KG_PER_WEEK,
            Self::Fast => pace_rates::FAST_KG_PER_WEEK,
        }
    }

    /// Pace tier a weekly rate falls into (rates above moderate count as fast)
    #[must_use]
    pub fn for_weekly_loss(kg_per_week: f64) -> Self {
        if kg_per_week <= pace_rates::SLOW_KG_PER_WEEK {
            Self::Slow
        } else if kg_per_week <= pace_rates::MODERATE_KG_PER_WEEK {
            Self::Moderate
        } else {
            Self::Fast
        }
    }

    /// Short label for option lists
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slow => "Slow and safe",
            Self::Moderate => "Moderate and effective",
            Self::Fast => "Fast but safe",
        }
    }

    /// Longer description with the range the tier covers
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Slow => "Slow and safe - losing 0.25-0.5 kg per week",
            Self::Moderate => "Moderate and effective - losing 0.5-0.75 kg per week",
            Self::Fast => "Fast but safe - losing 0.75-1 kg per week",
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Moderate => "moderate",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pace {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "slow" => Ok(Self::Slow),
            "moderate" => Ok(Self::Moderate),
            "fast" => Ok(Self::Fast),
            _ => Err(ParseEnumError::new("pace", s, "slow, moderate, fast")),
        }
    }
}

/// Immutable snapshot of the person a plan is computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Desired body weight in kilograms
    pub target_weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Biological sex for BMR
    pub gender: Gender,
    /// Habitual activity level for TDEE
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Kilograms between current and target weight (negative if target is higher)
    #[must_use]
    pub fn weight_to_lose_kg(&self) -> f64 {
        self.current_weight_kg - self.target_weight_kg
    }
}
