// ABOUTME: Weight-loss planner computing calorie-deficit plans under safety constraints
// ABOUTME: Converts a pace or a target date into weekly rate, deficit, duration, and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Weight-Loss Planner
//!
//! The planner is a stateless service value. Anything that needs to recompute a
//! plan (for example the progress tracker) borrows a `&WeightLossPlanner` rather
//! than constructing its own.
//!
//! Only precondition violations are errors. Safety concerns (low intake, large
//! deficit, low target BMI) become warnings and clear `is_healthy_safe`; the
//! plan is still returned in full.

use crate::anthropometrics::{bmi, bmr, tdee};
use crate::config::{EngineConfig, PlannerConfig};
use crate::numeric::round_to;
use chrono::{Days, NaiveDate, Utc};
use fitmind_core::constants::{bmi as bmi_bands, calendar, energy};
use fitmind_core::{Pace, UserProfile, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Non-fatal concern attached to a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// The target date demanded a rate above the safe maximum; the rate was capped
    RequestedPaceUnsafe {
        /// Rate the target date would have required (kg/week)
        requested_kg_per_week: f64,
        /// Rate actually used (kg/week)
        capped_kg_per_week: f64,
    },
    /// The target date is so far away that the derived rate is very slow
    RequestedPaceVerySlow {
        /// Derived rate (kg/week)
        kg_per_week: f64,
    },
    /// Daily intake falls below the sex-specific minimum
    BelowMinimumCalories {
        /// Minimum safe intake (kcal/day)
        minimum_kcal: f64,
    },
    /// Daily deficit exceeds the safe maximum
    DeficitTooAggressive {
        /// Planned deficit (kcal/day)
        deficit_kcal: f64,
    },
    /// Weekly rate is slow enough that results will take a long time
    SlowProgress,
    /// Target weight is below the healthy BMI range
    TargetBelowHealthyRange {
        /// BMI at the target weight
        target_bmi: f64,
    },
    /// Current BMI indicates obesity
    ObesityConsultDoctor,
}

impl PlanWarning {
    /// Whether this warning marks the plan as not medically conservative
    #[must_use]
    pub const fn is_unsafe(&self) -> bool {
        matches!(
            self,
            Self::BelowMinimumCalories { .. }
                | Self::DeficitTooAggressive { .. }
                | Self::TargetBelowHealthyRange { .. }
        )
    }
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestedPaceUnsafe {
                requested_kg_per_week,
                capped_kg_per_week,
            } => write!(
                f,
                "The requested pace ({requested_kg_per_week:.2} kg/week) is too fast and may be unsafe; capped at {capped_kg_per_week} kg/week"
            ),
            Self::RequestedPaceVerySlow { kg_per_week } => write!(
                f,
                "The requested pace ({kg_per_week:.2} kg/week) is very slow; consider a closer target date"
            ),
            Self::BelowMinimumCalories { minimum_kcal } => write!(
                f,
                "Calorie intake is too low (minimum {minimum_kcal:.0} calories per day)"
            ),
            Self::DeficitTooAggressive { deficit_kcal } => write!(
                f,
                "A deficit of {deficit_kcal:.0} calories per day is too aggressive and may harm health and metabolism"
            ),
            Self::SlowProgress => {
                f.write_str("Very slow pace; it will take a long time to see results")
            }
            Self::TargetBelowHealthyRange { target_bmi } => write!(
                f,
                "The target weight (BMI {target_bmi:.1}) is below the healthy range; consider a higher target"
            ),
            Self::ObesityConsultDoctor => {
                f.write_str("Consulting a doctor is recommended due to obesity")
            }
        }
    }
}

/// How the daily deficit is split between eating less and exercising more
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    /// Portion of the deficit covered by diet (kcal/day)
    pub diet_deficit: f64,
    /// Portion of the deficit covered by exercise (kcal/day)
    pub exercise_deficit: f64,
    /// Calories to eat; net intake is food minus exercise burn
    pub food_calories: f64,
    /// Calories to burn through exercise
    pub exercise_calories: f64,
}

/// A complete weight-loss plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLossResult {
    /// Weekly loss rate, 2 decimals (kg/week)
    pub weekly_weight_loss_kg: f64,
    /// Daily calorie deficit (kcal, whole number)
    pub daily_calorie_deficit: f64,
    /// Weeks until the target weight is reached
    pub estimated_duration_weeks: u32,
    /// Completion date (echoed when supplied by the caller)
    pub target_date: NaiveDate,
    /// Net daily calorie target (kcal, whole number)
    pub daily_calories: f64,
    /// Basal metabolic rate (kcal, whole number)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal, whole number)
    pub tdee: f64,
    /// False when any safety threshold was crossed
    pub is_healthy_safe: bool,
    /// Safety and pacing concerns
    pub warnings: Vec<PlanWarning>,
    /// Diet/exercise split of the deficit
    pub calorie_breakdown: CalorieBreakdown,
}

impl WeightLossResult {
    /// Warnings rendered as display strings
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Weekly rate and duration chosen for a plan
struct RateDecision {
    kg_per_week: f64,
    duration_weeks: u32,
}

/// Stateless weight-loss planning service
#[derive(Debug, Clone)]
pub struct WeightLossPlanner {
    config: PlannerConfig,
}

impl Default for WeightLossPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightLossPlanner {
    /// Create a planner using the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().planner.clone())
    }

    /// Create a planner with explicit configuration
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan weight loss as of the current UTC date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the current weight does not exceed the target,
    /// the target BMI is below 16, or `target_date` is not in the future
    pub fn plan(
        &self,
        profile: &UserProfile,
        pace: Pace,
        target_date: Option<NaiveDate>,
    ) -> Result<WeightLossResult, ValidationError> {
        self.plan_as_of(profile, pace, target_date, Utc::now().date_naive())
    }

    /// Plan weight loss as of an explicit date
    ///
    /// When `target_date` is given the weekly rate is derived from it and `pace`
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the current weight does not exceed the target,
    /// the target BMI is below 16, or `target_date` is not after `today`
    pub fn plan_as_of(
        &self,
        profile: &UserProfile,
        pace: Pace,
        target_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<WeightLossResult, ValidationError> {
        if profile.current_weight_kg <= profile.target_weight_kg {
            return Err(ValidationError::CurrentNotAboveTarget {
                current_kg: profile.current_weight_kg,
                target_kg: profile.target_weight_kg,
            });
        }

        let target_bmi = bmi(profile.target_weight_kg, profile.height_cm);
        if target_bmi < bmi_bands::MIN_SAFE_TARGET {
            return Err(ValidationError::TargetBmiTooLow {
                target_bmi,
                minimum_bmi: bmi_bands::MIN_SAFE_TARGET,
            });
        }

        let total_to_lose = profile.weight_to_lose_kg();
        let bmr = bmr(
            profile.current_weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
        );
        let tdee = tdee(bmr, profile.activity_level);

        let mut warnings = Vec::new();
        let rate = self.resolve_rate(total_to_lose, pace, target_date, today, &mut warnings)?;

        let daily_deficit = rate.kg_per_week * energy::KCAL_PER_KG_FAT / energy::DAYS_PER_WEEK;
        let daily_calories = tdee - daily_deficit;

        let exercise_deficit = (daily_deficit * self.config.exercise_deficit_share).round();
        let diet_deficit = (daily_deficit * self.config.diet_deficit_share).round();
        let calorie_breakdown = CalorieBreakdown {
            diet_deficit,
            exercise_deficit,
            food_calories: (daily_calories + exercise_deficit).round(),
            exercise_calories: exercise_deficit,
        };

        self.check_safety(
            profile,
            rate.kg_per_week,
            daily_deficit,
            daily_calories,
            target_bmi,
            &mut warnings,
        );
        let is_healthy_safe = !warnings.iter().any(PlanWarning::is_unsafe);

        let target_date = target_date.unwrap_or_else(|| {
            today
                .checked_add_days(Days::new(
                    u64::from(rate.duration_weeks) * calendar::DAYS_PER_WEEK,
                ))
                .unwrap_or(NaiveDate::MAX)
        });

        debug!(
            weekly_loss = rate.kg_per_week,
            daily_deficit,
            duration_weeks = rate.duration_weeks,
            "Computed weight-loss plan"
        );
        if !is_healthy_safe {
            warn!(
                warnings = warnings.len(),
                daily_calories, "Weight-loss plan crosses safety thresholds"
            );
        }

        Ok(WeightLossResult {
            weekly_weight_loss_kg: round_to(rate.kg_per_week, 2),
            daily_calorie_deficit: daily_deficit.round(),
            estimated_duration_weeks: rate.duration_weeks,
            target_date,
            daily_calories: daily_calories.round(),
            bmr: bmr.round(),
            tdee: tdee.round(),
            is_healthy_safe,
            warnings,
            calorie_breakdown,
        })
    }

    /// Pick the weekly rate from the pace table or derive it from the target date
    fn resolve_rate(
        &self,
        total_to_lose: f64,
        pace: Pace,
        target_date: Option<NaiveDate>,
        today: NaiveDate,
        warnings: &mut Vec<PlanWarning>,
    ) -> Result<RateDecision, ValidationError> {
        let Some(target_date) = target_date else {
            let kg_per_week = pace.weekly_loss_kg();
            return Ok(RateDecision {
                kg_per_week,
                duration_weeks: weeks_needed(total_to_lose, kg_per_week),
            });
        };

        let days_available = (target_date - today).num_days();
        if days_available <= 0 {
            return Err(ValidationError::TargetDateNotInFuture { target_date, today });
        }
        // Partial weeks count as a whole week
        let weeks_available = u32::try_from((days_available + 6) / 7).unwrap_or(u32::MAX);
        let derived = total_to_lose / f64::from(weeks_available);

        if derived > self.config.max_weekly_loss_kg {
            let capped = self.config.max_weekly_loss_kg;
            warnings.push(PlanWarning::RequestedPaceUnsafe {
                requested_kg_per_week: derived,
                capped_kg_per_week: capped,
            });
            return Ok(RateDecision {
                kg_per_week: capped,
                duration_weeks: weeks_needed(total_to_lose, capped),
            });
        }

        if derived < self.config.slow_weekly_loss_kg {
            warnings.push(PlanWarning::RequestedPaceVerySlow {
                kg_per_week: derived,
            });
        }

        Ok(RateDecision {
            kg_per_week: derived,
            duration_weeks: weeks_available,
        })
    }

    fn check_safety(
        &self,
        profile: &UserProfile,
        kg_per_week: f64,
        daily_deficit: f64,
        daily_calories: f64,
        target_bmi: f64,
        warnings: &mut Vec<PlanWarning>,
    ) {
        let minimum_kcal = self.config.min_daily_calories(profile.gender);
        if daily_calories < minimum_kcal {
            warnings.push(PlanWarning::BelowMinimumCalories { minimum_kcal });
        }

        if daily_deficit > self.config.max_daily_deficit_kcal {
            warnings.push(PlanWarning::DeficitTooAggressive {
                deficit_kcal: daily_deficit.round(),
            });
        }

        if kg_per_week < self.config.slow_weekly_loss_kg {
            warnings.push(PlanWarning::SlowProgress);
        }

        if target_bmi < bmi_bands::HEALTHY_MIN {
            warnings.push(PlanWarning::TargetBelowHealthyRange {
                target_bmi: round_to(target_bmi, 1),
            });
        }

        if bmi(profile.current_weight_kg, profile.height_cm) > bmi_bands::OBESE_FROM {
            warnings.push(PlanWarning::ObesityConsultDoctor);
        }
    }
}

/// Whole weeks needed to lose `total_kg` at `kg_per_week`
pub(crate) fn weeks_needed(total_kg: f64, kg_per_week: f64) -> u32 {
    (total_kg / kg_per_week).ceil().max(0.0) as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fitmind_core::{ActivityLevel, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn profile(current: f64, target: f64, gender: Gender) -> UserProfile {
        UserProfile {
            current_weight_kg: current,
            target_weight_kg: target,
            height_cm: 170.0,
            age: 30,
            gender,
            activity_level: ActivityLevel::Moderate,
        }
    }

    fn planner() -> WeightLossPlanner {
        WeightLossPlanner::with_config(PlannerConfig::default())
    }

    #[test]
    fn test_moderate_pace_reference_plan() {
        let plan = planner()
            .plan_as_of(&profile(80.0, 70.0, Gender::Male), Pace::Moderate, None, today())
            .unwrap();

        assert!((plan.weekly_weight_loss_kg - 0.75).abs() < f64::EPSILON);
        assert!((plan.daily_calorie_deficit - 825.0).abs() < f64::EPSILON);
        assert_eq!(plan.estimated_duration_weeks, 14);
        assert_eq!(plan.target_date, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
        // BMR 1717.5, TDEE 2662.125, net 1837.125, exercise round(247.5) = 248
        assert!((plan.bmr - 1718.0).abs() < f64::EPSILON);
        assert!((plan.tdee - 2662.0).abs() < f64::EPSILON);
        assert!((plan.daily_calories - 1837.0).abs() < f64::EPSILON);
        assert!((plan.calorie_breakdown.exercise_deficit - 248.0).abs() < f64::EPSILON);
        assert!((plan.calorie_breakdown.diet_deficit - 578.0).abs() < f64::EPSILON);
        assert!((plan.calorie_breakdown.food_calories - 2085.0).abs() < f64::EPSILON);
        assert!(plan.is_healthy_safe);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_rejects_target_not_below_current() {
        let err = planner()
            .plan_as_of(&profile(70.0, 70.0, Gender::Male), Pace::Slow, None, today())
            .unwrap_err();
        assert!(matches!(err, ValidationError::CurrentNotAboveTarget { .. }));
    }

    #[test]
    fn test_rejects_dangerously_low_target() {
        // 1.7² * 16 = 46.24
        let err = planner()
            .plan_as_of(&profile(70.0, 45.0, Gender::Female), Pace::Slow, None, today())
            .unwrap_err();
        assert!(matches!(err, ValidationError::TargetBmiTooLow { .. }));
    }

    #[test]
    fn test_target_date_must_be_future() {
        let err = planner()
            .plan_as_of(
                &profile(80.0, 70.0, Gender::Male),
                Pace::Moderate,
                Some(today()),
                today(),
            )
            .unwrap_err();
        assert_eq!(err.code(), "TARGET_DATE_NOT_IN_FUTURE");
    }

    #[test]
    fn test_aggressive_target_date_is_capped() {
        // 10 kg in 29 days -> 5 weeks -> 2 kg/week, capped to 1.0
        let target = today() + Days::new(29);
        let plan = planner()
            .plan_as_of(
                &profile(80.0, 70.0, Gender::Male),
                Pace::Slow,
                Some(target),
                today(),
            )
            .unwrap();

        assert!((plan.weekly_weight_loss_kg - 1.0).abs() < f64::EPSILON);
        assert_eq!(plan.estimated_duration_weeks, 10);
        assert_eq!(plan.target_date, target);
        assert!(matches!(
            plan.warnings[0],
            PlanWarning::RequestedPaceUnsafe { .. }
        ));
    }

    #[test]
    fn test_distant_target_date_warns_slow_twice() {
        // 10 kg over 52 weeks -> ~0.19 kg/week
        let target = today() + Days::new(364);
        let plan = planner()
            .plan_as_of(
                &profile(80.0, 70.0, Gender::Male),
                Pace::Fast,
                Some(target),
                today(),
            )
            .unwrap();

        assert_eq!(plan.estimated_duration_weeks, 52);
        assert!((plan.weekly_weight_loss_kg - 0.19).abs() < f64::EPSILON);
        assert!(plan
            .warnings
            .contains(&PlanWarning::RequestedPaceVerySlow { kg_per_week: 10.0 / 52.0 }));
        assert!(plan.warnings.contains(&PlanWarning::SlowProgress));
        assert!(plan.is_healthy_safe);
    }

    #[test]
    fn test_low_intake_marks_unsafe() {
        let small = UserProfile {
            current_weight_kg: 60.0,
            target_weight_kg: 55.0,
            height_cm: 160.0,
            age: 50,
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
        };
        let plan = planner()
            .plan_as_of(&small, Pace::Fast, None, today())
            .unwrap();

        assert!(!plan.is_healthy_safe);
        assert!(plan
            .warnings
            .contains(&PlanWarning::BelowMinimumCalories { minimum_kcal: 1200.0 }));
        // 1.0 kg/week = 1100 kcal/day
        assert!(plan
            .warnings
            .contains(&PlanWarning::DeficitTooAggressive { deficit_kcal: 1100.0 }));
    }

    #[test]
    fn test_obesity_warning_does_not_flip_safety() {
        let plan = planner()
            .plan_as_of(
                &profile(100.0, 80.0, Gender::Male),
                Pace::Slow,
                None,
                today(),
            )
            .unwrap();
        assert_eq!(plan.warnings, vec![PlanWarning::ObesityConsultDoctor]);
        assert!(plan.is_healthy_safe);
    }
}
