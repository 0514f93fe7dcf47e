// ABOUTME: Calorie chain calculations using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, and goal-adjusted daily calorie targets with a safety floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure functions converting body measurements into a daily calorie plan:
//! BMR, then TDEE, then the goal-adjusted target. Every result is rounded
//! half-up to whole kcal/day.
//!
//! These functions check their own preconditions and fail with
//! `InvalidInput` instead of returning a meaningless number. Reaching one of
//! those errors means the onboarding validator was bypassed.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, NutritionConfig,
};
use leanplan_core::errors::AppError;
use leanplan_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};

/// Round half-up to a positive whole number of kcal
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_kcal(value: f64, quantity: &str) -> Result<u32, AppError> {
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded <= 0.0 || rounded > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "{quantity} evaluated to {value}, expected a positive number of kcal"
        )));
    }
    Ok(rounded as u32)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78 (midpoint of the two)
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Gender selecting the constant
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` if a value is non-positive, non-finite, or above
/// the configured bounds, or if the formula yields a non-positive rate
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> Result<u32, AppError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > config.max_weight_kg {
        return Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {} kg",
            config.max_weight_kg
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > config.max_height_cm {
        return Err(AppError::invalid_input(format!(
            "Height must be between 0 and {} cm",
            config.max_height_cm
        )));
    }
    if age == 0 || age > config.max_age_years {
        return Err(AppError::invalid_input(format!(
            "Age must be between 1 and {} years",
            config.max_age_years
        )));
    }

    // Unfused, left-to-right evaluation so half-way cases round the same as the reference app
    #[allow(clippy::suboptimal_flops)]
    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age);

    round_kcal(base + config.gender_constant(gender), "BMR")
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// Activity factors:
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Heavy: 1.725
///
/// # Errors
///
/// Returns `InvalidInput` if BMR is zero
pub fn calculate_tdee(
    bmr: u32,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<u32, AppError> {
    if bmr == 0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    round_kcal(f64::from(bmr) * config.factor(activity_level), "TDEE")
}

/// Calculate the goal-adjusted daily calorie target
///
/// Formula: target = max(round(TDEE + adjustment), floor)
/// - Lose weight: -500
/// - Gain weight: +500
/// - Get fit: 0
///
/// The floor (1200 kcal/day by default) applies regardless of goal or gender.
///
/// # Errors
///
/// Returns `InvalidInput` if TDEE is zero or the goal adjustment is not finite
pub fn calculate_target_calories(
    tdee: u32,
    goal: Goal,
    config: &CalorieTargetConfig,
) -> Result<u32, AppError> {
    if tdee == 0 {
        return Err(AppError::invalid_input("TDEE must be positive"));
    }

    let adjustment = config.adjustment(goal);
    if !adjustment.is_finite() {
        return Err(AppError::invalid_input(format!(
            "Calorie adjustment for {goal} must be finite"
        )));
    }

    let adjusted = (f64::from(tdee) + adjustment + 0.5).floor();
    let floor = f64::from(config.minimum_daily_calories);

    // Below-zero results are swallowed by the floor, so only overflow can fail here
    round_kcal(adjusted.max(floor), "Target calories")
}

/// User parameters for the calorie chain
#[derive(Debug, Clone, Copy)]
pub struct CaloriePlanParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Goal for the caloric adjustment
    pub goal: Goal,
}

/// BMR, TDEE, and target calories computed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriePlan {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted daily target (kcal/day)
    pub target_calories: u32,
}

/// Run BMR, TDEE, and target calories in sequence
///
/// # Errors
///
/// Returns the first calculator precondition failure
pub fn calculate_calorie_plan(
    params: &CaloriePlanParams,
    config: &NutritionConfig,
) -> Result<CaloriePlan, AppError> {
    let bmr = calculate_mifflin_st_jeor(
        params.weight_kg,
        params.height_cm,
        params.age,
        params.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, params.activity_level, &config.activity_factors)?;
    let target_calories = calculate_target_calories(tdee, params.goal, &config.calorie_targets)?;

    Ok(CaloriePlan {
        bmr,
        tdee,
        target_calories,
    })
}
