// ABOUTME: Nutrition configuration for BMR, TDEE multipliers, and calorie targets
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, goal adjustments, and the calorie floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Provides the constants used by the calorie chain: BMR, then TDEE, then the
//! goal-adjusted daily target.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use leanplan_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustments and safety floor for the daily target
    pub calorie_targets: CalorieTargetConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant for `other`: the mean of the male and female constants (-78).
    /// A modeling simplification, not a validated clinical value.
    pub msj_other_constant: f64,
    /// Largest weight the formula accepts (kg)
    pub max_weight_kg: f64,
    /// Largest height the formula accepts (cm)
    pub max_height_cm: f64,
    /// Largest age the formula accepts (years)
    pub max_age_years: u32,
}

impl BmrConfig {
    /// Gender constant added to the Mifflin-St Jeor base
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
            Gender::Other => self.msj_other_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (exercise 1-2 times/week): 1.375
    pub light: f64,
    /// Moderate (exercise 3-5 times/week): 1.55
    pub moderate: f64,
    /// Heavy (hard exercise 6-7 times/week): 1.725
    pub heavy: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, activity_level: ActivityLevel) -> f64 {
        match activity_level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Heavy => self.heavy,
        }
    }
}

/// Goal-based caloric adjustment applied on top of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Deficit for weight loss (kcal/day): -500
    pub lose_weight_adjustment: f64,
    /// Surplus for weight gain (kcal/day): +500
    pub gain_weight_adjustment: f64,
    /// Maintenance for general fitness (kcal/day): 0
    pub get_fit_adjustment: f64,
    /// Hard floor on the daily target regardless of goal or gender (kcal/day): 1200
    pub minimum_daily_calories: u32,
}

impl CalorieTargetConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment(&self, goal: Goal) -> f64 {
        match goal {
            Goal::LoseWeight => self.lose_weight_adjustment,
            Goal::GainWeight => self.gain_weight_adjustment,
            Goal::GetFit => self.get_fit_adjustment,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_other_constant: -78.0,
            max_weight_kg: 300.0,
            max_height_cm: 250.0,
            max_age_years: 120,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            heavy: 1.725,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            lose_weight_adjustment: -500.0,
            gain_weight_adjustment: 500.0,
            get_fit_adjustment: 0.0,
            // Guidelines cite 1200 for women and 1500 for men; one floor applies to everyone
            minimum_daily_calories: 1200,
        }
    }
}
