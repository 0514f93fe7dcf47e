// ABOUTME: Health-plan configuration for the onboarding validator and calculation engine
// ABOUTME: Groups domain configs and provides env-override loading and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health-Plan Configuration Module
//!
//! Provides type-safe configuration for every numeric constant used by the
//! onboarding engine. Defaults reproduce the published formulas exactly; the
//! environment can override them for experiments.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, calorie targets
//! - `goals` - Goal-date estimation (weekly rate, program lengths)
//! - `limits` - User-facing input ranges for the wizard
//!
//! There is no global instance: load once at startup and pass the config to
//! the validator, calculators, and onboarding flow.

/// Configuration error type
pub mod error;
/// Goal-date estimation settings
pub mod goals;
/// Wizard input ranges
pub mod limits;
/// BMR, TDEE, and calorie target settings
pub mod nutrition;

pub use error::ConfigError;
pub use goals::GoalTimelineConfig;
pub use limits::InputLimitsConfig;
pub use nutrition::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, NutritionConfig};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use tracing::debug;

/// Main health-plan configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthPlanConfig {
    /// Configuration for the BMR, TDEE, and target-calorie chain
    pub nutrition: NutritionConfig,
    /// Configuration for goal-date estimation
    pub goals: GoalTimelineConfig,
    /// Configuration for user-facing input validation
    pub input_limits: InputLimitsConfig,
}

impl HealthPlanConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            calorie_floor = config.nutrition.calorie_targets.minimum_daily_calories,
            weekly_rate_kg = config.goals.safe_weekly_rate_kg,
            "Health plan configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_goals()?;
        self.validate_input_limits()
    }

    /// Reject NaN and infinities; range comparisons are all false for NaN
    fn ensure_finite(values: &[f64], message: &'static str) -> Result<(), ConfigError> {
        if values.iter().all(|value| value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(message))
        }
    }

    /// Validate nutrition configuration
    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        let bmr = &nutr.bmr;
        Self::ensure_finite(
            &[
                bmr.msj_weight_coef,
                bmr.msj_height_coef,
                bmr.msj_age_coef,
                bmr.msj_male_constant,
                bmr.msj_female_constant,
                bmr.msj_other_constant,
                bmr.max_weight_kg,
                bmr.max_height_cm,
            ],
            "BMR coefficients and bounds must be finite",
        )?;
        let factors = &nutr.activity_factors;
        Self::ensure_finite(
            &[factors.sedentary, factors.light, factors.moderate, factors.heavy],
            "Activity factors must be finite",
        )?;
        let targets = &nutr.calorie_targets;
        Self::ensure_finite(
            &[
                targets.lose_weight_adjustment,
                targets.gain_weight_adjustment,
                targets.get_fit_adjustment,
            ],
            "Calorie adjustments must be finite",
        )?;

        // Validate BMR coefficients are positive
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if bmr.max_weight_kg <= 0.0
            || bmr.max_height_cm <= 0.0
            || bmr.max_age_years == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR input bounds must be positive",
            ));
        }

        // Validate activity factors are within 1.0-2.5 and ascending
        if factors.sedentary < 1.0 || factors.heavy > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.heavy
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if targets.minimum_daily_calories == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum daily calories must be positive",
            ));
        }
        if targets.lose_weight_adjustment > 0.0 || targets.gain_weight_adjustment < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Weight loss adjustment must be <= 0 and weight gain adjustment >= 0",
            ));
        }

        Ok(())
    }

    /// Validate goal timeline configuration
    fn validate_goals(&self) -> Result<(), ConfigError> {
        let goals = &self.goals;
        if goals.safe_weekly_rate_kg <= 0.0 || !goals.safe_weekly_rate_kg.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Safe weekly rate must be a positive number of kg",
            ));
        }
        if goals.max_program_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum program length must be at least one week",
            ));
        }
        if goals.get_fit_program_weeks > goals.max_program_weeks {
            return Err(ConfigError::InvalidRange(
                "get_fit_program_weeks must be <= max_program_weeks",
            ));
        }
        Ok(())
    }

    /// Validate input limits
    fn validate_input_limits(&self) -> Result<(), ConfigError> {
        let limits = &self.input_limits;
        Self::ensure_finite(
            &[
                limits.min_weight_kg,
                limits.max_weight_kg,
                limits.min_height_cm,
                limits.max_height_cm,
                limits.max_target_change_ratio,
            ],
            "Input limits must be finite",
        )?;
        if limits.min_weight_kg <= 0.0 || limits.min_weight_kg >= limits.max_weight_kg {
            return Err(ConfigError::InvalidRange(
                "min_weight_kg must be positive and < max_weight_kg",
            ));
        }
        if limits.min_height_cm <= 0.0 || limits.min_height_cm >= limits.max_height_cm {
            return Err(ConfigError::InvalidRange(
                "min_height_cm must be positive and < max_height_cm",
            ));
        }
        if limits.min_age_years == 0 || limits.min_age_years >= limits.max_age_years {
            return Err(ConfigError::InvalidRange(
                "min_age_years must be positive and < max_age_years",
            ));
        }
        if limits.max_target_change_ratio <= 0.0 || limits.max_target_change_ratio >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_target_change_ratio must be between 0 and 1 (exclusive)",
            ));
        }

        // User-facing limits must sit inside what the BMR formula accepts
        let bmr = &self.nutrition.bmr;
        if limits.max_weight_kg > bmr.max_weight_kg
            || limits.max_height_cm > bmr.max_height_cm
            || limits.max_age_years > bmr.max_age_years
        {
            return Err(ConfigError::InvalidRange(
                "Input limits must not exceed BMR formula bounds",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factor overrides
        Self::apply_env_var(
            "LEANPLAN_ACTIVITY_FACTOR_SEDENTARY",
            &mut self.nutrition.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "LEANPLAN_ACTIVITY_FACTOR_LIGHT",
            &mut self.nutrition.activity_factors.light,
        )?;
        Self::apply_env_var(
            "LEANPLAN_ACTIVITY_FACTOR_MODERATE",
            &mut self.nutrition.activity_factors.moderate,
        )?;
        Self::apply_env_var(
            "LEANPLAN_ACTIVITY_FACTOR_HEAVY",
            &mut self.nutrition.activity_factors.heavy,
        )?;

        // Calorie target overrides
        Self::apply_env_var(
            "LEANPLAN_LOSE_WEIGHT_ADJUSTMENT",
            &mut self.nutrition.calorie_targets.lose_weight_adjustment,
        )?;
        Self::apply_env_var(
            "LEANPLAN_GAIN_WEIGHT_ADJUSTMENT",
            &mut self.nutrition.calorie_targets.gain_weight_adjustment,
        )?;
        Self::apply_env_var(
            "LEANPLAN_MIN_DAILY_CALORIES",
            &mut self.nutrition.calorie_targets.minimum_daily_calories,
        )?;

        // Goal timeline overrides
        Self::apply_env_var(
            "LEANPLAN_SAFE_WEEKLY_RATE_KG",
            &mut self.goals.safe_weekly_rate_kg,
        )?;
        Self::apply_env_var(
            "LEANPLAN_GET_FIT_PROGRAM_WEEKS",
            &mut self.goals.get_fit_program_weeks,
        )?;
        Self::apply_env_var(
            "LEANPLAN_MAX_PROGRAM_WEEKS",
            &mut self.goals.max_program_weeks,
        )?;

        // Input limit overrides
        Self::apply_env_var(
            "LEANPLAN_MAX_TARGET_CHANGE_RATIO",
            &mut self.input_limits.max_target_change_ratio,
        )?;
        Self::apply_env_var("LEANPLAN_MIN_AGE_YEARS", &mut self.input_limits.min_age_years)?;
        Self::apply_env_var("LEANPLAN_MAX_AGE_YEARS", &mut self.input_limits.max_age_years)?;

        Ok(self)
    }
}
