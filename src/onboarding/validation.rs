// ABOUTME: User-facing input validation for onboarding wizard fields
// ABOUTME: Parses raw text into typed values and enforces ranges and cross-field rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation for the onboarding wizard
//!
//! Every check returns a validation [`AppError`] whose `field` names the
//! offending input and whose message can be shown to the user as-is.

use super::record::{FieldValue, OnboardingField, OnboardingRecord};
use crate::config::intelligence::InputLimitsConfig;
use chrono::{Datelike, NaiveDate};
use leanplan_core::errors::AppError;
use leanplan_core::models::{ActivityLevel, Gender, Goal};

const INVALID_NUMBER: &str = "Please enter a valid number";

/// Age in whole years on `today`
///
/// The year difference, minus one when this year's birthday has not been
/// reached yet. Someone born on February 29th turns a year older on March 1st
/// in common years.
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}

/// JavaScript-style `Math.round` for display bounds
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Validator for raw wizard input against configured limits
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'a> {
    limits: &'a InputLimitsConfig,
}

impl<'a> InputValidator<'a> {
    /// Create a validator over the given limits
    #[must_use]
    pub const fn new(limits: &'a InputLimitsConfig) -> Self {
        Self { limits }
    }

    /// Validate one raw input for `field`
    ///
    /// `draft` supplies the values cross-field rules depend on (current weight
    /// for the target weight); `today` anchors the age computation.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing why the input was rejected
    pub fn validate(
        &self,
        field: OnboardingField,
        raw: &str,
        draft: &OnboardingRecord,
        today: NaiveDate,
    ) -> Result<FieldValue, AppError> {
        match field {
            OnboardingField::Goal => raw.parse::<Goal>().map(FieldValue::Goal),
            OnboardingField::Gender => raw.parse::<Gender>().map(FieldValue::Gender),
            OnboardingField::ActivityLevel => {
                raw.parse::<ActivityLevel>().map(FieldValue::ActivityLevel)
            }
            OnboardingField::CurrentWeight => self
                .validate_weight(OnboardingField::CurrentWeight, raw)
                .map(FieldValue::CurrentWeight),
            OnboardingField::Height => self.validate_height(raw).map(FieldValue::Height),
            OnboardingField::BirthDate => self
                .validate_birth_date(raw, today)
                .map(FieldValue::BirthDate),
            OnboardingField::TargetWeight => self
                .validate_target_weight(raw, draft.current_weight())
                .map(FieldValue::TargetWeight),
        }
    }

    /// Validate a current or target weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for non-numeric input and `ValueOutOfRange`
    /// outside the configured weight range
    pub fn validate_weight(&self, field: OnboardingField, raw: &str) -> Result<f64, AppError> {
        let weight = parse_number(field, raw)?;
        let label = if field == OnboardingField::TargetWeight {
            "Target weight"
        } else {
            "Weight"
        };
        if weight < self.limits.min_weight_kg || weight > self.limits.max_weight_kg {
            return Err(AppError::out_of_range(
                field.as_str(),
                format!(
                    "{label} must be between {} and {} kg",
                    self.limits.min_weight_kg, self.limits.max_weight_kg
                ),
            ));
        }
        Ok(weight)
    }

    /// Validate a height in centimeters
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for non-numeric input and `ValueOutOfRange`
    /// outside the configured height range
    pub fn validate_height(&self, raw: &str) -> Result<f64, AppError> {
        let height = parse_number(OnboardingField::Height, raw)?;
        if height < self.limits.min_height_cm || height > self.limits.max_height_cm {
            return Err(AppError::out_of_range(
                OnboardingField::Height.as_str(),
                format!(
                    "Height must be between {} and {} cm",
                    self.limits.min_height_cm, self.limits.max_height_cm
                ),
            ));
        }
        Ok(height)
    }

    /// Validate an ISO `YYYY-MM-DD` birth date by the age it yields on `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unparseable dates and `ValueOutOfRange`
    /// when the age falls outside the configured range
    pub fn validate_birth_date(&self, raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
        let field = OnboardingField::BirthDate.as_str();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_format(
                field,
                "Please enter your birth date",
            ));
        }
        let birth_date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            AppError::invalid_format(field, "Birth date must be formatted as YYYY-MM-DD")
        })?;

        let age = calculate_age(birth_date, today);
        let min = i64::from(self.limits.min_age_years);
        let max = i64::from(self.limits.max_age_years);
        if !(min..=max).contains(&i64::from(age)) {
            return Err(AppError::out_of_range(
                field,
                format!("Age must be between {min} and {max} years"),
            ));
        }
        Ok(birth_date)
    }

    /// Validate a target weight against the range and the current weight
    ///
    /// The target may differ from the current weight by at most the
    /// configured ratio of the current weight (25% by default).
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, `ConstraintViolation` when
    /// the current weight is unknown or the change is too large
    pub fn validate_target_weight(
        &self,
        raw: &str,
        current_weight: Option<f64>,
    ) -> Result<f64, AppError> {
        let field = OnboardingField::TargetWeight;
        let target = self.validate_weight(field, raw)?;
        let Some(current) = current_weight else {
            return Err(AppError::constraint_violation(
                field.as_str(),
                "Current weight data is missing",
            ));
        };

        self.check_target_change(field, target, current)?;
        Ok(target)
    }

    /// Check that an accepted target stays within the allowed change of `current`
    ///
    /// `field` is the input reported on failure: the target itself, or the
    /// current weight when a later step moves it away from a stored target.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` when the change is too large
    pub fn check_target_change(
        &self,
        field: OnboardingField,
        target: f64,
        current: f64,
    ) -> Result<(), AppError> {
        let max_change = current * self.limits.max_target_change_ratio;
        if !max_change.is_finite() || (current - target).abs() > max_change {
            return Err(AppError::constraint_violation(
                field.as_str(),
                format!(
                    "Target weight should be within {}% of your current weight ({} - {} kg)",
                    round_half_up(self.limits.max_target_change_ratio * 100.0),
                    round_half_up(current - max_change),
                    round_half_up(current + max_change)
                ),
            ));
        }
        Ok(())
    }
}

/// Parse a trimmed, finite number
fn parse_number(field: OnboardingField, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::invalid_format(field.as_str(), INVALID_NUMBER))
}
