// ABOUTME: Finalization of a complete onboarding draft into a profile with derived metrics
// ABOUTME: Builds the remote profile-creation payload from the finalized profile and identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::record::{DerivedMetrics, OnboardingField, OnboardingRecord, OnboardingUpdate};
use super::validation::{calculate_age, InputValidator};
use crate::config::intelligence::HealthPlanConfig;
use crate::intelligence::{calculate_calorie_plan, calculate_estimated_goal_date, CaloriePlanParams};
use chrono::{DateTime, NaiveDate, Utc};
use leanplan_core::constants::profile::LAST_IDEAL_SHAPE_NEVER;
use leanplan_core::errors::AppError;
use leanplan_core::models::{AccountIdentity, ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fully populated onboarding profile, base fields plus derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedProfile {
    /// Goal type
    pub goal: Goal,
    /// Current weight (kg)
    pub current_weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Gender
    pub gender: Gender,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Target weight (kg)
    pub target_weight: f64,
    /// Age in years on the finalization date
    pub age: u32,
    /// Calorie chain and goal date
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl FinalizedProfile {
    /// Populated onboarding record carrying the derived metrics
    #[must_use]
    pub fn to_record(&self) -> OnboardingRecord {
        let base = OnboardingUpdate {
            goal: Some(self.goal),
            current_weight: Some(self.current_weight),
            height: Some(self.height),
            gender: Some(self.gender),
            birth_date: Some(self.birth_date),
            activity_level: Some(self.activity_level),
            target_weight: Some(self.target_weight),
        };
        OnboardingRecord::finalized(base, self.metrics)
    }

    /// Attach the account identity and timestamps for remote profile creation
    #[must_use]
    pub fn into_payload(self, identity: AccountIdentity, now: DateTime<Utc>) -> ProfilePayload {
        ProfilePayload {
            id: identity.id,
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
            created_at: now,
            updated_at: now,
            is_active: true,
            goal_type: self.goal,
            current_weight: self.current_weight,
            height: self.height,
            gender: self.gender,
            birth_date: self.birth_date,
            activity_level: self.activity_level,
            target_weight: self.target_weight,
            bmr: self.metrics.bmr,
            tdee: self.metrics.tdee,
            target_calories: self.metrics.target_calories,
            estimated_goal_date: self.metrics.estimated_goal_date,
            last_ideal_shape: LAST_IDEAL_SHAPE_NEVER.to_owned(),
        }
    }
}

/// Body of the one-time remote profile-creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// Account id
    pub id: Uuid,
    /// Account email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, equal to `created_at` on creation
    pub updated_at: DateTime<Utc>,
    /// New profiles are always active
    pub is_active: bool,
    /// Goal type
    pub goal_type: Goal,
    /// Current weight (kg)
    pub current_weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Gender
    pub gender: Gender,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Target weight (kg)
    pub target_weight: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Daily calorie target (kcal/day)
    pub target_calories: u32,
    /// Estimated goal date
    pub estimated_goal_date: NaiveDate,
    /// Last time the user was in their ideal shape
    pub last_ideal_shape: String,
}

/// Unwrap a base field or report it as the first missing one
fn require<T>(value: Option<T>, field: OnboardingField) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::missing_field(field.as_str()))
}

/// Compute derived metrics from a complete draft
///
/// Fields are checked in declaration order so the error names the wizard
/// step the user has to revisit. The draft itself is never modified.
///
/// # Errors
///
/// Returns `MissingRequiredField` for the first absent base field,
/// `ConstraintViolation` naming `target_weight` when the stored target is out
/// of range for the stored current weight, or `InvalidInput` if a stored
/// value violates a calculator precondition
pub fn finalize(
    record: &OnboardingRecord,
    config: &HealthPlanConfig,
    today: NaiveDate,
) -> Result<FinalizedProfile, AppError> {
    let goal = require(record.goal(), OnboardingField::Goal)?;
    let current_weight = require(record.current_weight(), OnboardingField::CurrentWeight)?;
    let height = require(record.height(), OnboardingField::Height)?;
    let gender = require(record.gender(), OnboardingField::Gender)?;
    let birth_date = require(record.birth_date(), OnboardingField::BirthDate)?;
    let activity_level = require(record.activity_level(), OnboardingField::ActivityLevel)?;
    let target_weight = require(record.target_weight(), OnboardingField::TargetWeight)?;

    InputValidator::new(&config.input_limits).check_target_change(
        OnboardingField::TargetWeight,
        target_weight,
        current_weight,
    )?;

    let age = u32::try_from(calculate_age(birth_date, today))
        .map_err(|_| AppError::invalid_input("Birth date lies in the future"))?;

    let plan = calculate_calorie_plan(
        &CaloriePlanParams {
            weight_kg: current_weight,
            height_cm: height,
            age,
            gender,
            activity_level,
            goal,
        },
        &config.nutrition,
    )?;
    let estimated_goal_date =
        calculate_estimated_goal_date(current_weight, target_weight, goal, today, &config.goals)?;

    Ok(FinalizedProfile {
        goal,
        current_weight,
        height,
        gender,
        birth_date,
        activity_level,
        target_weight,
        age,
        metrics: DerivedMetrics {
            bmr: plan.bmr,
            tdee: plan.tdee,
            target_calories: plan.target_calories,
            estimated_goal_date,
        },
    })
}
