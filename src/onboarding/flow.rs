// ABOUTME: Onboarding flow tying wizard steps to validation, merge, and draft persistence
// ABOUTME: Owns the draft store and health-plan configuration for one onboarding session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::finalize::{finalize, FinalizedProfile};
use super::record::{FieldValue, OnboardingField, OnboardingRecord, OnboardingUpdate};
use super::store::DraftStore;
use super::validation::InputValidator;
use crate::config::intelligence::HealthPlanConfig;
use chrono::NaiveDate;
use leanplan_core::errors::AppError;
use tracing::{debug, info, warn};

/// One onboarding session over a draft store
///
/// Each submitted step is validated in full before anything is written, so a
/// rejected step leaves the stored draft exactly as it was.
#[derive(Debug)]
pub struct OnboardingFlow<S: DraftStore> {
    store: S,
    config: HealthPlanConfig,
}

impl<S: DraftStore> OnboardingFlow<S> {
    /// Create a flow over `store` using `config` for validation and calculations
    #[must_use]
    pub const fn new(store: S, config: HealthPlanConfig) -> Self {
        Self { store, config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &HealthPlanConfig {
        &self.config
    }

    /// Underlying draft store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stored draft, or an empty record when onboarding has not started
    ///
    /// # Errors
    ///
    /// Returns a storage error if the draft cannot be read
    pub fn current_draft(&self) -> Result<OnboardingRecord, AppError> {
        Ok(self.store.get()?.unwrap_or_default())
    }

    /// Validate and merge one wizard step, then persist the new draft
    ///
    /// Inputs are validated in order against the draft merged with the
    /// earlier inputs of the same step. The goal is fixed once chosen:
    /// re-submitting the same goal is accepted, a different one is rejected.
    /// A new current weight must keep a stored target weight within range.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, or a storage error; the stored
    /// draft is unchanged in both cases
    pub fn submit_step(
        &self,
        inputs: &[(OnboardingField, &str)],
        today: NaiveDate,
    ) -> Result<OnboardingRecord, AppError> {
        let draft = self.current_draft()?;
        let validator = InputValidator::new(&self.config.input_limits);
        let mut update = OnboardingUpdate::default();

        for (field, raw) in inputs {
            let pending = draft.merge(&update);
            let value = validator
                .validate(*field, raw, &pending, today)
                .and_then(|value| Self::check_goal_unchanged(&draft, value))
                .inspect_err(|e| {
                    warn!(field = %field, code = ?e.code, "Onboarding input rejected: {}", e.message);
                })?;
            update.set(value);
        }

        if update.is_empty() {
            return Ok(draft);
        }

        let next = draft.merge(&update);
        if let (Some(current), Some(target)) = (update.current_weight, next.target_weight()) {
            let field = OnboardingField::CurrentWeight;
            validator
                .check_target_change(field, target, current)
                .inspect_err(|e| {
                    warn!(field = %field, code = ?e.code, "Onboarding input rejected: {}", e.message);
                })?;
        }

        self.store.set(&next)?;
        info!(
            fields = inputs.len(),
            next_missing = ?next.first_missing_field(),
            "Onboarding step merged"
        );
        Ok(next)
    }

    fn check_goal_unchanged(draft: &OnboardingRecord, value: FieldValue) -> Result<FieldValue, AppError> {
        match (draft.goal(), value) {
            (Some(stored), FieldValue::Goal(requested)) if stored != requested => {
                Err(AppError::constraint_violation(
                    OnboardingField::Goal.as_str(),
                    format!("Goal is already set to {stored} and cannot be changed"),
                ))
            }
            _ => Ok(value),
        }
    }

    /// Finalize the stored draft without modifying it
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first absent field, a
    /// storage error, or a calculator contract error
    pub fn finalize_draft(&self, today: NaiveDate) -> Result<FinalizedProfile, AppError> {
        let draft = self.current_draft()?;
        match finalize(&draft, &self.config, today) {
            Ok(profile) => {
                info!(
                    bmr = profile.metrics.bmr,
                    tdee = profile.metrics.tdee,
                    target_calories = profile.metrics.target_calories,
                    estimated_goal_date = %profile.metrics.estimated_goal_date,
                    "Onboarding draft finalized"
                );
                Ok(profile)
            }
            Err(e) => {
                debug!(code = ?e.code, field = ?e.field, "Onboarding draft not ready: {}", e.message);
                Err(e)
            }
        }
    }

    /// Drop the stored draft
    ///
    /// # Errors
    ///
    /// Returns a storage error if the draft cannot be removed
    pub fn discard(&self) -> Result<(), AppError> {
        self.store.clear()?;
        debug!("Onboarding draft cleared");
        Ok(())
    }
}
