// ABOUTME: Main library entry point for the LeanPlan health-metrics engine
// ABOUTME: Onboarding validation, calorie and goal-date calculations, and draft accumulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LeanPlan
//!
//! Health-metrics engine behind a diet and fitness onboarding wizard. It turns
//! the user's answers (weight, height, birth date, gender, activity level,
//! goal, and target weight) into a personalized plan: BMR, TDEE, a daily
//! calorie target, and an estimated goal date.
//!
//! ## Architecture
//!
//! - **Config**: formula coefficients and input limits, overridable from the environment
//! - **Intelligence**: pure calculators (Mifflin-St Jeor BMR, TDEE, target calories, goal date)
//! - **Onboarding**: input validation, draft merge and persistence, finalization, registration
//! - **Logging**: `tracing` subscriber setup for embedding applications
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use leanplan::config::HealthPlanConfig;
//! use leanplan::errors::AppResult;
//! use leanplan::onboarding::{MemoryDraftStore, OnboardingField, OnboardingFlow};
//!
//! fn main() -> AppResult<()> {
//!     let config = HealthPlanConfig::load()?;
//!     let flow = OnboardingFlow::new(MemoryDraftStore::new(), config);
//!     let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default();
//!
//!     flow.submit_step(&[(OnboardingField::Goal, "lose_weight")], today)?;
//!     flow.submit_step(&[(OnboardingField::CurrentWeight, "82.5")], today)?;
//!     Ok(())
//! }
//! ```

/// Health-plan configuration
pub mod config;

/// Calorie and goal-date calculators
pub mod intelligence;

/// Logging configuration and subscriber setup
pub mod logging;

/// Onboarding accumulator and registration hand-off
pub mod onboarding;

pub use leanplan_core::constants;
pub use leanplan_core::errors;
pub use leanplan_core::models;
