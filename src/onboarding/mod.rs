// ABOUTME: Onboarding accumulator: validated wizard steps merged into a persisted draft
// ABOUTME: Finalization into a profile with derived metrics and the registration hand-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding Module
//!
//! A new user's profile is collected over several wizard steps. Each step is
//! validated, merged into the draft, and persisted. Once every base field is
//! present the draft is finalized: age is derived from the birth date, the
//! calorie chain and goal date are computed, and the result is handed to the
//! remote profile service. The draft is cleared only after that succeeds.
//!
//! ```text
//! submit_step -> validate -> merge -> DraftStore::set
//! complete_registration -> finalize -> ProfileService -> DraftStore::clear
//! ```

/// Draft record, partial updates, and merge
pub mod record;

/// Raw input validation for wizard fields
pub mod validation;

/// Finalization and the profile payload
pub mod finalize;

/// Local draft persistence
pub mod store;

/// Step-by-step onboarding session
pub mod flow;

/// Remote profile creation with retry and cancellation
pub mod registration;

pub use finalize::{finalize, FinalizedProfile, ProfilePayload};
pub use flow::OnboardingFlow;
pub use record::{DerivedMetrics, FieldValue, OnboardingField, OnboardingRecord, OnboardingUpdate};
pub use registration::{complete_registration, next_delay, submit_profile, ProfileService, RetryConfig};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use validation::{calculate_age, InputValidator};
