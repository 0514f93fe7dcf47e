// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, fixed dates, and onboarding fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `leanplan`

use chrono::NaiveDate;
use leanplan::config::HealthPlanConfig;
use leanplan::onboarding::{MemoryDraftStore, OnboardingField, OnboardingFlow};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixed "today" used across tests
pub fn today() -> NaiveDate {
    date(2026, 10, 18)
}

/// Birth date making the user exactly 30 on [`today`]
pub fn birth_date_age_30() -> &'static str {
    "1996-10-18"
}

/// Wizard steps of a complete weight-loss onboarding, in screen order
pub fn lose_weight_steps() -> Vec<Vec<(OnboardingField, &'static str)>> {
    vec![
        vec![(OnboardingField::Goal, "lose_weight")],
        vec![(OnboardingField::CurrentWeight, "70")],
        vec![(OnboardingField::Height, "175")],
        vec![
            (OnboardingField::Gender, "male"),
            (OnboardingField::BirthDate, birth_date_age_30()),
        ],
        vec![(OnboardingField::ActivityLevel, "sedentary")],
        vec![(OnboardingField::TargetWeight, "65")],
    ]
}

/// Flow over an in-memory store with default configuration
pub fn memory_flow() -> OnboardingFlow<MemoryDraftStore> {
    init_test_logging();
    OnboardingFlow::new(MemoryDraftStore::new(), HealthPlanConfig::default())
}

/// Flow with every step of [`lose_weight_steps`] submitted
pub fn completed_memory_flow() -> OnboardingFlow<MemoryDraftStore> {
    let flow = memory_flow();
    for step in lose_weight_steps() {
        flow.submit_step(&step, today()).unwrap();
    }
    flow
}
