// ABOUTME: Configuration module for the onboarding engine
// ABOUTME: Exposes the health-plan configuration loaded from defaults and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Intelligence**: formula coefficients, goal timeline, and wizard input limits

/// Health-plan configuration for the validator and calculators
pub mod intelligence;

pub use intelligence::{ConfigError, HealthPlanConfig};
