// ABOUTME: User-facing input limits enforced by the onboarding input validator
// ABOUTME: Weight, height, and age ranges plus the maximum target-weight change ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Input limits for onboarding wizard values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimitsConfig {
    /// Minimum current/target weight (kg): 30
    pub min_weight_kg: f64,
    /// Maximum current/target weight (kg): 300
    pub max_weight_kg: f64,
    /// Minimum height (cm): 100
    pub min_height_cm: f64,
    /// Maximum height (cm): 250
    pub max_height_cm: f64,
    /// Minimum age derived from the birth date (years): 18
    pub min_age_years: u32,
    /// Maximum age derived from the birth date (years): 100
    pub max_age_years: u32,
    /// Largest accepted `|current - target| / current`: 0.25
    pub max_target_change_ratio: f64,
}

impl Default for InputLimitsConfig {
    fn default() -> Self {
        Self {
            min_weight_kg: 30.0,
            max_weight_kg: 300.0,
            min_height_cm: 100.0,
            max_height_cm: 250.0,
            min_age_years: 18,
            max_age_years: 100,
            max_target_change_ratio: 0.25,
        }
    }
}
