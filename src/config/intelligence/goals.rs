// ABOUTME: Goal timeline configuration for estimating the goal-achievement date
// ABOUTME: Safe weekly rate of change, fixed get-fit program length, and program cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Goal timeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTimelineConfig {
    /// Safe rate of weight change (kg/week): 0.5
    pub safe_weekly_rate_kg: f64,
    /// Fixed program length for `get_fit`, independent of weight difference (weeks): 12
    pub get_fit_program_weeks: u32,
    /// Longest program ever estimated (weeks): 52
    pub max_program_weeks: u32,
}

impl Default for GoalTimelineConfig {
    fn default() -> Self {
        Self {
            safe_weekly_rate_kg: 0.5,
            get_fit_program_weeks: 12,
            max_program_weeks: 52,
        }
    }
}
