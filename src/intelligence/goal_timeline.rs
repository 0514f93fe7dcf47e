// ABOUTME: Goal-achievement date estimation from current and target weight
// ABOUTME: Safe weekly rate for weight goals, fixed program for get-fit, capped at one year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal timeline estimation
//!
//! Weight goals progress at a safe 0.5 kg/week; `get_fit` is a fixed
//! 12-week program. Either way the program never runs past 52 weeks.

use crate::config::intelligence::GoalTimelineConfig;
use chrono::{Days, NaiveDate};
use leanplan_core::errors::AppError;
use leanplan_core::models::Goal;

/// Number of whole weeks needed to reach the target weight
///
/// `weeks = min(ceil(|current - target| / rate), cap)`, or the fixed program
/// length for `get_fit` regardless of the weight difference.
///
/// # Errors
///
/// Returns `InvalidInput` if either weight is non-positive or not finite
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_program_weeks(
    current_weight_kg: f64,
    target_weight_kg: f64,
    goal: Goal,
    config: &GoalTimelineConfig,
) -> Result<u32, AppError> {
    let weights_valid = [current_weight_kg, target_weight_kg]
        .iter()
        .all(|weight| weight.is_finite() && *weight > 0.0);
    if !weights_valid {
        return Err(AppError::invalid_input("Weights must be positive numbers"));
    }
    if config.safe_weekly_rate_kg <= 0.0 {
        return Err(AppError::invalid_input("Weekly rate must be positive"));
    }

    let cap = config.max_program_weeks;
    let weeks = match goal {
        Goal::GetFit => config.get_fit_program_weeks,
        Goal::LoseWeight | Goal::GainWeight => {
            let diff = (current_weight_kg - target_weight_kg).abs();
            let raw_weeks = (diff / config.safe_weekly_rate_kg).ceil();
            // Compare before casting so huge differences saturate at the cap
            if raw_weeks >= f64::from(cap) {
                cap
            } else {
                raw_weeks as u32
            }
        }
    };

    Ok(weeks.min(cap))
}

/// Estimate the date on which the goal should be reached
///
/// Result is `today + weeks * 7` days, where weeks come from
/// [`calculate_program_weeks`].
///
/// # Errors
///
/// Returns `InvalidInput` if either weight is non-positive, or if the date
/// would overflow the calendar
pub fn calculate_estimated_goal_date(
    current_weight_kg: f64,
    target_weight_kg: f64,
    goal: Goal,
    today: NaiveDate,
    config: &GoalTimelineConfig,
) -> Result<NaiveDate, AppError> {
    let weeks = calculate_program_weeks(current_weight_kg, target_weight_kg, goal, config)?;
    today
        .checked_add_days(Days::new(u64::from(weeks) * 7))
        .ok_or_else(|| AppError::invalid_input("Estimated goal date is out of range"))
}
