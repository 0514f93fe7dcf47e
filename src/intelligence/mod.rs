// ABOUTME: Health-metrics calculation engine: calorie chain and goal timeline
// ABOUTME: Pure, deterministic functions with no I/O and no logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Converts validated onboarding inputs into a personalized plan:
//!
//! - [`nutrition_calculator`]: BMR -> TDEE -> target calories
//! - [`goal_timeline`]: weeks and date until the goal weight is reached
//!
//! The calorie chain and the goal timeline are independent; both only read
//! their configuration and arguments.

/// BMR, TDEE, and target-calorie calculations
pub mod nutrition_calculator;

/// Goal-achievement date estimation
pub mod goal_timeline;

pub use goal_timeline::{calculate_estimated_goal_date, calculate_program_weeks};
pub use nutrition_calculator::{
    calculate_calorie_plan, calculate_mifflin_st_jeor, calculate_target_calories, calculate_tdee,
    CaloriePlan, CaloriePlanParams,
};
