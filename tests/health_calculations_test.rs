// ABOUTME: Integration tests for the BMR, TDEE, target-calorie, and goal-date calculators
// ABOUTME: Checks published reference values, rounding, the calorie floor, and the one-year cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Days;
use common::{date, today};
use leanplan::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, GoalTimelineConfig, NutritionConfig,
};
use leanplan::errors::ErrorCode;
use leanplan::intelligence::{
    calculate_calorie_plan, calculate_estimated_goal_date, calculate_mifflin_st_jeor,
    calculate_program_weeks, calculate_target_calories, calculate_tdee, CaloriePlanParams,
};
use leanplan::models::{ActivityLevel, Gender, Goal};

// ============================================================================
// BMR
// ============================================================================

#[test]
fn test_bmr_reference_male() {
    // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
    let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &BmrConfig::default())
        .unwrap();
    assert_eq!(bmr, 1649);
}

#[test]
fn test_bmr_gender_constants() {
    let config = BmrConfig::default();
    let male = calculate_mifflin_st_jeor(60.0, 160.0, 40, Gender::Male, &config).unwrap();
    let female = calculate_mifflin_st_jeor(60.0, 160.0, 40, Gender::Female, &config).unwrap();
    let other = calculate_mifflin_st_jeor(60.0, 160.0, 40, Gender::Other, &config).unwrap();

    // base = 600 + 1000 - 200 = 1400
    assert_eq!(male, 1405);
    assert_eq!(female, 1239);
    assert_eq!(other, 1322);
}

#[test]
fn test_bmr_half_way_rounds_up() {
    // 10*60.5 + 6.25*170 - 5*25 - 161 = 1381.5
    let bmr = calculate_mifflin_st_jeor(60.5, 170.0, 25, Gender::Female, &BmrConfig::default())
        .unwrap();
    assert_eq!(bmr, 1382);
}

#[test]
fn test_bmr_is_deterministic() {
    let config = BmrConfig::default();
    let first = calculate_mifflin_st_jeor(82.3, 181.4, 47, Gender::Other, &config).unwrap();
    for _ in 0..10 {
        assert_eq!(
            calculate_mifflin_st_jeor(82.3, 181.4, 47, Gender::Other, &config).unwrap(),
            first
        );
    }
}

#[test]
fn test_bmr_contract_bounds() {
    let config = BmrConfig::default();
    assert!(calculate_mifflin_st_jeor(300.0, 250.0, 120, Gender::Male, &config).is_ok());

    for (weight, height, age) in [
        (0.0, 175.0, 30),
        (-70.0, 175.0, 30),
        (300.5, 175.0, 30),
        (70.0, 0.0, 30),
        (70.0, 250.5, 30),
        (70.0, 175.0, 0),
        (70.0, 175.0, 121),
    ] {
        let error = calculate_mifflin_st_jeor(weight, height, age, Gender::Male, &config)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "{weight} {height} {age}");
    }
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_reference_sedentary() {
    let tdee = calculate_tdee(1674, ActivityLevel::Sedentary, &ActivityFactorsConfig::default())
        .unwrap();
    assert_eq!(tdee, 2009);
}

#[test]
fn test_tdee_all_activity_levels() {
    let config = ActivityFactorsConfig::default();
    let expected = [
        (ActivityLevel::Sedentary, 2400),
        (ActivityLevel::Light, 2750),
        (ActivityLevel::Moderate, 3100),
        (ActivityLevel::Heavy, 3450),
    ];
    for (level, tdee) in expected {
        assert_eq!(calculate_tdee(2000, level, &config).unwrap(), tdee, "{level}");
    }
}

#[test]
fn test_tdee_rejects_zero_bmr() {
    let error = calculate_tdee(0, ActivityLevel::Heavy, &ActivityFactorsConfig::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Target calories
// ============================================================================

#[test]
fn test_target_calories_lose_weight() {
    let target =
        calculate_target_calories(2009, Goal::LoseWeight, &CalorieTargetConfig::default())
            .unwrap();
    assert_eq!(target, 1509);
}

#[test]
fn test_target_calories_floor_applies() {
    let config = CalorieTargetConfig::default();
    assert_eq!(
        calculate_target_calories(1000, Goal::LoseWeight, &config).unwrap(),
        1200
    );
    assert_eq!(
        calculate_target_calories(1100, Goal::GetFit, &config).unwrap(),
        1200
    );
}

#[test]
fn test_target_calories_gain_and_maintain() {
    let config = CalorieTargetConfig::default();
    assert_eq!(
        calculate_target_calories(2400, Goal::GainWeight, &config).unwrap(),
        2900
    );
    assert_eq!(
        calculate_target_calories(2400, Goal::GetFit, &config).unwrap(),
        2400
    );
}

#[test]
fn test_target_calories_rejects_zero_tdee() {
    let error = calculate_target_calories(0, Goal::GetFit, &CalorieTargetConfig::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_calorie_plan_chain_is_consistent() {
    let config = NutritionConfig::default();
    let plan = calculate_calorie_plan(
        &CaloriePlanParams {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::LoseWeight,
        },
        &config,
    )
    .unwrap();

    assert_eq!(plan.bmr, 1649);
    assert_eq!(
        plan.tdee,
        calculate_tdee(plan.bmr, ActivityLevel::Moderate, &config.activity_factors).unwrap()
    );
    assert_eq!(
        plan.target_calories,
        calculate_target_calories(plan.tdee, Goal::LoseWeight, &config.calorie_targets).unwrap()
    );
}

// ============================================================================
// Goal date
// ============================================================================

#[test]
fn test_goal_date_ten_weeks() {
    let goal_date = calculate_estimated_goal_date(
        80.0,
        75.0,
        Goal::LoseWeight,
        today(),
        &GoalTimelineConfig::default(),
    )
    .unwrap();
    assert_eq!(goal_date, today().checked_add_days(Days::new(70)).unwrap());
}

#[test]
fn test_goal_date_capped_at_one_year() {
    let goal_date = calculate_estimated_goal_date(
        80.0,
        40.0,
        Goal::LoseWeight,
        today(),
        &GoalTimelineConfig::default(),
    )
    .unwrap();
    assert_eq!(goal_date, today().checked_add_days(Days::new(364)).unwrap());
}

#[test]
fn test_goal_date_get_fit_fixed_program() {
    let goal_date = calculate_estimated_goal_date(
        70.0,
        70.0,
        Goal::GetFit,
        today(),
        &GoalTimelineConfig::default(),
    )
    .unwrap();
    assert_eq!(goal_date, today().checked_add_days(Days::new(84)).unwrap());
}

#[test]
fn test_goal_date_gain_weight_crosses_year() {
    let goal_date = calculate_estimated_goal_date(
        60.0,
        63.0,
        Goal::GainWeight,
        date(2026, 12, 1),
        &GoalTimelineConfig::default(),
    )
    .unwrap();
    // 6 weeks
    assert_eq!(goal_date, date(2027, 1, 12));
}

#[test]
fn test_program_weeks_respects_configured_cap() {
    let config = GoalTimelineConfig {
        max_program_weeks: 8,
        get_fit_program_weeks: 8,
        ..GoalTimelineConfig::default()
    };
    assert_eq!(
        calculate_program_weeks(100.0, 80.0, Goal::LoseWeight, &config).unwrap(),
        8
    );
}

#[test]
fn test_goal_date_rejects_non_positive_weight() {
    for (current, target) in [(0.0, 70.0), (70.0, 0.0), (-5.0, 70.0)] {
        let error = calculate_estimated_goal_date(
            current,
            target,
            Goal::LoseWeight,
            today(),
            &GoalTimelineConfig::default(),
        )
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
