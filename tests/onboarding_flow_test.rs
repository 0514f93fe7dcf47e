// ABOUTME: Integration tests for the onboarding flow: step merging, finalization, and draft state
// ABOUTME: Verifies merge associativity, idempotent missing-field failures, and derived-metric consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Days;
use common::{completed_memory_flow, date, lose_weight_steps, memory_flow, today};
use leanplan::config::intelligence::ActivityFactorsConfig;
use leanplan::config::HealthPlanConfig;
use leanplan::errors::{ErrorCategory, ErrorCode};
use leanplan::models::{ActivityLevel, Gender, Goal};
use leanplan::onboarding::{
    finalize, DraftStore, FieldValue, MemoryDraftStore, OnboardingField, OnboardingFlow,
    OnboardingRecord, OnboardingUpdate,
};

fn update(values: &[FieldValue]) -> OnboardingUpdate {
    values
        .iter()
        .fold(OnboardingUpdate::default(), |acc, value| acc.with(*value))
}

/// Updates covering disjoint, overlapping, and empty key sets
fn sample_updates() -> Vec<OnboardingUpdate> {
    vec![
        OnboardingUpdate::default(),
        update(&[FieldValue::Goal(Goal::LoseWeight)]),
        update(&[FieldValue::CurrentWeight(82.0), FieldValue::Height(180.0)]),
        update(&[FieldValue::CurrentWeight(79.5)]),
        update(&[
            FieldValue::Gender(Gender::Other),
            FieldValue::BirthDate(date(1990, 2, 28)),
            FieldValue::Height(176.0),
        ]),
        update(&[
            FieldValue::ActivityLevel(ActivityLevel::Light),
            FieldValue::TargetWeight(75.0),
            FieldValue::Goal(Goal::GainWeight),
        ]),
    ]
}

#[test]
fn test_merge_is_associative() {
    let base = OnboardingRecord::new().merge(&update(&[FieldValue::Height(170.0)]));
    for a in sample_updates() {
        for b in sample_updates() {
            let sequential = base.merge(&a).merge(&b);
            let combined = base.merge(&a.overridden_by(&b));
            assert_eq!(sequential, combined, "a = {a:?}, b = {b:?}");
        }
    }
}

#[test]
fn test_merge_never_mutates_receiver() {
    let draft = OnboardingRecord::new().merge(&update(&[FieldValue::Goal(Goal::GetFit)]));
    let snapshot = draft.clone();
    let _next = draft.merge(&update(&[FieldValue::CurrentWeight(70.0)]));
    assert_eq!(draft, snapshot);
}

#[test]
fn test_steps_accumulate_in_store() {
    let flow = memory_flow();
    let steps = lose_weight_steps();

    let after_goal = flow.submit_step(&steps[0], today()).unwrap();
    assert_eq!(after_goal.goal(), Some(Goal::LoseWeight));
    assert_eq!(
        after_goal.first_missing_field(),
        Some(OnboardingField::CurrentWeight)
    );

    let after_weight = flow.submit_step(&steps[1], today()).unwrap();
    assert_eq!(after_weight.goal(), Some(Goal::LoseWeight));
    assert_eq!(after_weight.current_weight(), Some(70.0));
    assert_eq!(flow.store().get().unwrap(), Some(after_weight));
}

#[test]
fn test_rejected_step_leaves_draft_untouched() {
    let flow = memory_flow();
    let steps = lose_weight_steps();
    flow.submit_step(&steps[0], today()).unwrap();
    let before = flow.current_draft().unwrap();

    // Gender is valid, birth date is not; neither may be written
    let error = flow
        .submit_step(
            &[
                (OnboardingField::Gender, "female"),
                (OnboardingField::BirthDate, "2015-01-01"),
            ],
            today(),
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(flow.current_draft().unwrap(), before);
}

#[test]
fn test_step_validates_against_earlier_fields_of_same_step() {
    let flow = memory_flow();
    let record = flow
        .submit_step(
            &[
                (OnboardingField::CurrentWeight, "90"),
                (OnboardingField::TargetWeight, "80"),
            ],
            today(),
        )
        .unwrap();
    assert_eq!(record.target_weight(), Some(80.0));
}

#[test]
fn test_target_weight_before_current_weight_rejected() {
    let flow = memory_flow();
    let error = flow
        .submit_step(&[(OnboardingField::TargetWeight, "80")], today())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConstraintViolation);
    assert!(flow.store().get().unwrap().is_none());
}

#[test]
fn test_new_current_weight_must_keep_stored_target_in_range() {
    let flow = memory_flow();
    let steps: [&[(OnboardingField, &str)]; 6] = [
        &[(OnboardingField::Goal, "lose_weight")],
        &[(OnboardingField::CurrentWeight, "100")],
        &[(OnboardingField::Height, "180")],
        &[
            (OnboardingField::Gender, "female"),
            (OnboardingField::BirthDate, "1990-01-01"),
        ],
        &[(OnboardingField::ActivityLevel, "light")],
        &[(OnboardingField::TargetWeight, "76")],
    ];
    for step in steps {
        flow.submit_step(step, today()).unwrap();
    }
    let before = flow.current_draft().unwrap();

    let error = flow
        .submit_step(&[(OnboardingField::CurrentWeight, "60")], today())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConstraintViolation);
    assert_eq!(error.field.as_deref(), Some("current_weight"));
    assert_eq!(
        error.message,
        "Target weight should be within 25% of your current weight (45 - 75 kg)"
    );
    assert_eq!(flow.current_draft().unwrap(), before);

    // Moving both together in one step is fine
    let record = flow
        .submit_step(
            &[
                (OnboardingField::CurrentWeight, "60"),
                (OnboardingField::TargetWeight, "55"),
            ],
            today(),
        )
        .unwrap();
    assert_eq!(record.target_weight(), Some(55.0));
    assert!(flow.finalize_draft(today()).is_ok());
}

#[test]
fn test_finalize_rejects_stored_target_out_of_range() {
    let draft = OnboardingRecord::new().merge(&update(&[
        FieldValue::Goal(Goal::LoseWeight),
        FieldValue::CurrentWeight(60.0),
        FieldValue::Height(180.0),
        FieldValue::Gender(Gender::Female),
        FieldValue::BirthDate(date(1990, 1, 1)),
        FieldValue::ActivityLevel(ActivityLevel::Light),
        FieldValue::TargetWeight(76.0),
    ]));
    let flow = OnboardingFlow::new(
        MemoryDraftStore::with_draft(draft.clone()),
        HealthPlanConfig::default(),
    );

    let error = flow.finalize_draft(today()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConstraintViolation);
    assert_eq!(error.field.as_deref(), Some("target_weight"));
    assert_eq!(flow.current_draft().unwrap(), draft);
}

#[test]
fn test_finalize_missing_activity_level_is_idempotent() {
    let flow = memory_flow();
    for step in lose_weight_steps() {
        if step[0].0 != OnboardingField::ActivityLevel {
            flow.submit_step(&step, today()).unwrap();
        }
    }
    let before = flow.current_draft().unwrap();

    for _ in 0..2 {
        let error = flow.finalize_draft(today()).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.category(), ErrorCategory::Sequencing);
        assert_eq!(error.field.as_deref(), Some("activity_level"));
        assert_eq!(flow.current_draft().unwrap(), before);
    }
}

#[test]
fn test_finalize_reports_first_missing_field_in_order() {
    let record = OnboardingRecord::new().merge(&update(&[
        FieldValue::Goal(Goal::GetFit),
        FieldValue::Gender(Gender::Male),
        FieldValue::TargetWeight(70.0),
    ]));
    let error = finalize(&record, &HealthPlanConfig::default(), today()).unwrap_err();
    assert_eq!(error.field.as_deref(), Some("current_weight"));

    let error = finalize(&OnboardingRecord::new(), &HealthPlanConfig::default(), today())
        .unwrap_err();
    assert_eq!(error.field.as_deref(), Some("goal"));
}

#[test]
fn test_finalize_complete_draft() {
    let flow = completed_memory_flow();
    let draft_before = flow.current_draft().unwrap();
    let profile = flow.finalize_draft(today()).unwrap();

    assert_eq!(profile.age, 30);
    assert_eq!(profile.metrics.bmr, 1649);
    assert_eq!(profile.metrics.tdee, 1979);
    assert_eq!(profile.metrics.target_calories, 1479);
    assert_eq!(
        profile.metrics.estimated_goal_date,
        today().checked_add_days(Days::new(70)).unwrap()
    );
    // Finalization does not write the draft
    assert_eq!(flow.current_draft().unwrap(), draft_before);
    assert!(draft_before.derived().is_none());
}

#[test]
fn test_finalized_metrics_are_internally_consistent() {
    let config = HealthPlanConfig::default();
    let factors = ActivityFactorsConfig::default();
    let combos = [
        (Goal::LoseWeight, ActivityLevel::Sedentary, Gender::Female, 55.0, 60.0, 52.0),
        (Goal::GainWeight, ActivityLevel::Heavy, Gender::Male, 95.5, 190.0, 100.0),
        (Goal::GetFit, ActivityLevel::Light, Gender::Other, 68.3, 171.2, 68.3),
        (Goal::LoseWeight, ActivityLevel::Moderate, Gender::Female, 31.0, 101.0, 30.0),
    ];

    for (goal, level, gender, weight, height, target) in combos {
        let record = OnboardingRecord::new().merge(&update(&[
            FieldValue::Goal(goal),
            FieldValue::CurrentWeight(weight),
            FieldValue::Height(height),
            FieldValue::Gender(gender),
            FieldValue::BirthDate(date(1970, 5, 5)),
            FieldValue::ActivityLevel(level),
            FieldValue::TargetWeight(target),
        ]));
        let profile = finalize(&record, &config, today()).unwrap();
        let metrics = profile.metrics;

        let expected_tdee = (f64::from(metrics.bmr) * factors.factor(level) + 0.5).floor();
        assert!((f64::from(metrics.tdee) - expected_tdee).abs() < f64::EPSILON);

        let adjustment = config.nutrition.calorie_targets.adjustment(goal);
        let expected_target = (f64::from(metrics.tdee) + adjustment + 0.5)
            .floor()
            .max(1200.0);
        assert!(
            (f64::from(metrics.target_calories) - expected_target).abs() < f64::EPSILON,
            "{goal} {level} {gender}"
        );
        assert!(metrics.target_calories >= 1200);
    }
}

#[test]
fn test_finalized_record_round_trip() {
    let flow = completed_memory_flow();
    let profile = flow.finalize_draft(today()).unwrap();
    let record = profile.to_record();

    assert!(record.is_complete());
    assert_eq!(record.derived(), Some(&profile.metrics));
    assert_eq!(record.base(), flow.current_draft().unwrap().base());

    // Refinalizing the populated record yields the same profile
    let again = finalize(&record, &HealthPlanConfig::default(), today()).unwrap();
    assert_eq!(again, profile);
}

#[test]
fn test_editing_finalized_record_drops_stale_metrics() {
    let flow = completed_memory_flow();
    let record = flow.finalize_draft(today()).unwrap().to_record();
    let edited = record.merge(&update(&[FieldValue::ActivityLevel(ActivityLevel::Heavy)]));
    assert!(edited.derived().is_none());
    assert!(edited.is_complete());
}

#[test]
fn test_discard_clears_draft() {
    let flow = completed_memory_flow();
    flow.discard().unwrap();
    assert_eq!(flow.current_draft().unwrap(), OnboardingRecord::new());
    assert!(flow.store().get().unwrap().is_none());
}
