// ABOUTME: Onboarding draft record accumulated across wizard steps
// ABOUTME: Partial updates, typed field values, and the pure shallow merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use leanplan_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base fields collected by the onboarding wizard, in finalize order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingField {
    /// Goal type
    Goal,
    /// Current weight in kilograms
    CurrentWeight,
    /// Height in centimeters
    Height,
    /// Gender
    Gender,
    /// Birth date
    BirthDate,
    /// Activity level
    ActivityLevel,
    /// Target weight in kilograms
    TargetWeight,
}

impl OnboardingField {
    /// Every field in the order `finalize` checks them
    pub const ALL: [Self; 7] = [
        Self::Goal,
        Self::CurrentWeight,
        Self::Height,
        Self::Gender,
        Self::BirthDate,
        Self::ActivityLevel,
        Self::TargetWeight,
    ];

    /// Wire name of the field, as stored in the draft
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::CurrentWeight => "current_weight",
            Self::Height => "height",
            Self::Gender => "gender",
            Self::BirthDate => "birth_date",
            Self::ActivityLevel => "activity_level",
            Self::TargetWeight => "target_weight",
        }
    }
}

impl fmt::Display for OnboardingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accepted, typed value produced by the input validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Accepted goal
    Goal(Goal),
    /// Accepted current weight (kg)
    CurrentWeight(f64),
    /// Accepted height (cm)
    Height(f64),
    /// Accepted gender
    Gender(Gender),
    /// Accepted birth date
    BirthDate(NaiveDate),
    /// Accepted activity level
    ActivityLevel(ActivityLevel),
    /// Accepted target weight (kg)
    TargetWeight(f64),
}

impl FieldValue {
    /// Field this value belongs to
    #[must_use]
    pub const fn field(&self) -> OnboardingField {
        match self {
            Self::Goal(_) => OnboardingField::Goal,
            Self::CurrentWeight(_) => OnboardingField::CurrentWeight,
            Self::Height(_) => OnboardingField::Height,
            Self::Gender(_) => OnboardingField::Gender,
            Self::BirthDate(_) => OnboardingField::BirthDate,
            Self::ActivityLevel(_) => OnboardingField::ActivityLevel,
            Self::TargetWeight(_) => OnboardingField::TargetWeight,
        }
    }
}

/// Partial set of base fields written by one or more wizard steps
///
/// Derived metrics are deliberately absent: they can only be produced by
/// `finalize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingUpdate {
    /// Goal type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    /// Current weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Birth date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Target weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

impl OnboardingUpdate {
    /// True when the update carries no field at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Store an accepted value in its slot, replacing any earlier value
    pub fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Goal(goal) => self.goal = Some(goal),
            FieldValue::CurrentWeight(kg) => self.current_weight = Some(kg),
            FieldValue::Height(cm) => self.height = Some(cm),
            FieldValue::Gender(gender) => self.gender = Some(gender),
            FieldValue::BirthDate(date) => self.birth_date = Some(date),
            FieldValue::ActivityLevel(level) => self.activity_level = Some(level),
            FieldValue::TargetWeight(kg) => self.target_weight = Some(kg),
        }
    }

    /// Builder form of [`Self::set`]
    #[must_use]
    pub fn with(mut self, value: FieldValue) -> Self {
        self.set(value);
        self
    }

    /// Combine two updates, keys present in `later` win
    #[must_use]
    pub fn overridden_by(&self, later: &Self) -> Self {
        Self {
            goal: later.goal.or(self.goal),
            current_weight: later.current_weight.or(self.current_weight),
            height: later.height.or(self.height),
            gender: later.gender.or(self.gender),
            birth_date: later.birth_date.or(self.birth_date),
            activity_level: later.activity_level.or(self.activity_level),
            target_weight: later.target_weight.or(self.target_weight),
        }
    }

    /// Whether a given field is present
    #[must_use]
    pub const fn has(&self, field: OnboardingField) -> bool {
        match field {
            OnboardingField::Goal => self.goal.is_some(),
            OnboardingField::CurrentWeight => self.current_weight.is_some(),
            OnboardingField::Height => self.height.is_some(),
            OnboardingField::Gender => self.gender.is_some(),
            OnboardingField::BirthDate => self.birth_date.is_some(),
            OnboardingField::ActivityLevel => self.activity_level.is_some(),
            OnboardingField::TargetWeight => self.target_weight.is_some(),
        }
    }
}

/// Metrics computed once from a complete set of base fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: u32,
    /// Date the goal should be reached
    pub estimated_goal_date: NaiveDate,
}

/// Onboarding draft: optional base fields plus derived metrics once finalized
///
/// Records are values. [`OnboardingRecord::merge`] returns a new record and
/// never touches the receiver; derived metrics can only be attached by
/// finalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    #[serde(flatten)]
    base: OnboardingUpdate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    derived: Option<DerivedMetrics>,
}

impl OnboardingRecord {
    /// Empty draft, as at the start of onboarding
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn finalized(base: OnboardingUpdate, derived: DerivedMetrics) -> Self {
        Self {
            base,
            derived: Some(derived),
        }
    }

    /// Shallow merge: fields present in `update` replace the stored ones
    ///
    /// A non-empty update invalidates previously derived metrics, since they
    /// may no longer match the base fields.
    #[must_use]
    pub fn merge(&self, update: &OnboardingUpdate) -> Self {
        if update.is_empty() {
            return self.clone();
        }
        Self {
            base: self.base.overridden_by(update),
            derived: None,
        }
    }

    /// Base fields currently stored
    #[must_use]
    pub const fn base(&self) -> &OnboardingUpdate {
        &self.base
    }

    /// Derived metrics, present only on a finalized record
    #[must_use]
    pub const fn derived(&self) -> Option<&DerivedMetrics> {
        self.derived.as_ref()
    }

    /// First base field, in finalize order, that has not been set yet
    #[must_use]
    pub fn first_missing_field(&self) -> Option<OnboardingField> {
        OnboardingField::ALL
            .into_iter()
            .find(|field| !self.base.has(*field))
    }

    /// True when every base field is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }

    /// Stored goal
    #[must_use]
    pub const fn goal(&self) -> Option<Goal> {
        self.base.goal
    }

    /// Stored current weight (kg)
    #[must_use]
    pub const fn current_weight(&self) -> Option<f64> {
        self.base.current_weight
    }

    /// Stored height (cm)
    #[must_use]
    pub const fn height(&self) -> Option<f64> {
        self.base.height
    }

    /// Stored gender
    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.base.gender
    }

    /// Stored birth date
    #[must_use]
    pub const fn birth_date(&self) -> Option<NaiveDate> {
        self.base.birth_date
    }

    /// Stored activity level
    #[must_use]
    pub const fn activity_level(&self) -> Option<ActivityLevel> {
        self.base.activity_level
    }

    /// Stored target weight (kg)
    #[must_use]
    pub const fn target_weight(&self) -> Option<f64> {
        self.base.target_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_preserves_fields_absent_from_update() {
        let draft = OnboardingRecord::new()
            .merge(&OnboardingUpdate::default().with(FieldValue::Goal(Goal::LoseWeight)));
        let next = draft.merge(&OnboardingUpdate::default().with(FieldValue::Height(180.0)));

        assert_eq!(next.goal(), Some(Goal::LoseWeight));
        assert_eq!(next.height(), Some(180.0));
        assert_eq!(draft.height(), None);
    }

    #[test]
    fn test_empty_merge_keeps_derived_metrics() {
        let derived = DerivedMetrics {
            bmr: 1649,
            tdee: 1979,
            target_calories: 1479,
            estimated_goal_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let record = OnboardingRecord::finalized(OnboardingUpdate::default(), derived);

        assert_eq!(record.merge(&OnboardingUpdate::default()).derived(), Some(&derived));
        let changed = record.merge(&OnboardingUpdate::default().with(FieldValue::Height(170.0)));
        assert!(changed.derived().is_none());
    }

    #[test]
    fn test_first_missing_field_follows_declaration_order() {
        let record = OnboardingRecord::new().merge(
            &OnboardingUpdate::default()
                .with(FieldValue::Goal(Goal::GetFit))
                .with(FieldValue::Height(170.0)),
        );
        assert_eq!(
            record.first_missing_field(),
            Some(OnboardingField::CurrentWeight)
        );
        assert_eq!(
            FieldValue::CurrentWeight(70.0).field(),
            OnboardingField::CurrentWeight
        );
    }

    #[test]
    fn test_record_serializes_flat_snake_case() {
        let record = OnboardingRecord::new().merge(
            &OnboardingUpdate::default()
                .with(FieldValue::ActivityLevel(ActivityLevel::Sedentary))
                .with(FieldValue::CurrentWeight(70.5)),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["activity_level"], "sedentary");
        assert_eq!(json["current_weight"], 70.5);
        assert!(json.get("derived").is_none());
    }
}
