// ABOUTME: Enumerated onboarding inputs: goal type, gender, and activity level
// ABOUTME: Wire strings are snake_case and parsing is exact, case-sensitive membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse `value` against the wire strings of `variants`, reporting the accepted set on failure
fn parse_choice<T: Copy>(
    field: &str,
    value: &str,
    variants: &[(&'static str, T)],
) -> Result<T, AppError> {
    variants
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| {
            let accepted: Vec<&str> = variants.iter().map(|(name, _)| *name).collect();
            AppError::invalid_choice(
                field,
                format!("{field} must be one of: {}", accepted.join(", ")),
            )
        })
}

/// User's stated objective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit toward a lower target weight
    LoseWeight,
    /// Caloric surplus toward a higher target weight
    GainWeight,
    /// Maintenance calories over a fixed-length program
    GetFit,
}

impl Goal {
    /// All goals in wizard order
    pub const ALL: [Self; 3] = [Self::LoseWeight, Self::GainWeight, Self::GetFit];

    /// Wire string for this goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::GetFit => "get_fit",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variants = Self::ALL.map(|goal| (goal.as_str(), goal));
        parse_choice("goal", s, &variants)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender used to select the BMR gender constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Midpoint of the male and female constants (-78)
    Other,
}

impl Gender {
    /// All accepted genders
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Wire string for this gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variants = Self::ALL.map(|gender| (gender.as_str(), gender));
        parse_choice("gender", s, &variants)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-2 times a week
    Light,
    /// Moderate exercise 3-5 times a week
    Moderate,
    /// Hard exercise 6-7 times a week
    Heavy,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [Self; 4] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Heavy];

    /// Wire string for this activity level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variants = Self::ALL.map(|level| (level.as_str(), level));
        parse_choice("activity_level", s, &variants)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
