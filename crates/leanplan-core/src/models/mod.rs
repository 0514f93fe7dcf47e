// ABOUTME: Core data models for onboarding inputs and account identity
// ABOUTME: Re-exports Goal, Gender, ActivityLevel, and AccountIdentity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Goal`: the user's stated objective, driving the caloric adjustment
//! - `Gender`: selects the Mifflin-St Jeor gender constant
//! - `ActivityLevel`: selects the TDEE multiplier
//! - `AccountIdentity`: id, email, and name forwarded with the finalized profile

mod account;
mod onboarding;

pub use account::AccountIdentity;
pub use onboarding::{ActivityLevel, Gender, Goal};
