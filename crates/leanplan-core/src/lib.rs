// ABOUTME: Core types and constants for the leanplan health-metrics engine
// ABOUTME: Foundation crate with error handling, domain enums, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Leanplan Core
//!
//! Foundation crate providing shared types for the leanplan onboarding engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage namespaces, service names, and payload defaults
//! - **models**: Onboarding enums (`Goal`, `Gender`, `ActivityLevel`) and account identity

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (goals, genders, activity levels, account identity)
pub mod models;
