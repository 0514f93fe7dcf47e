// ABOUTME: Application-wide constants for storage namespaces, service names, and payloads
// ABOUTME: Values shared by the draft stores, logging setup, and profile hand-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Local draft storage
pub mod storage {
    /// Fixed namespace under which the single onboarding draft is stored
    pub const ONBOARDING_DRAFT_KEY: &str = "@leanplan:onboarding_data";

    /// File name used by file-backed draft stores
    pub const ONBOARDING_DRAFT_FILE: &str = "onboarding_data.json";
}

/// Service identification for structured logging
pub mod service_names {
    /// Name reported by the logging setup
    pub const LEANPLAN: &str = "leanplan";

    /// Name used when reporting remote profile-service failures
    pub const PROFILE_SERVICE: &str = "profile-service";
}

/// Defaults written into the remote profile payload
pub mod profile {
    /// Initial value of `last_ideal_shape` for a freshly registered user
    pub const LAST_IDEAL_SHAPE_NEVER: &str = "never";
}
