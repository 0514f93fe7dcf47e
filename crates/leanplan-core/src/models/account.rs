// ABOUTME: Account identity attached to the finalized profile before remote creation
// ABOUTME: Validates email format and first name at construction time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Get compiled email regex (cached)
///
/// Returns None if regex compilation fails (should never happen with hardcoded pattern)
fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Identity fields of the account the finalized profile belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// Account id issued by the authentication provider
    pub id: Uuid,
    /// Account email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name, optional at registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl AccountIdentity {
    /// Build an identity, rejecting malformed emails and blank first names
    ///
    /// A blank last name is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `email` or `first_name`
    pub fn new(
        id: Uuid,
        email: &str,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<Self, AppError> {
        let email = email.trim();
        let is_valid_email = email_regex().is_some_and(|re| re.is_match(email));
        if !is_valid_email {
            return Err(AppError::invalid_format("email", "Invalid email format"));
        }

        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(AppError::invalid_format(
                "first_name",
                "First name must not be empty",
            ));
        }

        Ok(Self {
            id,
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned),
        })
    }
}
