// ABOUTME: Unified error type and error codes for onboarding validation and calculations
// ABOUTME: Separates user-facing validation failures from contract and infrastructure errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns an [`AppError`]. The
//! [`ErrorCode`] decides how the caller should treat it:
//!
//! - **Validation** codes are user-input problems; the message names the
//!   acceptable range or value set and is safe to show in the UI.
//! - **Sequencing** (`MissingRequiredField`) carries the field name so the
//!   caller can route the user back to the wizard step that sets it.
//! - **Contract** (`InvalidInput`) means a calculator was called with
//!   out-of-domain numbers; the validator was bypassed upstream.
//! - **Infrastructure** codes cover draft storage and the remote profile service.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Broad classification of an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed or out-of-range user input
    Validation,
    /// Operation attempted before its prerequisites were collected
    Sequencing,
    /// Calculator precondition violated by the calling code
    Contract,
    /// Storage, serialization, configuration, or remote service failure
    Infrastructure,
}

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    #[serde(rename = "INVALID_CHOICE")]
    InvalidChoice = 3004,
    #[serde(rename = "CONSTRAINT_VIOLATION")]
    ConstraintViolation = 3005,

    // Operations (4000-4999)
    #[serde(rename = "OPERATION_CANCELLED")]
    OperationCancelled = 4000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Classify this code into one of the four error categories
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidFormat
            | Self::ValueOutOfRange
            | Self::InvalidChoice
            | Self::ConstraintViolation => ErrorCategory::Validation,
            Self::MissingRequiredField => ErrorCategory::Sequencing,
            Self::InvalidInput => ErrorCategory::Contract,
            Self::OperationCancelled
            | Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalRateLimited
            | Self::ConfigInvalid
            | Self::StorageError
            | Self::SerializationError => ErrorCategory::Infrastructure,
        }
    }

    /// Whether the message can be shown to the end user for correction
    #[must_use]
    pub const fn is_user_facing(self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Sequencing
        )
    }

    /// Whether a remote call failing with this code may succeed if repeated
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::ExternalServiceUnavailable | Self::ExternalRateLimited
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Calculator called with values outside its domain",
            Self::MissingRequiredField => "A required onboarding field has not been provided",
            Self::InvalidFormat => "The provided value could not be parsed",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidChoice => "The provided value is not one of the accepted options",
            Self::ConstraintViolation => "The provided value conflicts with another field",
            Self::OperationCancelled => "The operation was cancelled",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Draft storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Onboarding field the error refers to, when there is one
    pub field: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Attach the name of the offending field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Category of the underlying code
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Whether this error is safe to show to the end user
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        self.code.is_user_facing()
    }

    /// Whether the failed operation may be retried
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error view handed to the UI layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Message, already phrased for the end user when the code is user-facing
    pub message: String,
    /// Offending field, used to route back to the matching wizard step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            field: error.field.clone(),
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Raw input could not be parsed into the expected type
    pub fn invalid_format(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message).with_field(field)
    }

    /// Parsed value falls outside the accepted range
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_field(field)
    }

    /// Value is not a member of the accepted set
    pub fn invalid_choice(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidChoice, message).with_field(field)
    }

    /// Value conflicts with another field of the draft
    pub fn constraint_violation(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, message).with_field(field)
    }

    /// Required base field absent from the draft
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
        .with_field(field)
    }

    /// Calculator precondition violated
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Draft storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Operation cancelled before completion
    pub fn cancelled(operation: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::OperationCancelled,
            format!("{} was cancelled", operation.into()),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}
