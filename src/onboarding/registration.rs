// ABOUTME: Registration hand-off: submits the finalized profile to the remote profile service
// ABOUTME: Exponential backoff on retryable failures, cancellation, and draft cleanup on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Remote profile creation
//!
//! The finalized profile is sent exactly once per successful registration.
//! Rate-limited or unavailable services are retried with exponential
//! backoff; everything else fails immediately. The local draft is only
//! cleared after the service accepted the profile.

use super::finalize::ProfilePayload;
use super::flow::OnboardingFlow;
use super::store::DraftStore;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use leanplan_core::errors::AppError;
use leanplan_core::models::AccountIdentity;
use std::time::Duration;
use tokio::select;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Remote service that stores user profiles
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Create the profile described by `payload`
    ///
    /// # Errors
    ///
    /// Returns an external-service error; rate limiting and unavailability
    /// should use retryable error codes
    async fn create_profile(&self, payload: &ProfilePayload) -> Result<(), AppError>;
}

/// Backoff parameters for profile submission
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(20),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
        }
    }
}

/// Next backoff delay, clamped to [`RetryConfig::max_delay`]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn next_delay(current: Duration, config: &RetryConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms).min(config.max_delay)
}

/// Submit a profile, retrying retryable failures with exponential backoff
///
/// # Errors
///
/// Returns `OperationCancelled` if `cancel` fires before the service accepts
/// the profile, the first non-retryable error, or the last retryable error
/// once retries are exhausted
pub async fn submit_profile<P>(
    service: &P,
    payload: &ProfilePayload,
    retry: &RetryConfig,
    cancel: &CancellationToken,
) -> Result<(), AppError>
where
    P: ProfileService + ?Sized,
{
    let mut delay = retry.initial_delay;
    let mut attempt = 0u32;

    loop {
        attempt += 1;

        let result = select! {
            () = cancel.cancelled() => {
                info!(profile_id = %payload.id, attempt, "Profile submission cancelled");
                return Err(AppError::cancelled("profile submission"));
            }
            result = service.create_profile(payload) => result,
        };

        match result {
            Ok(()) => {
                info!(profile_id = %payload.id, attempt, "Profile created");
                return Ok(());
            }
            Err(e) if e.is_retryable() && attempt <= retry.max_retries => {
                warn!(
                    profile_id = %payload.id,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "Profile creation failed, retrying"
                );
            }
            Err(e) => {
                warn!(profile_id = %payload.id, attempt, error = %e, "Profile creation failed");
                return Err(e);
            }
        }

        select! {
            () = cancel.cancelled() => {
                info!(profile_id = %payload.id, attempt, "Profile submission cancelled during backoff");
                return Err(AppError::cancelled("profile submission"));
            }
            () = sleep(delay) => {}
        }

        delay = next_delay(delay, retry);
    }
}

/// Finalize the draft, create the remote profile, then clear the draft
///
/// Any failure before the profile is created leaves the draft untouched so
/// the user can retry. A failure to clear the draft after creation is
/// logged and does not fail the registration.
///
/// # Errors
///
/// Returns finalization errors (`MissingRequiredField`, storage, contract)
/// or the submission error
pub async fn complete_registration<S, P>(
    flow: &OnboardingFlow<S>,
    identity: AccountIdentity,
    service: &P,
    retry: &RetryConfig,
    cancel: &CancellationToken,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<ProfilePayload, AppError>
where
    S: DraftStore,
    P: ProfileService + ?Sized,
{
    let payload = flow.finalize_draft(today)?.into_payload(identity, now);
    submit_profile(service, &payload, retry, cancel).await?;

    if let Err(e) = flow.discard() {
        warn!(profile_id = %payload.id, error = %e, "Profile created but draft could not be cleared");
    }
    Ok(payload)
}
