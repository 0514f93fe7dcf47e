// ABOUTME: Local draft storage for the in-progress onboarding record
// ABOUTME: DraftStore trait with in-memory and JSON-file implementations under one fixed namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::record::OnboardingRecord;
use leanplan_core::constants::storage::{ONBOARDING_DRAFT_FILE, ONBOARDING_DRAFT_KEY};
use leanplan_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// Single-slot storage for the onboarding draft
///
/// There is exactly one draft per device/session. Reads and writes are not
/// atomic with respect to each other; callers serialize wizard steps.
pub trait DraftStore {
    /// Load the stored draft, `None` when onboarding has not started
    ///
    /// # Errors
    ///
    /// Returns `StorageError` or `SerializationError` if the draft cannot be read
    fn get(&self) -> Result<Option<OnboardingRecord>, AppError>;

    /// Replace the stored draft
    ///
    /// # Errors
    ///
    /// Returns `StorageError` or `SerializationError` if the draft cannot be written
    fn set(&self, record: &OnboardingRecord) -> Result<(), AppError>;

    /// Remove the stored draft; clearing an empty store succeeds
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the draft cannot be removed
    fn clear(&self) -> Result<(), AppError>;
}

/// In-process draft store
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: Mutex<Option<OnboardingRecord>>,
}

impl MemoryDraftStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a draft
    #[must_use]
    pub fn with_draft(record: OnboardingRecord) -> Self {
        Self {
            slot: Mutex::new(Some(record)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<OnboardingRecord>> {
        self.slot.lock().unwrap_or_else(|poisoned| {
            warn!("Onboarding draft lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self) -> Result<Option<OnboardingRecord>, AppError> {
        Ok(self.slot().clone())
    }

    fn set(&self, record: &OnboardingRecord) -> Result<(), AppError> {
        *self.slot() = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.slot() = None;
        Ok(())
    }
}

/// On-disk layout of a stored draft
#[derive(Debug, Serialize, Deserialize)]
struct StoredDraft {
    namespace: String,
    record: OnboardingRecord,
}

/// Draft store persisting a JSON document on disk
///
/// Writes go to a sibling temporary file that is then renamed over the
/// draft, so a crash mid-write leaves the previous draft intact.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Store using the default draft file name inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at_path(dir.as_ref().join(ONBOARDING_DRAFT_FILE))
    }

    /// Store using an explicit file path
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the draft file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, action: &str, error: io::Error) -> AppError {
        AppError::storage(format!(
            "Failed to {action} onboarding draft at {}",
            self.path.display()
        ))
        .with_source(error)
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self) -> Result<Option<OnboardingRecord>, AppError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error("read", e)),
        };

        let stored: StoredDraft = serde_json::from_slice(&bytes)?;
        if stored.namespace != ONBOARDING_DRAFT_KEY {
            return Err(AppError::storage(format!(
                "Draft file {} belongs to namespace {}",
                self.path.display(),
                stored.namespace
            )));
        }
        Ok(Some(stored.record))
    }

    fn set(&self, record: &OnboardingRecord) -> Result<(), AppError> {
        let stored = StoredDraft {
            namespace: ONBOARDING_DRAFT_KEY.to_owned(),
            record: record.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&stored)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
        }
        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(|e| self.io_error("write", e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error("replace", e))
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("remove", e)),
        }
    }
}
