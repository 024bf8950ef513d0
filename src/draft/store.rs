//! Draft persistence between CLI invocations.
//!
//! The draft lives in a JSON file under the state directory, guarded by an
//! exclusive fs2 lock so two concurrent invocations cannot interleave a
//! load-mutate-save cycle.

use crate::draft::model::LeaveRequestDraft;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// An in-flight submission marker older than this is considered stale
/// (e.g. the submitting process was killed) and no longer blocks resubmit.
pub const SUBMIT_STALE_AFTER_MINS: i64 = 5;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DraftState {
    pub version: String,
    pub draft: LeaveRequestDraft,
    /// Set while a submission HTTP call is outstanding; blocks duplicates.
    pub submission_started_at: Option<DateTime<Utc>>,
    /// Employee name cached at login, used as the default for listings.
    pub logged_in_employee: Option<String>,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            draft: LeaveRequestDraft::default(),
            submission_started_at: None,
            logged_in_employee: None,
        }
    }
}

impl DraftState {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read draft file")?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).context("Failed to parse draft JSON")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize draft")?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Whether a fresh submission marker is present.
    pub fn submission_in_flight(&self, now: DateTime<Utc>) -> bool {
        match self.submission_started_at {
            Some(started) => now - started < Duration::minutes(SUBMIT_STALE_AFTER_MINS),
            None => false,
        }
    }
}

pub fn with_draft_lock<F, R>(lock_path: &Path, draft_path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&mut DraftState) -> Result<R>,
{
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)
        .context("Failed to open lock file")?;

    file.lock_exclusive().context("Failed to acquire lock")?;

    let mut state = DraftState::load(draft_path)?;

    let result = f(&mut state);

    // Persist only on success so a failed mutation never clobbers the draft
    if result.is_ok() {
        state.save(draft_path)?;
    }

    file.unlock().context("Failed to unlock")?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_marker_blocks() {
        let state = DraftState {
            submission_started_at: Some(Utc::now()),
            ..DraftState::default()
        };
        assert!(state.submission_in_flight(Utc::now()));
    }

    #[test]
    fn test_stale_marker_does_not_block() {
        let started = Utc::now() - Duration::minutes(SUBMIT_STALE_AFTER_MINS + 1);
        let state = DraftState {
            submission_started_at: Some(started),
            ..DraftState::default()
        };
        assert!(!state.submission_in_flight(Utc::now()));
    }

    #[test]
    fn test_no_marker_does_not_block() {
        assert!(!DraftState::default().submission_in_flight(Utc::now()));
    }
}
