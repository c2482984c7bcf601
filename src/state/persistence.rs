//! Saved state: the entered number, kept across sessions.
//!
//! Stored as a small JSON document:
//!
//! ```json
//! { "number": "4713", "saved_at": "2026-10-16T09:30:00Z" }
//! ```

use crate::model::StateError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Typed save/load contract between the controller and any persistence
/// mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Entered number as a decimal string.
    pub number: String,

    /// When the state was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedState {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            saved_at: None,
        }
    }
}

/// Read the state file.
///
/// Returns `Ok(None)` if the file does not exist (first run).
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or is not valid JSON.
/// Callers treat both as "no previous state".
pub fn load_state_file(path: &Path) -> Result<Option<SavedState>, StateError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| StateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let state = serde_json::from_str(&contents).map_err(|source| StateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(state))
}

/// Write the state file, stamping `saved_at` and creating parent directories.
pub fn save_state_file(path: &Path, state: &SavedState) -> Result<(), StateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| StateError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let stamped = SavedState {
        number: state.number.clone(),
        saved_at: Some(Utc::now()),
    };
    let json = serde_json::to_string_pretty(&stamped).map_err(StateError::Serialize)?;

    std::fs::write(path, json).map_err(|source| StateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
