//! Per-lab settings.

use crate::error::{LabcheckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings file name inside each lab directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Labs aiming above this score get the stricter type check.
const TYPECHECK_SCORE_THRESHOLD: u8 = 7;

/// A lab's settings, read from its `settings.json`.
///
/// Only the target score matters here; labs carry other fields for other
/// CI stages, and those are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LabSettings {
    /// The score the lab author is aiming for (1-10).
    pub target_score: u8,
}

impl LabSettings {
    /// Load settings from a lab's `settings.json`.
    ///
    /// A present but unreadable or invalid settings file is an error, not
    /// a skip: silently dropping a lab from CI hides real failures.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LabcheckError::SettingsParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| LabcheckError::SettingsParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether this lab's target score requires the type check.
    pub fn typecheck_required(&self) -> bool {
        self.target_score > TYPECHECK_SCORE_THRESHOLD
    }
}
