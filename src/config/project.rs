//! Project configuration: the ordered list of labs.

use crate::error::{LabcheckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default project config file name, relative to the repository root.
pub const PROJECT_CONFIG_FILE: &str = "project.json";

/// Project-level configuration enumerating lab directories.
///
/// Unknown fields are ignored so the same file can carry settings for
/// other CI stages.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    labs: Vec<String>,
}

impl ProjectConfig {
    /// Load the project config from the given path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist.
    /// Returns `ConfigParseError` if the JSON is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LabcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LabcheckError::Io(e)
            }
        })?;

        serde_json::from_str(&content).map_err(|e| LabcheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the config path for a project root, honoring an override.
    pub fn resolve_path(project_root: &Path, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(p) => p.to_path_buf(),
            None => project_root.join(PROJECT_CONFIG_FILE),
        }
    }

    /// Lab directory names in config order.
    pub fn labs(&self) -> &[String] {
        &self.labs
    }
}
