//! Check plan construction.
//!
//! A [`CheckPlan`] is the ordered list of checker invocations for one run:
//! the core directories first, then `core_utils` when it exists, then every
//! lab whose target score requires the type check, in project-config order.

use crate::config::{LabSettings, ProjectConfig, SETTINGS_FILE};
use crate::error::{LabcheckError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directories always checked, in a single invocation, before any lab.
pub const CORE_PATHS: [&str; 3] = ["config", "seminars", "admin_utils"];

/// Checked on its own when the directory exists.
pub const OPTIONAL_CORE: &str = "core_utils";

/// One checker invocation: a label for output plus the paths to pass.
#[derive(Debug, Clone, Serialize)]
pub struct CheckTarget {
    /// Human-readable label (e.g. "config, seminars, admin_utils").
    pub label: String,

    /// Paths passed to the checker, relative to the project root.
    pub paths: Vec<PathBuf>,
}

/// How a configured lab was resolved during planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum LabDisposition {
    /// Target score requires the check; lab is in the plan.
    Check { target_score: u8 },

    /// Target score at or below the threshold; lab is skipped.
    BelowThreshold { target_score: u8 },

    /// No settings.json in the lab directory; lab is skipped.
    NoSettings,

    /// Excluded by an `--only` / `--skip` filter.
    FilteredOut,
}

/// Planning outcome for a single configured lab.
#[derive(Debug, Clone, Serialize)]
pub struct LabPlan {
    pub name: String,
    #[serde(flatten)]
    pub disposition: LabDisposition,
}

/// Lab name filters applied during planning.
///
/// Filters affect labs only; the core targets always run.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// When non-empty, only these labs are considered.
    pub only: Vec<String>,

    /// These labs are excluded.
    pub skip: Vec<String>,
}

impl PlanFilter {
    fn includes(&self, lab: &str) -> bool {
        if self.skip.iter().any(|s| s == lab) {
            return false;
        }
        self.only.is_empty() || self.only.iter().any(|o| o == lab)
    }
}

/// The full ordered plan for one run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckPlan {
    /// Invocations in execution order.
    pub targets: Vec<CheckTarget>,

    /// Per-lab resolution, in config order (for `list` and logging).
    pub labs: Vec<LabPlan>,
}

impl CheckPlan {
    /// Build the plan for a project.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if a configured lab directory is
    /// missing, and propagates settings parse errors.
    pub fn build(
        project_root: &Path,
        config: &ProjectConfig,
        filter: &PlanFilter,
    ) -> Result<Self> {
        let mut targets = vec![CheckTarget {
            label: CORE_PATHS.join(", "),
            paths: CORE_PATHS.iter().map(PathBuf::from).collect(),
        }];

        if project_root.join(OPTIONAL_CORE).is_dir() {
            targets.push(CheckTarget {
                label: OPTIONAL_CORE.to_string(),
                paths: vec![PathBuf::from(OPTIONAL_CORE)],
            });
        }

        let mut labs = Vec::with_capacity(config.labs().len());
        for lab_name in config.labs() {
            let lab_dir = project_root.join(lab_name);
            if !lab_dir.is_dir() {
                return Err(LabcheckError::ConfigValidationError {
                    message: format!(
                        "lab '{}' is listed in the project config but the directory is missing",
                        lab_name
                    ),
                });
            }

            if !filter.includes(lab_name) {
                labs.push(LabPlan {
                    name: lab_name.clone(),
                    disposition: LabDisposition::FilteredOut,
                });
                continue;
            }

            let settings_path = lab_dir.join(SETTINGS_FILE);
            if !settings_path.is_file() {
                labs.push(LabPlan {
                    name: lab_name.clone(),
                    disposition: LabDisposition::NoSettings,
                });
                continue;
            }

            let settings = LabSettings::load(&settings_path)?;
            if settings.typecheck_required() {
                targets.push(CheckTarget {
                    label: format!("lab {}", lab_name),
                    paths: vec![PathBuf::from(lab_name)],
                });
                labs.push(LabPlan {
                    name: lab_name.clone(),
                    disposition: LabDisposition::Check {
                        target_score: settings.target_score,
                    },
                });
            } else {
                labs.push(LabPlan {
                    name: lab_name.clone(),
                    disposition: LabDisposition::BelowThreshold {
                        target_score: settings.target_score,
                    },
                });
            }
        }

        Ok(Self { targets, labs })
    }
}
