//! List command implementation.
//!
//! The `labcheck list` command shows the resolved plan: every invocation in
//! order, and every configured lab with why it is in or out.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::ProjectConfig;
use crate::error::{LabcheckError, Result};
use crate::plan::{CheckPlan, LabDisposition, PlanFilter};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let config_path =
            ProjectConfig::resolve_path(&self.project_root, self.config_path.as_deref());
        let config = match ProjectConfig::load(&config_path) {
            Ok(c) => c,
            Err(e @ LabcheckError::ConfigNotFound { .. }) => {
                out.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let plan = match CheckPlan::build(&self.project_root, &config, &PlanFilter::default()) {
            Ok(plan) => plan,
            // Same contract as check: misconfiguration is a usage error.
            Err(e @ LabcheckError::ConfigValidationError { .. }) => {
                out.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&plan).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        out.header("Check targets (in order)");
        for target in &plan.targets {
            out.message(&format!("  {}", target.label));
        }

        if !plan.labs.is_empty() {
            out.header("Labs");
            for lab in &plan.labs {
                let line = match &lab.disposition {
                    LabDisposition::Check { target_score } => {
                        format!("  {}: checked (target score {})", lab.name, target_score)
                    }
                    LabDisposition::BelowThreshold { target_score } => {
                        format!("  {}: skipped (target score {})", lab.name, target_score)
                    }
                    LabDisposition::NoSettings => {
                        format!("  {}: skipped (no settings.json)", lab.name)
                    }
                    LabDisposition::FilteredOut => {
                        format!("  {}: skipped (filtered)", lab.name)
                    }
                };
                out.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
