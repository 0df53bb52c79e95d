//! Check command implementation.
//!
//! The `labcheck check` command runs the type checker over every planned
//! target, stopping at the first failure and carrying its exit code out.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checker::CheckerSpec;
use crate::cli::args::CheckArgs;
use crate::config::ProjectConfig;
use crate::error::{LabcheckError, Result};
use crate::plan::{CheckPlan, PlanFilter};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// Checker configuration file, relative to the project root.
const CHECKER_CONFIG_FILE: &str = "pyproject.toml";

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    fn build_plan(&self) -> Result<CheckPlan> {
        let config_path =
            ProjectConfig::resolve_path(&self.project_root, self.config_path.as_deref());
        let config = ProjectConfig::load(&config_path)?;

        let filter = PlanFilter {
            only: self.args.only.clone(),
            skip: self.args.skip.clone(),
        };
        CheckPlan::build(&self.project_root, &config, &filter)
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let plan = match self.build_plan() {
            Ok(plan) => plan,
            // Misconfiguration is a usage error (exit 2), distinct from a
            // failed check whose exit code comes from the checker.
            Err(e @ LabcheckError::ConfigNotFound { .. })
            | Err(e @ LabcheckError::ConfigValidationError { .. }) => {
                out.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let checker = match CheckerSpec::resolve(self.args.checker.as_deref()) {
            Ok(c) => c,
            Err(e @ LabcheckError::PythonNotFound { .. }) => {
                out.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // The version probe spawns a subprocess, so skip it unless the
        // result would actually be logged.
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Some(version) = checker.version() {
                tracing::debug!("{} version {}", checker.name(), version);
            }
        }

        let checker_config = self.project_root.join(CHECKER_CONFIG_FILE);

        if self.args.dry_run {
            out.message("Dry run: planned invocations");
            for target in &plan.targets {
                out.message(&checker.render(&target.paths, &checker_config));
            }
            return Ok(CommandResult::success());
        }

        for target in &plan.targets {
            out.header(&format!("Running {} on {}", checker.name(), target.label));

            let result = match checker.run(&target.paths, &checker_config, &self.project_root) {
                Ok(r) => r,
                // A missing checker binary is a setup problem, not a type
                // error: report it with the usage exit code.
                Err(e @ LabcheckError::CheckerNotFound { .. }) => {
                    out.error(&e.to_string());
                    return Ok(CommandResult::failure(2));
                }
                Err(e) => return Err(e),
            };

            // Forward the checker's output verbatim, stdout to stdout and
            // stderr to stderr, so CI logs read like a direct invocation.
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
            let _ = std::io::stdout().flush();

            if !result.success {
                let code = result.exit_code.unwrap_or(1);
                out.error(&format!(
                    "{} failed on {} (exit code {})",
                    checker.name(),
                    target.label,
                    code
                ));
                return Ok(CommandResult::failure(code));
            }

            tracing::debug!(
                "{} passed on {} in {:.1}s",
                checker.name(),
                target.label,
                result.duration.as_secs_f64()
            );
        }

        out.success("All type checks passed");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quiet() -> Output {
        Output::new(true)
    }

    #[test]
    fn missing_config_fails_with_usage_code() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());

        let result = cmd.execute(&quiet()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn invalid_config_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("project.json"), "{broken").unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());

        let err = cmd.execute(&quiet()).unwrap_err();
        assert!(matches!(err, LabcheckError::ConfigParseError { .. }));
    }

    #[test]
    fn missing_lab_directory_fails_with_usage_code() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("project.json"),
            r#"{"labs": ["lab_5_scrapper"]}"#,
        )
        .unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());

        let result = cmd.execute(&quiet()).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_checker_program_fails_with_usage_code() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("project.json"), r#"{"labs": []}"#).unwrap();

        let args = CheckArgs {
            checker: Some(PathBuf::from("/definitely/not/a/checker")),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), None, args);

        let result = cmd.execute(&quiet()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[cfg(unix)]
    #[test]
    fn dry_run_does_not_invoke_checker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("project.json"), r#"{"labs": []}"#).unwrap();

        // A checker that would fail loudly if invoked.
        let args = CheckArgs {
            dry_run: true,
            checker: Some(PathBuf::from("/definitely/not/a/checker")),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), None, args);

        let result = cmd.execute(&quiet()).unwrap();
        assert!(result.success);
    }
}
