//! The external type checker: resolution and invocation.
//!
//! By default the checker is mypy run through a Python interpreter
//! (`python -m mypy`), matching how the checked repositories install it.
//! `--checker` (or `LABCHECK_CHECKER`) swaps in any program that accepts
//! the same `<paths>... --config-file <file>` argument shape.

pub mod probe;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};
use std::path::{Path, PathBuf};

/// How to start the type checker.
#[derive(Debug, Clone)]
pub struct CheckerSpec {
    program: PathBuf,
    leading_args: Vec<String>,
    name: String,
}

impl CheckerSpec {
    /// Resolve the checker, honoring an explicit program override.
    pub fn resolve(override_program: Option<&Path>) -> Result<Self> {
        match override_program {
            Some(program) => Ok(Self::direct(program)),
            None => {
                let python = probe::find_python()?;
                Ok(Self {
                    program: python,
                    leading_args: vec!["-m".into(), "mypy".into()],
                    name: "mypy".into(),
                })
            }
        }
    }

    /// A checker invoked directly, with no leading arguments.
    pub fn direct(program: &Path) -> Self {
        let name = program
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program: program.to_path_buf(),
            leading_args: Vec::new(),
            name,
        }
    }

    /// Short display name of the checker (e.g. "mypy").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probe the checker's version (best effort, for debug logging).
    pub fn version(&self) -> Option<String> {
        probe::checker_version(&self.program, &self.leading_args)
    }

    /// Build the full argument list for one invocation.
    fn args_for(&self, paths: &[PathBuf], config_file: &Path) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.extend(paths.iter().map(|p| p.display().to_string()));
        args.push("--config-file".into());
        args.push(config_file.display().to_string());
        args
    }

    /// Render the invocation as a single line, for dry runs and debug logs.
    pub fn render(&self, paths: &[PathBuf], config_file: &Path) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args_for(paths, config_file));
        parts.join(" ")
    }

    /// Run the checker on a set of paths, capturing its output.
    ///
    /// The subprocess runs with the project root as working directory so
    /// the relative paths from the plan resolve against the repository.
    pub fn run(
        &self,
        paths: &[PathBuf],
        config_file: &Path,
        project_root: &Path,
    ) -> Result<CommandResult> {
        let args = self.args_for(paths, config_file);
        tracing::debug!("Running: {} {}", self.program.display(), args.join(" "));

        let options = CommandOptions {
            cwd: Some(project_root.to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
        };
        execute(&self.program, &args, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_checker_uses_file_stem_as_name() {
        let spec = CheckerSpec::direct(Path::new("/usr/local/bin/pyright"));
        assert_eq!(spec.name(), "pyright");
    }

    #[test]
    fn args_append_paths_then_config_file() {
        let spec = CheckerSpec::direct(Path::new("mypy"));
        let paths = [PathBuf::from("config"), PathBuf::from("lab_5_scrapper")];
        let args = spec.args_for(&paths, Path::new("pyproject.toml"));

        assert_eq!(
            args,
            ["config", "lab_5_scrapper", "--config-file", "pyproject.toml"]
        );
    }

    #[test]
    fn render_includes_program_and_args() {
        let spec = CheckerSpec::direct(Path::new("mypy"));
        let rendered = spec.render(&[PathBuf::from("core_utils")], Path::new("pyproject.toml"));

        assert_eq!(rendered, "mypy core_utils --config-file pyproject.toml");
    }

    #[test]
    fn module_checker_keeps_leading_args_first() {
        let spec = CheckerSpec {
            program: PathBuf::from("python3"),
            leading_args: vec!["-m".into(), "mypy".into()],
            name: "mypy".into(),
        };
        let args = spec.args_for(&[PathBuf::from("config")], Path::new("pyproject.toml"));

        assert_eq!(
            args,
            ["-m", "mypy", "config", "--config-file", "pyproject.toml"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn run_propagates_exit_code() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("fake-checker");
        let mut f = std::fs::File::create(&script).unwrap();
        writeln!(f, "#!/bin/sh\nexit 2").unwrap();
        drop(f);
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let spec = CheckerSpec::direct(&script);
        let result = spec
            .run(
                &[PathBuf::from("config")],
                Path::new("pyproject.toml"),
                temp.path(),
            )
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }
}
