//! Tool discovery on PATH and checker version probing.
//!
//! CI images differ in which Python launcher they ship, so the default
//! checker resolution tries `python3` before `python` (and `py` on
//! Windows), the same preference order the launchers document.

use crate::error::{LabcheckError, Result};
use crate::shell::{execute, CommandOptions};
use regex::Regex;
use std::path::{Path, PathBuf};

#[cfg(not(windows))]
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];
#[cfg(windows)]
const PYTHON_CANDIDATES: [&str; 3] = ["python3", "python", "py"];

/// Find an executable by name on PATH.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && path
            .metadata()
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Find a Python interpreter for running the default checker.
pub fn find_python() -> Result<PathBuf> {
    for candidate in PYTHON_CANDIDATES {
        if let Some(path) = find_in_path(candidate) {
            tracing::debug!("Using Python interpreter: {}", path.display());
            return Ok(path);
        }
    }
    Err(LabcheckError::PythonNotFound {
        tried: PYTHON_CANDIDATES.join(", "),
    })
}

/// Probe the checker's version by running `--version`.
///
/// Returns None when the probe fails or the output carries no version
/// number; the caller only uses this for debug logging.
pub fn checker_version(program: &Path, leading_args: &[String]) -> Option<String> {
    let mut args = leading_args.to_vec();
    args.push("--version".into());

    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    let result = execute(program, &args, &options).ok()?;
    if !result.success {
        return None;
    }

    extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
}

/// Pull the first `X.Y` or `X.Y.Z` out of version output.
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
