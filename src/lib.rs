//! labcheck - CI helper that runs static type checks across lab directories.
//!
//! labcheck reads a project config listing lab directories, decides which of
//! them need the stricter type check based on each lab's target score, and
//! runs the external checker (mypy by default) over the core directories and
//! the qualifying labs, failing the process on the first non-zero exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`checker`] - Type checker resolution and invocation
//! - [`config`] - Project and per-lab configuration loading
//! - [`error`] - Error types and result aliases
//! - [`plan`] - Check plan construction (what to check, in what order)
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use labcheck::config::ProjectConfig;
//! use labcheck::plan::{CheckPlan, PlanFilter};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = ProjectConfig::load(&root.join("project.json"))?;
//! let plan = CheckPlan::build(root, &config, &PlanFilter::default())?;
//! for target in &plan.targets {
//!     println!("would check: {}", target.label);
//! }
//! # Ok::<(), labcheck::LabcheckError>(())
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod plan;
pub mod shell;
pub mod ui;

pub use error::{LabcheckError, Result};
