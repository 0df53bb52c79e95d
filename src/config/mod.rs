//! Configuration loading for the project and individual labs.
//!
//! Two files drive labcheck:
//!
//! - `project.json` at the repository root lists lab directory names in the
//!   order they should be checked (see [`ProjectConfig`]).
//! - `settings.json` inside each lab carries that lab's target score
//!   (see [`LabSettings`]).

pub mod lab_settings;
pub mod project;

pub use lab_settings::{LabSettings, SETTINGS_FILE};
pub use project::{ProjectConfig, PROJECT_CONFIG_FILE};
