//! Error types for labcheck operations.
//!
//! This module defines [`LabcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LabcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LabcheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for CI logs

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for labcheck operations.
#[derive(Debug, Error)]
pub enum LabcheckError {
    /// Project configuration file not found at expected location.
    #[error("Project config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A lab's settings.json exists but could not be read or parsed.
    #[error("Failed to read lab settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// The type checker program could not be started.
    #[error("Type checker not found: {program}")]
    CheckerNotFound { program: String },

    /// No Python interpreter available to run the default checker.
    #[error("No Python interpreter found on PATH (tried: {tried})")]
    PythonNotFound { tried: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for labcheck operations.
pub type Result<T> = std::result::Result<T, LabcheckError>;
