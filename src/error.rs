//! Error types for depensure operations.
//!
//! This module defines [`EnsureError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal: errors propagate with `?` up to `main`
//! - [`EnsureError::exit_code`] decides the process exit status
//! - Installer exit codes are surfaced unmodified

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depensure operations.
#[derive(Debug, Error)]
pub enum EnsureError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Library name does not follow packaging naming rules.
    #[error("Invalid library name: '{name}'")]
    InvalidLibraryName { name: String },

    /// Module name is not a dotted sequence of identifiers.
    #[error("Invalid module name: '{name}'")]
    InvalidModuleName { name: String },

    /// A child process could not be started.
    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// The module resolver could not answer.
    #[error("Could not check for module '{module}': {message}")]
    ProbeFailed { module: String, message: String },

    /// The installer exited non-zero or was killed.
    #[error("Installing '{library}' failed with {}: {command}", describe_exit(*.code))]
    InstallFailed {
        library: String,
        command: String,
        code: Option<i32>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnsureError {
    /// Process exit code for this error.
    ///
    /// Installer failures propagate the installer's own exit code when it
    /// fits in a process status; everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            EnsureError::InstallFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Human-readable form of a child process exit code.
pub fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for depensure operations.
pub type Result<T> = std::result::Result<T, EnsureError>;
